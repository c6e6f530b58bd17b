use crate::error::ProfileError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Profile path holding the channel set a business sells through.
pub const CHANNELS_PATH: &str = "business.channels";
/// Profile path holding the primary business-type id.
pub const PRIMARY_TYPE_PATH: &str = "business.primary_type";

/// Runtime value types stored at a profile path.
///
/// The untagged serde representation matches the host's plain JSON profile
/// documents (`"business.channels": ["dine_in"]`). It is only deserializable
/// from self-describing formats such as JSON; binary catalog packs never
/// carry profile values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileValue {
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<String>),
    Null,
}

impl ProfileValue {
    /// Whether the value counts as an answer. `Null`, the empty string, and
    /// the empty list do not; everything else does.
    pub fn is_meaningful(&self) -> bool {
        match self {
            ProfileValue::Null => false,
            ProfileValue::Text(text) => !text.is_empty(),
            ProfileValue::List(items) => !items.is_empty(),
            ProfileValue::Number(_) | ProfileValue::Bool(_) => true,
        }
    }

    /// Compares the value against its canonical text form. A `List` matches
    /// when it contains the expected entry, so a multi-select answer matches
    /// each of its selected option ids.
    pub fn matches_text(&self, expected: &str) -> bool {
        match self {
            ProfileValue::Text(text) => text == expected,
            ProfileValue::List(items) => items.iter().any(|item| item == expected),
            ProfileValue::Bool(flag) => expected == if *flag { "true" } else { "false" },
            ProfileValue::Number(_) => self.to_string() == expected,
            ProfileValue::Null => false,
        }
    }
}

impl fmt::Display for ProfileValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileValue::Text(text) => write!(f, "{}", text),
            ProfileValue::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            ProfileValue::Bool(flag) => write!(f, "{}", flag),
            ProfileValue::List(items) => write!(f, "[{}]", items.join(", ")),
            ProfileValue::Null => write!(f, "null"),
        }
    }
}

impl From<&str> for ProfileValue {
    fn from(text: &str) -> Self {
        ProfileValue::Text(text.to_string())
    }
}

impl From<f64> for ProfileValue {
    fn from(n: f64) -> Self {
        ProfileValue::Number(n)
    }
}

impl From<bool> for ProfileValue {
    fn from(flag: bool) -> Self {
        ProfileValue::Bool(flag)
    }
}

impl From<Vec<&str>> for ProfileValue {
    fn from(items: Vec<&str>) -> Self {
        ProfileValue::List(items.into_iter().map(str::to_string).collect())
    }
}

/// A flat snapshot of every known business fact and prior answer, keyed by
/// dot-path strings (`business.channels`, `finance.monthly_revenue`).
///
/// The engine treats a profile as immutable; answer writes go through
/// [`BusinessProfile::with_value`] and return a new snapshot, which keeps
/// undo/redo and re-render triggers predictable for the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusinessProfile {
    values: AHashMap<String, ProfileValue>,
}

impl BusinessProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a profile from pre-flattened path/value pairs.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, ProfileValue)>,
        K: Into<String>,
    {
        Self {
            values: entries
                .into_iter()
                .map(|(path, value)| (path.into(), value))
                .collect(),
        }
    }

    /// Builds a profile from a host JSON document. Nested objects are
    /// flattened into dot paths; anything that is not an object at the top
    /// level is a contract violation.
    pub fn from_json(document: serde_json::Value) -> Result<Self, ProfileError> {
        let map = match document {
            serde_json::Value::Object(map) => map,
            other => return Err(ProfileError::NotAnObject(describe_json(&other).to_string())),
        };
        let mut values = AHashMap::new();
        for (path, value) in map {
            flatten_into(&mut values, path, value)?;
        }
        Ok(Self { values })
    }

    pub fn get(&self, path: &str) -> Option<&ProfileValue> {
        self.values.get(path)
    }

    /// The channel set at [`CHANNELS_PATH`], empty when unset or not a list.
    pub fn channels(&self) -> &[String] {
        match self.values.get(CHANNELS_PATH) {
            Some(ProfileValue::List(items)) => items,
            _ => &[],
        }
    }

    /// The primary business-type id at [`PRIMARY_TYPE_PATH`].
    pub fn primary_type(&self) -> Option<&str> {
        match self.values.get(PRIMARY_TYPE_PATH) {
            Some(ProfileValue::Text(type_id)) => Some(type_id),
            _ => None,
        }
    }

    /// Whether the path holds a meaningful answer.
    pub fn is_answered(&self, path: &str) -> bool {
        self.values
            .get(path)
            .map(ProfileValue::is_meaningful)
            .unwrap_or(false)
    }

    /// Pure write: returns a new snapshot with `value` stored at `path`,
    /// overwriting whole values (including full array replacement for
    /// multi-select answers). The input snapshot is untouched.
    pub fn with_value(&self, path: &str, value: ProfileValue) -> Self {
        let mut next = self.clone();
        next.values.insert(path.to_string(), value);
        next
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn flatten_into(
    values: &mut AHashMap<String, ProfileValue>,
    path: String,
    value: serde_json::Value,
) -> Result<(), ProfileError> {
    match value {
        serde_json::Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(values, format!("{}.{}", path, key), nested)?;
            }
        }
        serde_json::Value::Null => {
            values.insert(path, ProfileValue::Null);
        }
        serde_json::Value::Bool(flag) => {
            values.insert(path, ProfileValue::Bool(flag));
        }
        serde_json::Value::Number(n) => {
            let n = n.as_f64().ok_or_else(|| ProfileError::UnsupportedValue {
                path: path.clone(),
                found: n.to_string(),
            })?;
            values.insert(path, ProfileValue::Number(n));
        }
        serde_json::Value::String(text) => {
            values.insert(path, ProfileValue::Text(text));
        }
        serde_json::Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    serde_json::Value::String(text) => list.push(text),
                    other => {
                        return Err(ProfileError::UnsupportedValue {
                            path,
                            found: describe_json(&other).to_string(),
                        });
                    }
                }
            }
            values.insert(path, ProfileValue::List(list));
        }
    }
    Ok(())
}

fn describe_json(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
