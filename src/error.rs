use thiserror::Error;

/// Errors that can occur while building a question catalog or a sector registry.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Question id '{question_id}' is declared more than once in catalog '{catalog}'")]
    DuplicateQuestionId { question_id: String, catalog: String },

    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Default vertical '{0}' was never registered; the registry would dead-end on unknown categories")]
    MissingDefaultVertical(String),
}

/// Errors raised when a profile snapshot is structurally invalid.
///
/// Ordinary data variance (missing paths, empty profiles) is never an error;
/// only input that is not a key-path map at all is rejected.
#[derive(Error, Debug, Clone)]
pub enum ProfileError {
    #[error("Profile must be a JSON object, but found {0}")]
    NotAnObject(String),

    #[error("Profile value at '{path}' cannot be represented: {found}")]
    UnsupportedValue { path: String, found: String },
}

/// Errors raised when writing an answer back into a profile.
///
/// Unlike lookups, which degrade gracefully, writes are strict.
#[derive(Error, Debug, Clone)]
pub enum AnswerError {
    #[error("Question '{question_id}' has an empty store path; refusing to record the answer")]
    EmptyStorePath { question_id: String },
}

/// Error raised when a mode literal from the host application is not recognized.
#[derive(Error, Debug, Clone)]
#[error("Unknown onboarding mode '{0}', expected 'quick' or 'full'")]
pub struct ModeParseError(pub String);

/// Errors that can occur when saving or loading a pre-built catalog pack.
#[derive(Error, Debug)]
pub enum PackError {
    #[error("Could not access catalog pack '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Catalog pack encoding failed: {0}")]
    Encode(String),

    #[error("Catalog pack decoding failed: {0}")]
    Decode(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
