use super::{SectorRegistry, SectorRegistryBuilder, VerticalDefinition};
use crate::error::PackError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A pre-built registry snapshot that can be shipped as a single artifact
/// and loaded without re-running catalog construction.
#[derive(Serialize, Deserialize)]
pub struct CatalogPack {
    pub verticals: Vec<VerticalDefinition>,
    pub default_key: String,
}

impl CatalogPack {
    pub fn from_registry(registry: &SectorRegistry) -> Self {
        Self {
            verticals: registry.verticals().cloned().collect(),
            default_key: registry.default_key().to_string(),
        }
    }

    /// Rebuilds a registry, re-validating the default-vertical invariant.
    pub fn into_registry(self) -> Result<SectorRegistry, PackError> {
        let mut builder = SectorRegistryBuilder::new().with_default(&self.default_key);
        for vertical in self.verticals {
            builder = builder.with_vertical(vertical);
        }
        Ok(builder.build()?)
    }

    /// Serializes the pack into the bincode format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PackError> {
        encode_to_vec(self, standard()).map_err(|e| PackError::Encode(e.to_string()))
    }

    /// Saves the pack to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), PackError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| PackError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| PackError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Loads a pack from a file.
    pub fn from_file(path: &str) -> Result<Self, PackError> {
        let mut file = fs::File::open(path).map_err(|e| PackError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| PackError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a pack from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PackError> {
        decode_from_slice(bytes, standard())
            .map(|(pack, _)| pack)
            .map_err(|e| PackError::Decode(e.to_string()))
    }
}
