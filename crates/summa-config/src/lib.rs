//! `summa.toml` loading: engine policies and default output descriptors.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path, path::PathBuf};
use summa_core::{
    container::{ConstructionError, MappingKind, SequenceKind},
    engine::{Engine, EngineOptions},
    materialize::{KeySource, OutputSpec},
    number::AdditionPolicy,
    sizing::SizingPolicy,
};
use thiserror::Error as ThisError;

/// Conventional file name looked up by callers.
pub const CONFIG_FILE_NAME: &str = "summa.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid output descriptor: {0}")]
    Descriptor(#[from] ConstructionError),
}

///
/// SummaConfig
///
/// Every section and key is optional; missing ones take the engine defaults.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaConfig {
    pub engine: EngineSection,
    pub output: OutputSection,
}

///
/// EngineSection
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSection {
    pub addition: AdditionPolicy,
    pub sizing: SizingPolicy,
}

///
/// OutputSection
///
/// Container descriptors, resolved against the built-in registry.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub sequence: String,
    pub mapping: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            sequence: SequenceKind::default().to_string(),
            mapping: MappingKind::default().to_string(),
        }
    }
}

impl SummaConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    /// Check that both output descriptors name a built-in container.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sequence_kind()?;
        self.mapping_kind()?;

        Ok(())
    }

    #[must_use]
    pub const fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            addition: self.engine.addition,
            sizing: self.engine.sizing,
        }
    }

    #[must_use]
    pub const fn engine(&self) -> Engine {
        Engine::new(self.engine_options())
    }

    pub fn sequence_kind(&self) -> Result<SequenceKind, ConfigError> {
        Ok(self.output.sequence.parse()?)
    }

    pub fn mapping_kind(&self) -> Result<MappingKind, ConfigError> {
        Ok(self.output.mapping.parse()?)
    }

    /// Default output for a grouped call: the configured mapping when keys
    /// are given, otherwise the configured sequence.
    pub fn output_spec(&self, keys: Option<KeySource>) -> Result<OutputSpec, ConfigError> {
        let spec = match keys {
            Some(keys) => OutputSpec::mapping(self.mapping_kind()?, keys),
            None => OutputSpec::sequence(self.sequence_kind()?),
        };

        Ok(spec)
    }
}
