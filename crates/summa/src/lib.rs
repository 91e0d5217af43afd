//! ## Crate layout
//! - `core`: numeric model, shape classifier, reduction, materialization,
//!   and observability.
//! - `config`: `summa.toml` loading.
//! - `error`: the stable public error type.
//!
//! The free functions below run on a default [`Engine`]; build an engine from
//! [`config::SummaConfig`] to change the addition or sizing policy.


pub mod error;

pub use summa_config as config;
pub use summa_core as core;

use std::path::Path;
use summa_core::{
    materialize::{Output, OutputSpec},
    number::Number,
    value::Value,
};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// re-exports
pub use error::Error;
pub use summa_core::engine::Engine;

///
/// Prelude
///

pub mod prelude {
    pub use crate::Error;
    pub use summa_core::prelude::*;
}

/// Sum a bare number or a flat sequence or mapping of numbers.
pub fn sum(x: &Value) -> Result<Number, Error> {
    Ok(Engine::default().sum(x)?)
}

/// Per-group sums of a nested input in a padded fixed-size array.
pub fn sum_array(x: &Value) -> Result<Vec<Number>, Error> {
    Ok(Engine::default().sum_array(x)?)
}

/// Run one call against a runtime output descriptor.
pub fn materialize(x: &Value, spec: &OutputSpec) -> Result<Output, Error> {
    Ok(Engine::default().materialize(x, spec)?)
}

/// Build an engine from a `summa.toml` file.
pub fn engine_from_file(path: impl AsRef<Path>) -> Result<Engine, Error> {
    Ok(config::SummaConfig::load(path)?.engine())
}
