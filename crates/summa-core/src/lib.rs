//! Core engine for summa: kind-preserving sums over flat and grouped
//! containers, with the output containers exported via the `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod container;
pub mod engine;
pub mod error;
pub mod materialize;
pub mod number;
pub mod obs;
pub mod reduce;
pub mod shape;
pub mod sizing;
pub mod traits;
pub mod types;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, telemetry, or stage functions are re-exported here.
///

pub mod prelude {
    pub use crate::{
        container::{MappingKind, SequenceKind},
        engine::{Engine, EngineOptions},
        materialize::{KeySource, Output, OutputSpec},
        number::{AdditionPolicy, Number, NumericKind},
        shape::Shape,
        sizing::SizingPolicy,
        traits::{MappingContainer, SequenceContainer},
        types::{Decimal, Int},
        value::Value,
    };
}
