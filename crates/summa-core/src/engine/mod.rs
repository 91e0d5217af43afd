//! Module: engine
//! Responsibility: public entry points that run classify → reduce → materialize.
//! Does not own: the stages themselves; each lives in its own module.
//! Boundary: the only place telemetry events are recorded.


use crate::{
    container::{ConstructionError, MappingContainer, SequenceContainer},
    error::EngineError,
    materialize::{
        Output, OutputSpec, materialize_array, materialize_mapping, materialize_mapping_kind,
        materialize_sequence, materialize_sequence_kind,
    },
    number::{AdditionPolicy, Number, resolve_add},
    obs::sink::{MetricsEvent, record},
    reduce::{Reduction, reduce_all, reduce_value},
    shape::{Shape, ShapeError, classify},
    sizing::SizingPolicy,
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// EngineOptions
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct EngineOptions {
    pub addition: AdditionPolicy,
    pub sizing: SizingPolicy,
}

///
/// Engine
///
/// Stateless summation engine. Every call works on its own input and
/// returns freshly built output.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    #[must_use]
    pub const fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn with_addition(mut self, addition: AdditionPolicy) -> Self {
        self.options.addition = addition;
        self
    }

    #[must_use]
    pub const fn with_sizing(mut self, sizing: SizingPolicy) -> Self {
        self.options.sizing = sizing;
        self
    }

    #[must_use]
    pub const fn options(&self) -> EngineOptions {
        self.options
    }

    ///
    /// SCALAR
    ///

    /// Add two numbers under the configured addition policy.
    pub fn add(&self, a: &Number, b: &Number) -> Result<Number, EngineError> {
        observe(resolve_add(a, b, self.options.addition).map_err(EngineError::from))
    }

    /// Classify `x` without reducing it.
    pub fn classify(&self, x: &Value) -> Result<Shape, EngineError> {
        observe(classify_recorded(x))
    }

    /// Sum a bare number or a flat sequence or mapping of numbers.
    pub fn sum(&self, x: &Value) -> Result<Number, EngineError> {
        observe(self.sum_inner(x))
    }

    ///
    /// GROUPED
    ///

    /// Reduce every group of a nested input, without materializing.
    pub fn reduce_groups(&self, x: &Value) -> Result<Reduction, EngineError> {
        observe(self.grouped(x))
    }

    /// Per-group sums in a fixed-size array sized by the sizing policy.
    pub fn sum_array(&self, x: &Value) -> Result<Vec<Number>, EngineError> {
        observe(self.grouped(x).map(|reduction| {
            let slots = self.slots(&reduction);
            let written = reduction.group_count();
            let array = materialize_array(reduction.sums, slots);
            record_materialize("Array", array.len(), written);

            array
        }))
    }

    /// Per-group sums appended to a sequence container of type `C`.
    pub fn sum_sequence<C>(&self, x: &Value) -> Result<C, EngineError>
    where
        C: SequenceContainer,
    {
        self.sum_sequence_with(x, C::construct)
    }

    /// Per-group sums appended to a container built by `factory`.
    pub fn sum_sequence_with<C, F>(&self, x: &Value, factory: F) -> Result<C, EngineError>
    where
        C: SequenceContainer,
        F: FnOnce(usize) -> Result<C, ConstructionError>,
    {
        observe(self.grouped(x).and_then(|reduction| {
            let capacity = self.slots(&reduction);
            let written = reduction.group_count();
            let container = materialize_sequence(reduction.sums, capacity, factory)?;
            record_materialize("Sequence", capacity, written);

            Ok(container)
        }))
    }

    /// Per-group sums keyed by 0-based group index.
    pub fn sum_mapping<M>(&self, x: &Value) -> Result<M, EngineError>
    where
        M: MappingContainer<usize>,
    {
        observe(self.grouped(x).and_then(|reduction| {
            let keys = 0..reduction.group_count();
            write_mapping(keys, reduction, M::construct)
        }))
    }

    /// Per-group sums keyed by the supplied keys, in order.
    ///
    /// Fails with a key size mismatch when fewer keys than groups are given.
    pub fn sum_mapping_keyed<K, I, M>(&self, x: &Value, keys: I) -> Result<M, EngineError>
    where
        I: IntoIterator<Item = K>,
        I::IntoIter: ExactSizeIterator,
        M: MappingContainer<K>,
    {
        self.sum_mapping_with(x, keys, M::construct)
    }

    /// Keyed per-group sums written into a container built by `factory`.
    pub fn sum_mapping_with<K, I, M, F>(
        &self,
        x: &Value,
        keys: I,
        factory: F,
    ) -> Result<M, EngineError>
    where
        I: IntoIterator<Item = K>,
        I::IntoIter: ExactSizeIterator,
        M: MappingContainer<K>,
        F: FnOnce(usize) -> Result<M, ConstructionError>,
    {
        observe(
            self.grouped(x)
                .and_then(|reduction| write_mapping(keys, reduction, factory)),
        )
    }

    ///
    /// DYNAMIC
    ///

    /// Run one call against a runtime output descriptor.
    pub fn materialize(&self, x: &Value, spec: &OutputSpec) -> Result<Output, EngineError> {
        observe(self.materialize_inner(x, spec))
    }

    ///
    /// INTERNAL
    ///

    fn sum_inner(&self, x: &Value) -> Result<Number, EngineError> {
        let shape = classify_recorded(x)?;
        let sum = reduce_value(x, shape, self.options.addition)?;
        record(MetricsEvent::Reduce {
            groups: 1,
            elements: count(x.len().unwrap_or(1)),
        });

        Ok(sum)
    }

    // Classify, require a nested shape, and reduce every group.
    fn grouped(&self, x: &Value) -> Result<Reduction, EngineError> {
        let shape = classify_recorded(x)?;
        if !shape.is_nested() {
            return Err(ShapeError::UnsupportedShape { shape }.into());
        }

        let reduction = reduce_all(x, self.options.addition)?;
        record(MetricsEvent::Reduce {
            groups: count(reduction.group_count()),
            elements: count(reduction.element_count()),
        });

        Ok(reduction)
    }

    fn materialize_inner(&self, x: &Value, spec: &OutputSpec) -> Result<Output, EngineError> {
        let output = match spec {
            OutputSpec::Scalar => Output::Scalar(self.sum_inner(x)?),
            OutputSpec::Sequence(kind) => {
                let reduction = self.grouped(x)?;
                let slots = self.slots(&reduction);
                let written = reduction.group_count();
                let output = materialize_sequence_kind(*kind, reduction.sums, slots, slots)?;
                record_materialize(output.label(), slots, written);

                output
            }
            OutputSpec::Mapping { kind, keys } => {
                let reduction = self.grouped(x)?;
                let written = reduction.group_count();
                let output = materialize_mapping_kind(*kind, keys.clone(), reduction.sums)?;
                // mappings are never padded, so capacity equals written
                record_materialize(output.label(), written, written);

                output
            }
        };

        Ok(output)
    }

    fn slots(&self, reduction: &Reduction) -> usize {
        self.options
            .sizing
            .slots(reduction.group_count(), &reduction.group_sizes)
    }
}

fn classify_recorded(x: &Value) -> Result<Shape, EngineError> {
    let shape = classify(x)?;
    record(MetricsEvent::Classify { shape });

    Ok(shape)
}

// Record a rejection before handing the error back.
fn observe<T>(result: Result<T, EngineError>) -> Result<T, EngineError> {
    if let Err(err) = &result {
        record(MetricsEvent::Rejected { class: err.class() });
    }

    result
}

fn write_mapping<K, I, M, F>(keys: I, reduction: Reduction, factory: F) -> Result<M, EngineError>
where
    I: IntoIterator<Item = K>,
    I::IntoIter: ExactSizeIterator,
    M: MappingContainer<K>,
    F: FnOnce(usize) -> Result<M, ConstructionError>,
{
    let written = reduction.group_count();
    let container = materialize_mapping(keys, reduction.sums, factory)?;
    // mappings are never padded, so capacity equals written
    record_materialize("Mapping", written, written);

    Ok(container)
}

fn record_materialize(output: &'static str, capacity: usize, written: usize) {
    record(MetricsEvent::Materialize {
        output,
        capacity: count(capacity),
        written: count(written),
    });
}

fn count(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}
