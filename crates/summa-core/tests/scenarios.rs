use std::collections::{BTreeMap, VecDeque};
use summa_core::{
    error::{EngineError, ErrorClass},
    materialize::{KeyError, KeySource},
    prelude::*,
};

// ---- helpers ----

fn groups_of(container: fn(Vec<Value>) -> Value, groups: &[&[i32]]) -> Value {
    container(
        groups
            .iter()
            .map(|group| Value::list(group.iter().copied()))
            .collect(),
    )
}

#[test]
fn reference_scenario_pads_to_largest_group() {
    let input = groups_of(Value::List, &[&[1, 2, 3], &[4, 5]]);
    let engine = Engine::default();

    let reduction = engine.reduce_groups(&input).expect("reduce groups");
    assert_eq!(reduction.sums, vec![Number::Int32(6), Number::Int32(9)]);

    let output = engine
        .materialize(&input, &OutputSpec::Sequence(SequenceKind::Array))
        .expect("array output");
    assert_eq!(
        output,
        Output::Array(vec![Number::Int32(6), Number::Int32(9), Number::Int32(0)])
    );
}

#[test]
fn more_groups_than_elements_sizes_to_group_count() {
    let input = groups_of(Value::Array, &[&[1], &[2], &[3, 4]]);

    let array = Engine::default().sum_array(&input).expect("array output");
    assert_eq!(
        array,
        vec![Number::Int32(1), Number::Int32(2), Number::Int32(7)]
    );
}

#[test]
fn supplied_sequence_keys_one_short_then_exact() {
    let input = groups_of(Value::List, &[&[1, 1], &[2, 2], &[3, 3]]);
    let engine = Engine::default();

    let short = KeySource::Sequence(vec![Value::from("a"), Value::from("b")]);
    let err = engine
        .materialize(&input, &OutputSpec::mapping(MappingKind::Sorted, short))
        .expect_err("one key short");
    assert_eq!(
        err,
        EngineError::Key(KeyError::SizeMismatch { keys: 2, groups: 3 })
    );

    let keys = ["a", "b", "c"];
    let exact = KeySource::Sequence(keys.iter().copied().map(Value::from).collect());
    let output = engine
        .materialize(&input, &OutputSpec::mapping(MappingKind::Sorted, exact))
        .expect("exact keys");

    let reduction = engine.reduce_groups(&input).expect("reduce groups");
    for (key, sum) in keys.iter().zip(&reduction.sums) {
        assert_eq!(output.get(&Value::from(*key)), Some(sum));
    }
}

#[test]
fn supplied_mapping_keys_receive_distinct_sums() {
    let input = groups_of(Value::List, &[&[1], &[2], &[3]]);
    let keys = Value::map([("x", "ignored"), ("y", "ignored"), ("z", "ignored")]);
    let source = KeySource::from_value(Some(&keys)).expect("key source");

    let output = Engine::default()
        .materialize(&input, &OutputSpec::mapping(MappingKind::Insertion, source))
        .expect("mapping output");

    assert_eq!(
        output,
        Output::InsertionMap(vec![
            (Value::from("x"), Number::Int32(1)),
            (Value::from("y"), Number::Int32(2)),
            (Value::from("z"), Number::Int32(3)),
        ])
    );
}

#[test]
fn map_of_maps_reduces_in_entry_order() {
    let input = Value::map([
        ("b", Value::map([("p", 1.5f64), ("q", 0.5)])),
        ("a", Value::map([("r", 10.0f64)])),
    ]);

    let sums: VecDeque<Number> = Engine::default()
        .sum_sequence(&input)
        .expect("deque output");
    assert_eq!(
        sums,
        VecDeque::from(vec![Number::Float64(2.0), Number::Float64(10.0)])
    );
}

#[test]
fn empty_inputs_fail_with_empty_input() {
    let engine = Engine::default();

    for input in [Value::List(vec![]), Value::Map(vec![]), Value::Array(vec![])] {
        let err = engine.sum(&input).expect_err("empty input");
        assert_eq!(err.class(), ErrorClass::EmptyInput);
    }
}

#[test]
fn unsupported_inputs_fail_with_unsupported_shape() {
    let engine = Engine::default();

    for input in [
        Value::Null,
        Value::from("text"),
        Value::array(["a", "b"]),
        Value::List(vec![Value::list([1i32]), Value::from("x")]),
    ] {
        let err = engine
            .materialize(&input, &OutputSpec::Sequence(SequenceKind::List))
            .expect_err("unsupported input");
        assert_eq!(err.class(), ErrorClass::UnsupportedShape, "input: {input:?}");
    }
}

#[test]
fn unknown_descriptor_fails_before_reduction() {
    let err = "circular"
        .parse::<SequenceKind>()
        .map_err(EngineError::from)
        .expect_err("unknown descriptor");

    assert_eq!(err.class(), ErrorClass::ConstructionError);
}

#[test]
fn positional_typed_mapping_keys_are_indices() {
    let input = groups_of(Value::Array, &[&[5], &[6]]);

    let map: BTreeMap<usize, Number> = Engine::default().sum_mapping(&input).expect("map output");
    assert_eq!(
        map.into_iter().collect::<Vec<_>>(),
        vec![(0, Number::Int32(5)), (1, Number::Int32(6))]
    );
}

#[test]
fn trailing_kind_truncates_and_widening_does_not() {
    let input = Value::List(vec![Value::list([
        Number::Float64(2.5),
        Number::Float64(0.25),
        Number::Int8(1),
    ])]);

    let trailing = Engine::default().sum_array(&input).expect("trailing");
    let widening = Engine::default()
        .with_addition(AdditionPolicy::Widening)
        .sum_array(&input)
        .expect("widening");

    assert_eq!(trailing[0], Number::Int8(3));
    assert_eq!(widening[0], Number::Float64(3.75));
}
