use crate::{
    shape::{Container, Shape, ShapeError, classify},
    value::Value,
};

fn nested(outer: Container, inner: Container) -> Shape {
    Shape::Nested { outer, inner }
}

fn sample(container: Container, numbers: &[i32]) -> Value {
    match container {
        Container::Array => Value::array(numbers.iter().copied()),
        Container::List => Value::list(numbers.iter().copied()),
        Container::Map => Value::map(
            numbers
                .iter()
                .enumerate()
                .map(|(i, n)| (Value::index(i), *n)),
        ),
    }
}

fn wrap(container: Container, groups: Vec<Value>) -> Value {
    match container {
        Container::Array => Value::Array(groups),
        Container::List => Value::List(groups),
        Container::Map => Value::Map(
            groups
                .into_iter()
                .enumerate()
                .map(|(i, g)| (Value::index(i), g))
                .collect(),
        ),
    }
}

const CONTAINERS: [Container; 3] = [Container::Array, Container::List, Container::Map];

#[test]
fn bare_number_is_scalar() {
    assert_eq!(classify(&Value::from(3i32)), Ok(Shape::Scalar));
}

#[test]
fn flat_containers_classify_by_outer_form() {
    for container in CONTAINERS {
        let shape = classify(&sample(container, &[1, 2])).expect("flat input classifies");
        assert_eq!(shape, Shape::Flat(container));
        assert_eq!(shape.depth(), 1);
    }
}

#[test]
fn all_nine_nested_combinations_classify() {
    for outer in CONTAINERS {
        for inner in CONTAINERS {
            let input = wrap(outer, vec![sample(inner, &[1, 2]), sample(inner, &[3])]);
            let shape = classify(&input).expect("nested input classifies");

            assert_eq!(shape, nested(outer, inner));
            assert!(shape.is_nested());
            assert_eq!(shape.outer(), Some(outer));
        }
    }
}

#[test]
fn non_numeric_scalars_are_unsupported() {
    for value in [Value::Null, Value::from("a"), Value::from(false)] {
        let err = classify(&value).expect_err("non-numeric scalar must fail");
        assert!(
            matches!(err, ShapeError::UnsupportedInput { .. }),
            "value: {value:?}"
        );
    }
}

#[test]
fn text_element_sequence_is_unsupported() {
    let input = Value::array(["ab", "cd", "ef"]);
    let err = classify(&input).expect_err("text array must fail");

    assert_eq!(
        err,
        ShapeError::UnsupportedMember {
            index: 0,
            label: "Text"
        }
    );
}

#[test]
fn empty_containers_are_empty_input() {
    for container in CONTAINERS {
        let err = classify(&wrap(container, vec![])).expect_err("empty input must fail");
        assert!(err.is_empty_input(), "container: {container}");
    }
}

#[test]
fn empty_first_group_is_empty_input() {
    let input = Value::List(vec![Value::List(vec![]), Value::list([1i32])]);
    let err = classify(&input).expect_err("empty first group must fail");

    assert_eq!(err, ShapeError::EmptyGroup { index: 0 });
}

#[test]
fn only_first_member_is_inspected() {
    // later heterogeneous members are left to the reduction to report
    let input = Value::List(vec![Value::list([1i32]), Value::from("late")]);

    assert_eq!(
        classify(&input),
        Ok(nested(Container::List, Container::List))
    );
}

#[test]
fn shape_labels_are_stable() {
    assert_eq!(Shape::Scalar.to_string(), "Scalar");
    assert_eq!(Shape::Flat(Container::Map).to_string(), "Map");
    assert_eq!(
        nested(Container::Array, Container::Map).to_string(),
        "ArrayOfMap"
    );
}
