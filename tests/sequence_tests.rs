//! Unit tests for sequence and collection operations.
//!
//! Tests cover:
//! - Search and slicing: first, last, index_of
//! - Filtering: filter, reject, uniq, uniq_by, intersection, difference, flatten
//! - Transformation: map, pluck, invoke
//! - Aggregation: reduce, contains, every, some
//! - Reordering: sort_by, sort_by_field, shuffle, zip

#![cfg(feature = "sequence")]

use rstest::rstest;
use std::cell::Cell;
use std::collections::HashMap;
use toolbelt::collection::{Invocable, Record};
use toolbelt::error::ToolkitError;
use toolbelt::sequence::*;

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

impl Person {
    fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

impl Invocable<String> for Person {
    type Output = String;

    fn invoke_method(&self, name: &str, greeting: &String) -> Option<String> {
        match name {
            "greet" => Some(format!("{greeting}, {}", self.name)),
            "shout" => Some(self.name.to_uppercase()),
            _ => None,
        }
    }
}

fn people() -> Vec<HashMap<String, u32>> {
    vec![
        HashMap::from([("age".to_string(), 41), ("id".to_string(), 1)]),
        HashMap::from([("age".to_string(), 36), ("id".to_string(), 2)]),
        HashMap::from([("age".to_string(), 85), ("id".to_string(), 3)]),
    ]
}

// =============================================================================
// Search and slicing
// =============================================================================

#[rstest]
fn first_and_last_single_element() {
    let values = [1, 2, 3];
    assert_eq!(first(&values), Some(&1));
    assert_eq!(last(&values), Some(&3));
}

#[rstest]
fn first_and_last_on_empty_return_sentinel() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(first(&empty), None);
    assert_eq!(last(&empty), None);
}

#[rstest]
#[case(0, &[])]
#[case(2, &[1, 2])]
#[case(3, &[1, 2, 3])]
#[case(9, &[1, 2, 3])]
fn first_n_cases(#[case] count: usize, #[case] expected: &[i32]) {
    assert_eq!(first_n(&[1, 2, 3], count), expected);
}

#[rstest]
#[case(0, &[])]
#[case(2, &[2, 3])]
#[case(9, &[1, 2, 3])]
fn last_n_cases(#[case] count: usize, #[case] expected: &[i32]) {
    assert_eq!(last_n(&[1, 2, 3], count), expected);
}

#[rstest]
fn index_of_finds_first_occurrence() {
    assert_eq!(index_of(&[4, 5, 6, 5], &5), Some(1));
    assert_eq!(index_of(&[4, 5, 6], &7), None);
    assert_eq!(index_of::<i32>(&[], &7), None);
}

// =============================================================================
// Filtering
// =============================================================================

#[rstest]
fn filter_and_reject_partition() {
    let values = [1, 2, 3, 4, 5, 6];
    let is_even = |value: &i32| value % 2 == 0;
    assert_eq!(filter(&values, is_even), vec![2, 4, 6]);
    assert_eq!(reject(&values, is_even), vec![1, 3, 5]);
}

#[rstest]
fn reject_over_mapping() {
    let stock = HashMap::from([("apples".to_string(), 0), ("pears".to_string(), 4)]);
    assert_eq!(reject(&stock, |count| *count), vec![0]);
}

#[rstest]
fn uniq_keeps_first_occurrence_order() {
    assert_eq!(uniq(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
    assert_eq!(uniq(&["b", "a", "b"]), vec!["b", "a"]);
    assert!(uniq::<u8>(&[]).is_empty());
}

#[rstest]
fn uniq_by_with_unsorted_input() {
    let words = ["Apple", "apple", "Banana", "APPLE"];
    assert_eq!(
        uniq_by(&words, false, |word| word.to_lowercase()),
        vec!["Apple", "Banana"]
    );
}

#[rstest]
fn uniq_by_sorted_fast_path() {
    let sorted = [1, 1, 2, 3, 3, 3];
    assert_eq!(uniq_by(&sorted, true, |value| *value), vec![1, 2, 3]);
}

#[rstest]
fn intersection_examples() {
    assert_eq!(intersection(&[vec![1, 2, 3], vec![2, 3, 4]]), vec![2, 3]);
    assert_eq!(
        intersection(&[vec!["moe", "curly", "larry"], vec!["moe", "groucho"], vec!["moe"]]),
        vec!["moe"]
    );
    assert_eq!(intersection(&[vec![3, 3, 1]]), vec![3, 1]);
    assert!(intersection(&[vec![1], Vec::new()]).is_empty());
}

#[rstest]
fn difference_examples() {
    assert_eq!(difference(&[1, 2, 3], &[vec![2]]), vec![1, 3]);
    assert_eq!(difference(&[1, 2, 3], &Vec::<Vec<i32>>::new()), vec![1, 2, 3]);
    assert_eq!(difference(&[1, 2, 3, 4], &[vec![2, 30, 40], vec![1, 11, 111]]), vec![3, 4]);
}

#[rstest]
fn flatten_mixed_nesting() {
    let nested = vec![
        Nested::Leaf("a"),
        Nested::list([Nested::Leaf("b"), Nested::list([Nested::Leaf("c")])]),
    ];
    assert_eq!(flatten(&nested), vec!["a", "b", "c"]);
    assert_eq!(nested.len(), 2);
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_preserves_order_and_length() {
    let values = vec![1, 2, 3];
    let mapped = map(&values, |value, key, _| (key.index(), value * 10));
    assert_eq!(mapped, vec![(Some(0), 10), (Some(1), 20), (Some(2), 30)]);
}

#[rstest]
fn pluck_extracts_fields() {
    assert_eq!(pluck(&people(), "age"), vec![Some(41), Some(36), Some(85)]);
    assert_eq!(pluck(&people(), "height"), vec![None, None, None]);
}

#[rstest]
fn invoke_by_name_passes_arguments() {
    let crowd = [Person::new("Ada", 36), Person::new("Alan", 41)];
    let greetings = invoke(&crowd, Method::ByName("greet"), &"Hello".to_string());
    assert_eq!(
        greetings,
        Ok(vec!["Hello, Ada".to_string(), "Hello, Alan".to_string()])
    );
}

#[rstest]
fn invoke_by_callable_uses_record_as_receiver() {
    let crowd = [Person::new("Ada", 36), Person::new("Alan", 41)];
    let describe = |person: &Person, suffix: &String| format!("{} is {}{suffix}", person.name, person.age);
    assert_eq!(
        invoke(&crowd, Method::ByCallable(&describe), &"!".to_string()),
        Ok(vec!["Ada is 36!".to_string(), "Alan is 41!".to_string()])
    );
}

#[rstest]
fn invoke_unknown_method_fails() {
    let crowd = [Person::new("Ada", 36)];
    assert_eq!(
        invoke(&crowd, Method::ByName("dance"), &String::new()),
        Err(ToolkitError::UnknownMethod {
            name: "dance".to_string()
        })
    );
}

// =============================================================================
// Aggregation
// =============================================================================

#[rstest]
fn reduce_sums() {
    assert_eq!(reduce(&[1, 2, 3], |total, value| total + value, 0), 6);
    let empty: [i32; 0] = [];
    assert_eq!(reduce(&empty, |total, value| total + value, 0), 0);
}

#[rstest]
fn reduce_without_initial_starts_at_zero() {
    let total: f64 = reduce_from_zero(&[0.5, 0.25], |total: f64, value| total + value);
    assert!((total - 0.75).abs() < f64::EPSILON);
}

#[rstest]
fn reduce_calls_iterator_once_per_value() {
    let calls = Cell::new(0);
    reduce(
        &[1, 2, 3, 4],
        |total, value| {
            calls.set(calls.get() + 1);
            total + value
        },
        0,
    );
    assert_eq!(calls.get(), 4);
}

#[rstest]
fn contains_uses_equality() {
    assert!(contains(&["a", "b"], &"b"));
    assert!(!contains(&["a", "b"], &"c"));
    let empty: Vec<&str> = Vec::new();
    assert!(!contains(&empty, &"a"));
}

#[rstest]
#[case(&[2, 4, 6], true)]
#[case(&[2, 3, 6], false)]
#[case(&[], true)]
fn every_even(#[case] values: &[i32], #[case] expected: bool) {
    assert_eq!(every(values, |value| value % 2 == 0), expected);
}

#[rstest]
#[case(&[1, 3, 6], true)]
#[case(&[1, 3, 5], false)]
#[case(&[], false)]
fn some_even(#[case] values: &[i32], #[case] expected: bool) {
    assert_eq!(some(values, |value| value % 2 == 0), expected);
}

#[rstest]
fn quantifiers_with_default_predicate() {
    assert!(every_truthy(&[true, true]));
    assert!(!every_truthy(&["x", ""]));
    assert!(some_truthy(&[0_u8, 0, 3]));
    assert!(!some_truthy(&[None::<u8>, None]));
}

// =============================================================================
// Reordering
// =============================================================================

#[rstest]
fn sort_by_key_function() {
    let crowd = vec![Person::new("Alan", 41), Person::new("Ada", 36), Person::new("Grace", 85)];
    let sorted = sort_by(&crowd, |person| person.age).unwrap();
    let names: Vec<&str> = map(&sorted, |person, _, _| person.name.as_str());
    assert_eq!(names, vec!["Ada", "Alan", "Grace"]);
}

#[rstest]
fn sort_by_field_name() {
    let sorted = sort_by_field(&people(), "age").unwrap();
    assert_eq!(pluck(&sorted, "id"), vec![Some(2), Some(1), Some(3)]);
}

#[rstest]
fn sort_by_field_missing_fields_first() {
    let records = vec![
        HashMap::from([("rank".to_string(), 2)]),
        HashMap::new(),
        HashMap::from([("rank".to_string(), 1)]),
    ];
    let sorted = sort_by_field(&records, "rank").unwrap();
    assert_eq!(pluck(&sorted, "rank"), vec![None, Some(1), Some(2)]);
}

#[rstest]
fn sort_by_rejects_empty_input() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(
        sort_by(&empty, |value| *value),
        Err(ToolkitError::InvalidArgument {
            operation: "sort_by",
            reason: "cannot sort an empty sequence",
        })
    );
    let records: Vec<HashMap<String, i32>> = Vec::new();
    assert!(matches!(
        sort_by_field(&records, "x"),
        Err(ToolkitError::InvalidArgument { operation: "sort_by_field", .. })
    ));
}

#[cfg(feature = "shuffle")]
#[rstest]
fn shuffle_is_a_permutation_and_leaves_input_alone() {
    let values: Vec<u32> = (0..32).collect();
    let mut shuffled = shuffle(&values);
    assert_eq!(values, (0..32).collect::<Vec<u32>>());
    shuffled.sort_unstable();
    assert_eq!(shuffled, values);
}

#[cfg(feature = "shuffle")]
#[rstest]
fn shuffle_with_seeded_rng_is_reproducible() {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    let values = [1, 2, 3, 4, 5, 6, 7, 8];
    let first_run = shuffle_with(&values, &mut SmallRng::seed_from_u64(42));
    let second_run = shuffle_with(&values, &mut SmallRng::seed_from_u64(42));
    assert_eq!(first_run, second_run);
}

#[rstest]
fn zip_pads_shorter_sequences() {
    let zipped = zip(&[vec!["a", "b", "c", "d"], vec!["1", "2", "3"]]);
    assert_eq!(
        zipped,
        vec![
            vec![Some("a"), Some("1")],
            vec![Some("b"), Some("2")],
            vec![Some("c"), Some("3")],
            vec![Some("d"), None],
        ]
    );
}

#[rstest]
fn zip_uses_longest_sequence_even_when_not_first() {
    let zipped = zip(&[vec![1], vec![1, 2, 3]]);
    assert_eq!(zipped.len(), 3);
    assert_eq!(zipped[2], vec![None, Some(3)]);
}

#[rstest]
fn zip2_pairs_different_types() {
    let pairs = zip2(&['a', 'b', 'c', 'd'], &[1, 2, 3]);
    assert_eq!(
        pairs,
        vec![
            (Some('a'), Some(1)),
            (Some('b'), Some(2)),
            (Some('c'), Some(3)),
            (Some('d'), None),
        ]
    );
}

// =============================================================================
// Records
// =============================================================================

#[rstest]
fn custom_record_participates_in_pluck() {
    struct Point {
        x: i32,
        y: i32,
    }

    impl Record for Point {
        type Field = i32;

        fn field(&self, name: &str) -> Option<&i32> {
            match name {
                "x" => Some(&self.x),
                "y" => Some(&self.y),
                _ => None,
            }
        }
    }

    let points = [Point { x: 1, y: 2 }, Point { x: 3, y: 4 }];
    assert_eq!(pluck(&points, "y"), vec![Some(2), Some(4)]);
}
