use pathquill::collections::{Dictionary, MissingKeyError, OrderedCollection, OutOfRangeError};
use std::borrow::Cow;

#[test]
fn test_ordered_collection_add_and_at() {
    let mut names = OrderedCollection::new();
    names.add("Lisa").add("Bart").add_first("Maggie");

    assert_eq!(names.size(), 3);
    assert_eq!(names.at(0), Ok(&"Maggie"));
    assert_eq!(names.at(-1), Ok(&"Bart"));
    assert_eq!(names.to_vec(), vec!["Maggie", "Lisa", "Bart"]);
}

#[test]
fn test_ordered_collection_out_of_range_message() {
    let names = OrderedCollection::with_all(["Lisa"]);
    let err = names.at(5).unwrap_err();
    assert_eq!(err, OutOfRangeError { index: 5, size: 1 });
    assert_eq!(
        err.to_string(),
        "The index 5 is out of range. The collection size is 1."
    );
}

#[test]
fn test_ordered_collection_at_if_absent() {
    let numbers = OrderedCollection::with_all([1, 2, 3]);
    assert_eq!(*numbers.at_if_absent(1, || 0), 2);
    assert_eq!(*numbers.at_if_absent(9, || 0), 0);
    assert!(matches!(numbers.at_if_absent(-1, || 0), Cow::Borrowed(&3)));
}

#[test]
fn test_ordered_collection_at_if_absent_builds_owned_fallback() {
    let names = OrderedCollection::with_all(["Lisa".to_string()]);
    let fallback = names.at_if_absent(4, || format!("unknown #{}", 4));
    assert!(matches!(fallback, Cow::Owned(_)));
    assert_eq!(fallback.as_str(), "unknown #4");
}

#[test]
fn test_ordered_collection_at_put_and_remove() {
    let mut numbers = OrderedCollection::with_all([1, 2, 3]);
    numbers.at_put(-1, 30).unwrap();
    assert_eq!(numbers.remove_first(), Ok(1));
    assert_eq!(numbers.remove_last(), Ok(30));
    assert_eq!(numbers.to_vec(), vec![2]);
    assert!(numbers.at_put(4, 0).is_err());
}

#[test]
fn test_ordered_collection_select_and_collect() {
    let numbers: OrderedCollection<i32> = (1..=6).collect();
    let even = numbers.select(|n| n % 2 == 0);
    let squares = even.collect(|n| n * n);

    assert_eq!(even.to_vec(), vec![2, 4, 6]);
    assert_eq!(squares.to_vec(), vec![4, 16, 36]);
    assert_eq!(numbers.index_of(&4), Some(3));
    assert!(numbers.includes(&6));
    assert!(!numbers.includes(&7));
}

#[test]
fn test_ordered_collection_iterates_in_order() {
    let names = OrderedCollection::with_all(["a", "b", "c"]);
    let joined: String = names.iter().copied().collect();
    assert_eq!(joined, "abc");

    let mut seen = Vec::new();
    for name in &names {
        seen.push(*name);
    }
    assert_eq!(seen, vec!["a", "b", "c"]);
}

#[test]
fn test_dictionary_at_and_missing_key() {
    let mut ages = Dictionary::new();
    ages.at_put("Lisa", 8).at_put("Bart", 10);

    assert_eq!(ages.at("Bart"), Ok(&10));
    assert_eq!(
        ages.at("Homer"),
        Err(MissingKeyError {
            key: "Homer".to_string()
        })
    );
    assert_eq!(ages.keys().collect::<Vec<_>>(), vec!["Lisa", "Bart"]);
}

#[test]
fn test_dictionary_merge_overrides_shared_keys() {
    let mut defaults: Dictionary<&str> = [
        ("theme".to_string(), "dark"),
        ("language".to_string(), "en"),
    ]
    .into_iter()
    .collect();
    let mut overrides = Dictionary::new();
    overrides.at_put("language", "fr").at_put("editor", "vim");

    defaults.merge(&overrides);

    assert_eq!(defaults.size(), 3);
    assert_eq!(defaults.at("language"), Ok(&"fr"));
    assert_eq!(defaults.keys().collect::<Vec<_>>(), vec!["theme", "language", "editor"]);
}

#[test]
fn test_dictionary_at_if_absent() {
    let mut ages = Dictionary::new();
    ages.at_put("Lisa", 8);
    assert_eq!(*ages.at_if_absent("Lisa", || -1), 8);
    assert_eq!(*ages.at_if_absent("Ned", || -1), -1);
    assert!(!ages.has_key("Ned"));
    *ages.at_mut("Lisa").unwrap() += 1;
    assert_eq!(ages.at("Lisa"), Ok(&9));
}
