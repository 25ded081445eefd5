// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chunkwise::{map_if, map_if_else, MapIfExt};
use chunkwise_test_utils::test_data::{people, person_saman};
use chunkwise_test_utils::Person;
use std::cell::Cell;

#[test]
fn test_without_func_else() {
    let values: Vec<_> = map_if(
        (-5..5).map(|n: i32| n.to_string()),
        |n| n.parse::<i32>().is_ok_and(|n| n > 3),
        |_| "too big".to_string(),
    )
    .collect();
    assert_eq!(
        values,
        vec!["-5", "-4", "-3", "-2", "-1", "0", "1", "2", "3", "too big"]
    );
}

#[test]
fn test_with_func_else() {
    let values: Vec<_> = map_if_else(-5..5, |n| *n >= 0, |_| "notneg", |_| "neg").collect();
    let mut expected = vec!["neg"; 5];
    expected.extend(["notneg"; 5]);
    assert_eq!(values, expected);
}

#[test]
fn test_empty() {
    let values: Vec<String> = map_if(Vec::<String>::new(), |s| s.len() > 5, |_| String::new()).collect();
    assert!(values.is_empty());
}

#[test]
fn test_each_element_takes_one_branch() {
    // Arrange
    let then_calls = Cell::new(0);
    let else_calls = Cell::new(0);

    // Act
    let names: Vec<_> = people()
        .into_iter()
        .map_if_else(
            |p| p.last_name == "amini",
            |p| {
                then_calls.set(then_calls.get() + 1);
                p.full_name()
            },
            |p| {
                else_calls.set(else_calls.get() + 1);
                p.email()
            },
        )
        .collect();

    // Assert
    assert_eq!(names[0], person_saman().full_name());
    assert_eq!(then_calls.get() + else_calls.get(), people().len());
    assert_eq!(then_calls.get(), 2);
}

#[test]
fn test_method_form() {
    let people: Vec<Person> = people()
        .into_iter()
        .map_if(
            |p| p.first_name.starts_with('s'),
            |p| Person::new(p.first_name.to_uppercase(), p.last_name),
        )
        .collect();
    assert_eq!(people[0].first_name, "SAMAN");
    assert_eq!(people[1].first_name, "artin");
}
