// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::person::Person;

pub fn person_saman() -> Person {
    Person::new("saman", "amini")
}

pub fn person_artin() -> Person {
    Person::new("artin", "amini")
}

pub fn person_mina() -> Person {
    Person::new("mina", "rahimi")
}

pub fn person_omid() -> Person {
    Person::new("omid", "karimi")
}

/// All fixture people, in a fixed order.
pub fn people() -> Vec<Person> {
    vec![person_saman(), person_artin(), person_mina(), person_omid()]
}

/// The letters `a` through `g`.
pub fn letters() -> Vec<char> {
    ('a'..='g').collect()
}
