//! Random input generators for the three element kinds.
//!
//! Every generator takes the RNG from the caller, so a seeded [`rand::rngs::StdRng`] reproduces a
//! run exactly.

use std::fmt;

use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::rust_shellsort;
use shellsort::Direction;

pub const DEFAULT_STRING_LEN: usize = 8;

const BASE_NAMES: [&str; 10] = [
    "Ana", "Bruno", "Carla", "Daniel", "Eduarda", "Felipe", "Gabriel", "Helena", "Igor", "Julia",
];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    /// Sort key used for every person sort.
    pub fn age(&self) -> u32 {
        self.age
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.age)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Numbers,
    Strings,
    People,
}

impl ElementKind {
    pub const ALL: [ElementKind; 3] = [
        ElementKind::Numbers,
        ElementKind::Strings,
        ElementKind::People,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Numbers => "numbers",
            ElementKind::Strings => "strings",
            ElementKind::People => "people",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ElementKind::Numbers => "Shell Sort - Numbers",
            ElementKind::Strings => "Shell Sort - Strings",
            ElementKind::People => "Shell Sort - People (Person.age)",
        }
    }
}

/// Uniform random integers in `0..=len * 10`.
pub fn numbers<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u64> {
    let max = (len as u64).saturating_mul(10);
    (0..len).map(|_| rng.gen_range(0..=max)).collect()
}

/// Random strings of `str_len` uppercase ASCII letters.
pub fn strings<R: Rng + ?Sized>(rng: &mut R, len: usize, str_len: usize) -> Vec<String> {
    (0..len)
        .map(|_| {
            (0..str_len)
                .map(|_| char::from(rng.gen_range(b'A'..=b'Z')))
                .collect()
        })
        .collect()
}

/// People named after a base name plus a number in `1..=99`, aged `10..=80`.
pub fn people<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<Person> {
    (0..len)
        .map(|_| {
            let base = BASE_NAMES.choose(rng).copied().unwrap_or(BASE_NAMES[0]);
            let suffix: u32 = rng.gen_range(1..=99);

            Person {
                name: format!("{base}{suffix}"),
                age: rng.gen_range(10..=80),
            }
        })
        .collect()
}

/// A generated input of one element kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dataset {
    Numbers(Vec<u64>),
    Strings(Vec<String>),
    People(Vec<Person>),
}

impl Dataset {
    pub fn generate<R: Rng + ?Sized>(
        kind: ElementKind,
        rng: &mut R,
        len: usize,
        str_len: usize,
    ) -> Self {
        match kind {
            ElementKind::Numbers => Dataset::Numbers(numbers(rng, len)),
            ElementKind::Strings => Dataset::Strings(strings(rng, len, str_len)),
            ElementKind::People => Dataset::People(people(rng, len)),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Dataset::Numbers(_) => ElementKind::Numbers,
            Dataset::Strings(_) => ElementKind::Strings,
            Dataset::People(_) => ElementKind::People,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Dataset::Numbers(v) => v.len(),
            Dataset::Strings(v) => v.len(),
            Dataset::People(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorts in place. Numbers and strings are their own key, people are keyed by age.
    pub fn sort(&mut self, direction: Direction) {
        match self {
            Dataset::Numbers(v) => shellsort::sort_by_direction(v, direction),
            Dataset::Strings(v) => shellsort::sort_by_direction(v, direction),
            Dataset::People(v) => rust_shellsort::sort_by_key(v, Person::age, direction),
        }
    }

    pub fn is_sorted(&self, direction: Direction) -> bool {
        fn check<K: Ord>(keys: impl Iterator<Item = K>, direction: Direction) -> bool {
            let mut keys = keys.peekable();
            while let Some(a) = keys.next() {
                match keys.peek() {
                    Some(b) if direction.is_less(b, &a) => return false,
                    _ => {}
                }
            }
            true
        }

        match self {
            Dataset::Numbers(v) => check(v.iter(), direction),
            Dataset::Strings(v) => check(v.iter(), direction),
            Dataset::People(v) => check(v.iter().map(Person::age), direction),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i != 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{item}")?;
            }
            f.write_str("]")
        }

        match self {
            Dataset::Numbers(v) => list(f, v),
            Dataset::Strings(v) => list(f, v),
            Dataset::People(v) => list(f, v),
        }
    }
}
