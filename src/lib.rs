//! Benchmark harness around the `shellsort` crate.
//!
//! The sort itself lives in its own crate and knows nothing about random data, timing or files.
//! This crate supplies those collaborators: data generators, a timer, an SVG chart renderer, the
//! batch experiment runner and the interactive menu.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod chart;
pub mod config;
pub mod data;
pub mod demo;
pub mod error;
pub mod experiment;
pub mod menu;
pub mod rust_shellsort;
pub mod timing;

pub use error::{Error, Result};
pub use shellsort::Direction;
