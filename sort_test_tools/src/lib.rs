//! Shared test tooling for sort implementations.
//!
//! An implementation is plugged in through the [`Sort`] trait and gets the full correctness suite
//! via [`instantiate_sort_tests!`].

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;

// Re-exported so the instantiation macro works in crates that don't depend on paste themselves.
#[doc(hidden)]
pub use paste;
