use std::io::Write;

use log::debug;
use rand::Rng;
use shellsort::Direction;

use crate::data::{Dataset, ElementKind};
use crate::error::Result;

/// Sorts one small generated dataset and prints it before and after.
///
/// Returns the sorted dataset.
pub fn run<R, W>(
    kind: ElementKind,
    direction: Direction,
    len: usize,
    string_len: usize,
    rng: &mut R,
    out: &mut W,
) -> Result<Dataset>
where
    R: Rng + ?Sized,
    W: Write,
{
    debug!("demo: {len} {} {direction:?}", kind.name());

    let mut data = Dataset::generate(kind, rng, len, string_len);
    writeln!(out, "\nOriginal: {data}")?;

    data.sort(direction);
    writeln!(out, "Sorted:   {data}")?;

    Ok(data)
}
