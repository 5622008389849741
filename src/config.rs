use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use crate::data::DEFAULT_STRING_LEN;

pub const DEFAULT_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

/// Number of elements sorted by the demonstration.
pub const DEMO_LEN: usize = 10;

pub const RESULTS_FILE_NAME: &str = "results.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Input sizes, in the order they are run and charted.
    pub sizes: Vec<usize>,
    /// Directory receiving the charts and `results.json`.
    pub out_dir: PathBuf,
    pub seed: u64,
    pub string_len: usize,
}

impl ExperimentConfig {
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if let Some(seed) = seed {
            self.seed = seed;
        }
        self
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            out_dir: PathBuf::from("."),
            seed: thread_rng().gen(),
            string_len: DEFAULT_STRING_LEN,
        }
    }
}
