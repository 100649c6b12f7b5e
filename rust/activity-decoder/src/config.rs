//! Decoder configuration.

use serde::{Deserialize, Serialize};

/// Record count at which normalization moves onto the rayon pool.
pub const DEFAULT_PARALLEL_MIN_RECORDS: usize = 10_000;

/// Knobs for [`crate::assembler::assemble_file_data_with_config`].
///
/// Field-name priorities and unit thresholds are deliberately not
/// configurable: they are the compatibility contract for stored payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecoderConfig {
    /// Minimum number of raw records before parallel normalization kicks in.
    /// Only used with the `parallel` feature; smaller payloads stay sequential.
    pub parallel_min_records: usize,
    /// Drop laps that repeat an earlier lap's summary statistics
    pub deduplicate_laps: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            parallel_min_records: DEFAULT_PARALLEL_MIN_RECORDS,
            deduplicate_laps: true,
        }
    }
}

impl DecoderConfig {
    /// Config that always normalizes sequentially.
    pub fn sequential() -> Self {
        Self {
            parallel_min_records: usize::MAX,
            ..Self::default()
        }
    }

    /// Whether `record_count` records should be normalized in parallel.
    pub fn use_parallel(&self, record_count: usize) -> bool {
        cfg!(feature = "parallel") && record_count >= self.parallel_min_records
    }
}
