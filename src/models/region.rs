//region.rs

use std::fmt;
use std::fmt::Display;
use std::ops::RangeInclusive;

/// One amplicon from the region file.
/// Coordinates are 0-based, half-open: [start, stop).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    /// the combined coordinate column, unique per amplicon
    pub key: String,
    pub chr: String,
    pub start: u64,
    pub stop: u64,
    pub description: String,
    /// `None` until the region has been evaluated
    pub low_coverage: Option<bool>,
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{}", self.chr, self.start, self.stop, self.description)
    }
}

impl Region {
    /// Create a new region, assuming start < stop.
    pub fn new(key: &str, chr: &str, start: u64, stop: u64, description: &str) -> Self {
        Self {
            key: key.to_string(),
            chr: chr.to_string(),
            start,
            stop,
            description: description.to_string(),
            low_coverage: None,
        }
    }

    /// The bases of this region in pileup coordinates: 1-based, closed.
    /// [start, stop) 0-based is exactly [start+1, stop] 1-based.
    pub fn bases(&self) -> RangeInclusive<u64> {
        (self.start + 1)..=self.stop
    }

    pub fn len(&self) -> u64 {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.stop <= self.start
    }
}
