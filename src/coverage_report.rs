use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{CoverageError, Result};
use crate::models::Region;

/// Outcome of a run: every evaluated amplicon plus the two tallies.
#[derive(Debug, Default, Clone)]
pub struct CoverageReport {
    /// Amplicons in region file order, each with `low_coverage` set.
    pub regions: Vec<Region>,

    /// Number of amplicons with at least one base missing or below the threshold
    pub low_coverage_count: usize,

    /// Number of amplicons covered at the threshold over their full length
    pub ok_coverage_count: usize,
}

impl CoverageReport {
    /// Count the flagged regions. Regions that were never evaluated count as low.
    pub fn from_regions(regions: Vec<Region>) -> Self {
        let low_coverage_count = regions
            .iter()
            .filter(|r| r.low_coverage != Some(false))
            .count();
        let ok_coverage_count = regions
            .iter()
            .filter(|r| r.low_coverage == Some(false))
            .count();
        debug_assert_eq!(
            low_coverage_count + ok_coverage_count,
            regions.len(),
            "every amplicon must be counted exactly once"
        );
        Self {
            regions,
            low_coverage_count,
            ok_coverage_count,
        }
    }

    pub fn low_coverage_regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(|r| r.low_coverage != Some(false))
    }

    /// Write the plain text report: a header with the threshold, one line per
    /// failing amplicon and a closing line with the number of passing ones.
    pub fn write_to<W: Write>(&self, out: &mut W, min_depth: u64) -> std::io::Result<()> {
        writeln!(
            out,
            "The listed amplicons were not completely covered at the required coverage ({min_depth}X)"
        )?;
        for region in self.low_coverage_regions() {
            writeln!(out, "{region}")?;
        }
        writeln!(
            out,
            "The remaining {} amplicons were covered above the required coverage ({min_depth}X)",
            self.ok_coverage_count
        )?;
        Ok(())
    }

    /// Write the report to `path`, replacing any existing file.
    pub fn write_file(&self, path: &Path, min_depth: u64) -> Result<()> {
        let file = File::create(path).map_err(|e| CoverageError::io(path, e))?;
        let mut out = BufWriter::new(file);
        self.write_to(&mut out, min_depth)
            .and_then(|_| out.flush())
            .map_err(|e| CoverageError::io(path, e))?;
        log::info!("report written to {}", path.display());
        Ok(())
    }
}
