//! Check that every amplicon of a panel is covered at a minimum read depth,
//! using the per-base depth column of a samtools mpileup file.
//!
//! The run is a straight pipeline:
//! regions -> depth records -> evaluation -> report.

pub mod cli;
pub mod coverage;
pub mod coverage_report;
pub mod depth_loader;
pub mod error;
pub mod models;
pub mod reader;
pub mod region_loader;

use crate::cli::RunConfig;
use crate::coverage_report::CoverageReport;
use crate::error::Result;
use crate::region_loader::RegionSet;

/// Run all stages for `config` and write the report.
/// Nothing is written when any input fails to load.
pub fn run(config: &RunConfig) -> Result<CoverageReport> {
    let regions = RegionSet::from_path(&config.regions)?;
    let wanted = regions.base_positions();

    let records = depth_loader::load_depth_records(&config.depth, &wanted)?;
    drop(wanted);

    let report = coverage::evaluate(regions, &records, config.min_depth);
    report.write_file(&config.output, config.min_depth)?;
    Ok(report)
}
