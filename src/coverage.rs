// src/coverage.rs
use std::collections::HashMap;

use crate::coverage_report::CoverageReport;
use crate::depth_loader::DepthRecord;
use crate::models::Region;
use crate::region_loader::RegionSet;

/// Depth lookup by chromosome and 1-based position, built once per run.
#[derive(Debug, Default, Clone)]
pub struct DepthIndex {
    by_chr: HashMap<String, HashMap<u64, u64>>,
}

impl DepthIndex {
    /// A position listed more than once keeps its lowest depth, so a single
    /// low entry is enough to fail the base.
    pub fn from_records(records: &[DepthRecord]) -> Self {
        let mut by_chr: HashMap<String, HashMap<u64, u64>> = HashMap::new();
        for rec in records {
            let positions = by_chr.entry(rec.chr.clone()).or_default();
            positions
                .entry(rec.pos)
                .and_modify(|d| *d = (*d).min(rec.depth))
                .or_insert(rec.depth);
        }
        Self { by_chr }
    }

    pub fn depth(&self, chr: &str, pos: u64) -> Option<u64> {
        self.by_chr.get(chr)?.get(&pos).copied()
    }

    /// number of distinct bases with a depth value
    pub fn len(&self) -> usize {
        self.by_chr.values().map(|p| p.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_chr.values().all(|p| p.is_empty())
    }
}

/// True if every base in [start+1, stop] has a depth record and none of them
/// is below `min_depth`. Stops at the first failing base.
pub fn region_is_covered(region: &Region, index: &DepthIndex, min_depth: u64) -> bool {
    region.bases().all(|pos| match index.depth(&region.chr, pos) {
        Some(depth) => depth >= min_depth,
        None => {
            log::debug!("{}:{} has no depth record ({})", region.chr, pos, region.description);
            false
        }
    })
}

/// Flag every region as low or ok coverage and count both outcomes.
pub fn evaluate(regions: RegionSet, records: &[DepthRecord], min_depth: u64) -> CoverageReport {
    let index = DepthIndex::from_records(records);
    if index.is_empty() {
        log::warn!("no depth values for any amplicon base - every amplicon will be reported");
    } else {
        log::debug!("depth index holds {} distinct bases", index.len());
    }
    let mut regions = regions.into_regions();

    for region in regions.iter_mut() {
        let covered = region_is_covered(region, &index, min_depth);
        region.low_coverage = Some(!covered);
    }

    let report = CoverageReport::from_regions(regions);
    log::info!(
        "{} amplicons below {}X, {} fully covered",
        report.low_coverage_count,
        min_depth,
        report.ok_coverage_count
    );
    report
}
