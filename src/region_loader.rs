// src/region_loader.rs
use std::collections::{HashMap, HashSet};
use std::io::BufRead;
use std::path::Path;

use crate::error::{CoverageError, Result};
use crate::models::{BasePosition, Region};
use crate::reader::{for_each_line, open_text, parse_u64, split_fields};

/// Number of columns in a sambamba style amplicon BED file:
/// chrom, start, stop, coordinate key, two unused columns, description, gene id.
pub const REGION_FIELDS: usize = 8;

/// All amplicons of a region file in file order, searchable by their
/// combined coordinate key.
#[derive(Debug, Default, Clone)]
pub struct RegionSet {
    regions: Vec<Region>,
    search: HashMap<String, usize>, // coordinate key -> index in regions
}

impl RegionSet {
    pub fn from_path(path: &Path) -> Result<Self> {
        let reader = open_text(path)?;
        Self::from_reader(reader, path)
    }

    pub fn from_reader<R: BufRead>(reader: R, path: &Path) -> Result<Self> {
        let source_name = path.display().to_string();
        let mut set = RegionSet::default();

        for_each_line(reader, path, |line_no, line| {
            // the description column only exists in the sambamba flavour
            let fields = split_fields(line, REGION_FIELDS, &source_name, line_no)?;
            let start = parse_u64(fields[1], "start", &source_name, line_no)?;
            let stop = parse_u64(fields[2], "stop", &source_name, line_no)?;
            let region = Region::new(fields[3], fields[0], start, stop, fields[6]);
            if region.is_empty() {
                return Err(CoverageError::format(
                    &source_name,
                    line_no,
                    format!("start {start} is not below stop {stop}"),
                ));
            }
            set.insert(region);
            Ok(())
        })?;

        if set.is_empty() {
            log::warn!("{source_name} does not contain any amplicons");
        }
        log::info!("read {} amplicons from {}", set.len(), source_name);
        Ok(set)
    }

    /// Add a region. A key that is already present keeps its position in
    /// the set but takes the new coordinates and description.
    pub fn insert(&mut self, region: Region) {
        match self.search.get(&region.key) {
            Some(&idx) => {
                log::warn!(
                    "amplicon key {} defined more than once - keeping the last definition",
                    region.key
                );
                self.regions[idx] = region;
            }
            None => {
                self.search.insert(region.key.clone(), self.regions.len());
                self.regions.push(region);
            }
        }
    }

    /// Every 1-based base any amplicon needs a depth value for.
    pub fn base_positions(&self) -> HashSet<BasePosition> {
        let mut bases = HashSet::with_capacity(
            self.regions.iter().map(|r| r.len() as usize).sum(),
        );
        for region in &self.regions {
            for pos in region.bases() {
                bases.insert(BasePosition::new(&region.chr, pos));
            }
        }
        bases
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn into_regions(self) -> Vec<Region> {
        self.regions
    }
}
