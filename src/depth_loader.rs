// src/depth_loader.rs
use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::models::BasePosition;
use crate::reader::{for_each_line, open_text, parse_u64, split_fields};

/// samtools mpileup columns: chrom, pos, ref base, depth, read bases, base qualities.
pub const PILEUP_FIELDS: usize = 6;

const REPORT_EVERY: usize = 1_000_000;

/// Depth at one 1-based reference base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthRecord {
    pub chr: String,
    pub pos: u64,
    pub depth: u64,
}

/// Read the pileup file at `path` and keep only the bases listed in `wanted`.
pub fn load_depth_records(
    path: &Path,
    wanted: &HashSet<BasePosition>,
) -> Result<Vec<DepthRecord>> {
    let reader = open_text(path)?;
    read_depth_records(reader, path, wanted)
}

/// Every line is validated, also the ones that are dropped afterwards.
/// Records are returned in file order.
pub fn read_depth_records<R: BufRead>(
    reader: R,
    path: &Path,
    wanted: &HashSet<BasePosition>,
) -> Result<Vec<DepthRecord>> {
    let source_name = path.display().to_string();

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{prefix:.bold.dim} {spinner} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_prefix("depth");

    let mut records = Vec::new();
    let mut lines = 0_usize;
    // reused for the set lookup so we do not allocate a key per line
    let mut key = BasePosition::new("", 0);

    for_each_line(reader, path, |line_no, line| {
        let fields = split_fields(line, PILEUP_FIELDS, &source_name, line_no)?;
        let pos = parse_u64(fields[1], "position", &source_name, line_no)?;
        let depth = parse_u64(fields[3], "depth", &source_name, line_no)?;

        lines += 1;
        if lines % REPORT_EVERY == 0 {
            pb.set_message(format!(
                "{} million lines read, {} bases of interest kept",
                lines / REPORT_EVERY,
                records.len()
            ));
            pb.tick();
        }

        key.chr.clear();
        key.chr.push_str(fields[0]);
        key.pos = pos;
        if wanted.contains(&key) {
            records.push(DepthRecord {
                chr: fields[0].to_string(),
                pos,
                depth,
            });
        }
        Ok(())
    })?;

    pb.finish_and_clear();
    log::info!(
        "kept {} of {} pileup lines from {} ({} bases requested)",
        records.len(),
        lines,
        source_name,
        wanted.len()
    );
    Ok(records)
}
