// src/cli.rs
use std::path::{Path, PathBuf};

use clap::Parser;
use directories::BaseDirs;

use crate::error::{CoverageError, Result};

/// Report amplicons that are not covered at the required read depth over
/// their full length.
#[derive(Parser, Debug, Clone)]
#[command(name = "amplicon-coverage", version)]
pub struct CoverageCli {
    /// Amplicon BED file with 8 columns (sambamba style, may be .gz)
    #[arg(short = 'b', long, alias = "bedfile")]
    pub regions: String,

    /// samtools mpileup output for the sample (may be .gz)
    #[arg(short = 'm', long, alias = "mpileup")]
    pub depth: String,

    /// Minimum read depth every base of an amplicon needs (inclusive)
    #[arg(short = 'c', long, alias = "coverage")]
    pub min_depth: u64,

    /// Report file (overwritten if it exists)
    #[arg(short = 'o', long, aliases = ["output_file", "output-file"])]
    pub output: String,
}

/// Resolved settings for one run. Built once from the command line and then
/// handed to every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub regions: PathBuf,
    pub depth: PathBuf,
    pub min_depth: u64,
    pub output: PathBuf,
}

impl RunConfig {
    pub fn from_cli(cli: &CoverageCli) -> Result<Self> {
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Ok(Self {
            regions: expand_home(&cli.regions, home.as_deref())?,
            depth: expand_home(&cli.depth, home.as_deref())?,
            min_depth: cli.min_depth,
            output: expand_home(&cli.output, home.as_deref())?,
        })
    }
}

/// Replace a leading `~` or `~/` with the home directory.
/// `~user` forms are left untouched.
pub fn expand_home(path: &str, home: Option<&Path>) -> Result<PathBuf> {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return Ok(PathBuf::from(path)),
    };
    let home = home.ok_or_else(|| {
        CoverageError::Config(format!("cannot expand {path}: no home directory found"))
    })?;
    match rest.trim_start_matches('/') {
        "" => Ok(home.to_path_buf()),
        rest => Ok(home.join(rest)),
    }
}
