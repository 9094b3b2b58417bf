use std::fmt;
use std::fmt::Display;

/// A single reference base, 1-based as in pileup output.
#[derive(Debug, PartialEq, Eq, Clone, PartialOrd, Ord, Hash)]
pub struct BasePosition {
    pub chr: String,
    pub pos: u64,
}

impl Display for BasePosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.chr, self.pos)?;
        Ok(())
    }
}

impl BasePosition {
    pub fn new(chr: &str, pos: u64) -> Self {
        Self {
            chr: chr.to_string(),
            pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_as_chr_colon_pos() {
        assert_eq!(BasePosition::new("chr7", 55_242_465).to_string(), "chr7:55242465");
    }

    #[test]
    fn orders_by_chr_then_pos() {
        let mut v = vec![
            BasePosition::new("chr2", 5),
            BasePosition::new("chr1", 9),
            BasePosition::new("chr1", 3),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                BasePosition::new("chr1", 3),
                BasePosition::new("chr1", 9),
                BasePosition::new("chr2", 5),
            ]
        );
    }
}
