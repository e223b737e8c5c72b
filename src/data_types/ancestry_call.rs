
/// A single per-site ancestry assignment for one sample.
/// This is the fixed-shape value we decode each variant record into once,
/// so the merge loop never has to look fields up by name again.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AncestryCall {
    /// Name of the contig/chromosome the call is on
    pub chrom: String,
    /// The coordinate of the call on the contig, 1-based.
    /// Trusted to be non-decreasing within a chromosome; we do not verify it.
    pub pos: u64,
    /// Ancestry label assigned to the first haplotype (AN1)
    pub an1: String,
    /// Ancestry label assigned to the second haplotype (AN2)
    pub an2: String,
}

impl AncestryCall {
    /// Constructor
    /// # Arguments
    /// * `chrom` - the contig name
    /// * `pos` - 1-based position on the contig
    /// * `an1` - ancestry label for the first haplotype
    /// * `an2` - ancestry label for the second haplotype
    pub fn new(chrom: String, pos: u64, an1: String, an2: String) -> Self {
        Self {
            chrom, pos, an1, an2
        }
    }

    /// Returns the ancestry label pair as an ordered tuple.
    /// Order matters here, (A,B) is a different assignment than (B,A).
    pub fn label_pair(&self) -> (&str, &str) {
        (&self.an1, &self.an2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_pair_order() {
        let c1 = AncestryCall::new("chr1".to_string(), 100, "0".to_string(), "1".to_string());
        let c2 = AncestryCall::new("chr1".to_string(), 100, "1".to_string(), "0".to_string());
        assert_eq!(c1.label_pair(), ("0", "1"));
        assert_ne!(c1.label_pair(), c2.label_pair());
    }
}
