
use anyhow::ensure;

use crate::data_types::ancestry_call::AncestryCall;

/// A run of consecutive calls sharing the same ancestry label pair.
/// Exactly one of these is "open" (still extending) at any point during a scan;
/// everything emitted earlier is immutable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AncestryRegion {
    /// Name of the contig/chromosome, copied from the first call of the run
    chrom: String,
    /// 1-based position of the first call in the run
    start: u64,
    /// 1-based position of the last call in the run
    end: u64,
    /// Shared ancestry label for the first haplotype
    an1: String,
    /// Shared ancestry label for the second haplotype
    an2: String,
}

impl AncestryRegion {
    /// General constructor with checks, mostly useful for tests.
    /// Regions built during a scan come from `From<AncestryCall>` + `extend_to` instead.
    /// # Arguments
    /// * `chrom` - the contig name
    /// * `start` - 1-based position of the first call in the run
    /// * `end` - 1-based position of the last call in the run
    /// * `an1` - shared ancestry label for the first haplotype
    /// * `an2` - shared ancestry label for the second haplotype
    /// # Errors
    /// * if `start` is not a valid 1-based coordinate
    /// * if `start > end`
    pub fn new(chrom: String, start: u64, end: u64, an1: String, an2: String) -> anyhow::Result<Self> {
        ensure!(start >= 1, "start must be a 1-based coordinate");
        ensure!(start <= end, "start must be <= end");

        Ok(Self {
            chrom, start, end, an1, an2
        })
    }

    /// Returns true if the call belongs to this run.
    /// A chromosome change always forces a new region, even when the label pair matches.
    pub fn matches(&self, call: &AncestryCall) -> bool {
        self.chrom == call.chrom && self.an1 == call.an1 && self.an2 == call.an2
    }

    /// Advances the end of the run to the given 1-based position.
    pub fn extend_to(&mut self, pos: u64) {
        self.end = pos;
    }

    /// Converts to the half-open, 0-based interval used by the BED output.
    pub fn bed_interval(&self) -> (u64, u64) {
        (self.start - 1, self.end)
    }

    /// The BED name column for this region, formatted as `an1:an2`.
    pub fn name(&self) -> String {
        format!("{}:{}", self.an1, self.an2)
    }

    // various getters
    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }
}

impl From<AncestryCall> for AncestryRegion {
    /// Seeds a new single-position run from a call.
    fn from(call: AncestryCall) -> Self {
        Self {
            chrom: call.chrom,
            start: call.pos,
            end: call.pos,
            an1: call.an1,
            an2: call.an2
        }
    }
}
