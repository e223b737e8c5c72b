
use crate::data_types::ancestry_call::AncestryCall;
use crate::data_types::ancestry_region::AncestryRegion;

/// Iterator adapter that collapses a stream of per-site ancestry calls into maximal regions.
/// Calls are consumed in stream order exactly once; at most one region is held open at a time,
/// so this runs in O(1) auxiliary memory regardless of input size.
/// The input is forward-only: positions are trusted to be non-decreasing within a chromosome.
pub struct RegionMerger<I> {
    /// Upstream decoded calls
    calls: I,
    /// The run currently being extended, if any
    open_region: Option<AncestryRegion>,
}

impl<I> RegionMerger<I> {
    /// Creates a new merger over a stream of decoded calls.
    /// # Arguments
    /// * `calls` - the upstream call producer, typically `AncestryVcfReader::calls()`
    pub fn new(calls: I) -> Self {
        Self {
            calls,
            open_region: None,
        }
    }
}

impl<I: Iterator<Item = anyhow::Result<AncestryCall>>> Iterator for RegionMerger<I> {
    type Item = anyhow::Result<AncestryRegion>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.calls.next() {
                Some(Ok(call)) => {
                    match self.open_region.as_mut() {
                        Some(open) if open.matches(&call) => {
                            // same chromosome and label pair, the run keeps going
                            open.extend_to(call.pos);
                        },
                        _ => {
                            // either the first call overall or a boundary; seed a new run
                            // and emit whatever was open before it
                            let finished = self.open_region.replace(AncestryRegion::from(call));
                            if let Some(region) = finished {
                                return Some(Ok(region));
                            }
                        }
                    }
                },
                Some(Err(e)) => {
                    // a decode failure aborts the pass; the open run is never emitted
                    self.open_region = None;
                    return Some(Err(e));
                },
                None => {
                    // final flush; the last run would otherwise be lost
                    return self.open_region.take().map(Ok);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn call(chrom: &str, pos: u64, an1: &str, an2: &str) -> AncestryCall {
        AncestryCall::new(chrom.to_string(), pos, an1.to_string(), an2.to_string())
    }

    fn merge(calls: Vec<AncestryCall>) -> Vec<AncestryRegion> {
        RegionMerger::new(calls.into_iter().map(Ok))
            .collect::<anyhow::Result<Vec<_>>>()
            .unwrap()
    }

    fn region(chrom: &str, start: u64, end: u64, an1: &str, an2: &str) -> AncestryRegion {
        AncestryRegion::new(chrom.to_string(), start, end, an1.to_string(), an2.to_string()).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let regions = merge(vec![]);
        assert!(regions.is_empty());
    }

    #[test]
    fn test_single_run() {
        // N consecutive positions with one shared label pair collapse to one region
        let n = 10;
        let calls: Vec<_> = (1..=n).map(|pos| call("chr1", pos, "2", "2")).collect();
        let regions = merge(calls);
        assert_eq!(regions, vec![region("chr1", 1, n, "2", "2")]);
        assert_eq!(regions[0].bed_interval(), (0, n));
    }

    #[test]
    fn test_alternating_labels() {
        // adjacency drives merging, so the outer calls must not merge across the middle one
        let calls = vec![
            call("chr1", 1, "0", "0"),
            call("chr1", 2, "1", "1"),
            call("chr1", 3, "0", "0"),
        ];
        let regions = merge(calls);
        assert_eq!(regions, vec![
            region("chr1", 1, 1, "0", "0"),
            region("chr1", 2, 2, "1", "1"),
            region("chr1", 3, 3, "0", "0"),
        ]);
    }

    #[test]
    fn test_label_order_breaks_run() {
        let calls = vec![
            call("chr1", 1, "0", "1"),
            call("chr1", 2, "1", "0"),
        ];
        let regions = merge(calls);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].name(), "0:1");
        assert_eq!(regions[1].name(), "1:0");
    }

    #[test]
    fn test_final_flush() {
        // the trailing run only exists at end-of-input and must still come out
        let calls = vec![
            call("chr1", 1, "0", "0"),
            call("chr1", 2, "1", "1"),
            call("chr1", 3, "1", "1"),
        ];
        let regions = merge(calls);
        assert_eq!(regions.last(), Some(&region("chr1", 2, 3, "1", "1")));
    }

    #[test]
    fn test_chromosome_boundary() {
        // identical labels and positions across a chromosome change must not join
        let calls = vec![
            call("chr1", 5, "1", "1"),
            call("chr2", 5, "1", "1"),
        ];
        let regions = merge(calls);
        assert_eq!(regions, vec![
            region("chr1", 5, 5, "1", "1"),
            region("chr2", 5, 5, "1", "1"),
        ]);
    }

    #[test]
    fn test_partition_and_maximality() {
        let calls = vec![
            call("chr1", 1, "0", "0"),
            call("chr1", 2, "0", "0"),
            call("chr1", 5, "0", "1"),
            call("chr1", 6, "0", "1"),
            call("chr1", 9, "0", "0"),
            call("chr2", 1, "0", "0"),
            call("chr2", 2, "2", "2"),
        ];
        let regions = merge(calls.clone());

        // partition: walking the regions in order re-visits every input position exactly once
        let mut covered = vec![];
        for r in regions.iter() {
            for c in calls.iter() {
                if c.chrom == r.chrom() && c.pos >= r.start() && c.pos <= r.end() {
                    covered.push(c.clone());
                }
            }
        }
        assert_eq!(covered, calls);

        // maximality: no two consecutive regions could have merged
        for pair in regions.windows(2) {
            let mergeable = pair[0].chrom() == pair[1].chrom() && pair[0].name() == pair[1].name();
            assert!(!mergeable, "adjacent regions {pair:?} should have merged");
        }
    }

    #[test]
    fn test_error_aborts_pass() {
        // an upstream decode failure surfaces as-is and drops the open run
        let calls: Vec<anyhow::Result<AncestryCall>> = vec![
            Ok(call("chr1", 1, "0", "0")),
            Err(anyhow!("bad record")),
        ];
        let mut merger = RegionMerger::new(calls.into_iter());
        assert!(merger.next().unwrap().is_err());
        assert!(merger.next().is_none());
    }
}
