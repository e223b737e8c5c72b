
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::data_types::ancestry_region::AncestryRegion;

/// This is a wrapper for writing merged ancestry regions out as BED lines
pub struct BedWriter {
    /// Handle on the writer
    csv_writer: csv::Writer<File>,
}

/// Contains all the data written to each BED line
#[derive(Serialize)]
struct BedRow<'a> {
    /// Name of the contig/chromosome
    chrom: &'a str,
    /// Start of the interval, 0-based inclusive
    start: u64,
    /// End of the interval, 0-based exclusive
    end: u64,
    /// The shared ancestry pair, formatted as `an1:an2`
    name: String,
}

impl BedWriter {
    /// Creates a new writer for merged regions
    /// # Arguments
    /// * `filename` - path to the BED file that will get created
    pub fn new(filename: &Path) -> csv::Result<Self> {
        // BED has no header line and is always tab-delimited
        let csv_writer: csv::Writer<File> = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_path(filename)?;
        Ok(Self {
            csv_writer
        })
    }

    /// Writes one region as a four-column BED line
    /// # Arguments
    /// * `region` - the finished region to write
    pub fn write_region(&mut self, region: &AncestryRegion) -> csv::Result<()> {
        let (start, end) = region.bed_interval();
        let row = BedRow {
            chrom: region.chrom(),
            start,
            end,
            name: region.name()
        };
        self.csv_writer.serialize(&row)
    }

    /// Flushes the output; write failures surface here instead of being lost on drop
    pub fn finish(mut self) -> std::io::Result<()> {
        self.csv_writer.flush()
    }
}
