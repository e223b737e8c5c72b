
use anyhow::{Context, anyhow};
use log::debug;
use noodles::vcf;
use noodles::vcf::variant::RecordBuf;
use noodles::vcf::variant::record_buf::samples::sample::Value;
use noodles_util::variant::io::Reader as VariantReader;
use noodles_util::variant::io::reader::Builder as VariantBuilder;
use std::path::Path;

use crate::data_types::ancestry_call::AncestryCall;

/// FORMAT key holding the ancestry label of the first haplotype
pub const ANCESTRY_KEY_1: &str = "AN1";
/// FORMAT key holding the ancestry label of the second haplotype
pub const ANCESTRY_KEY_2: &str = "AN2";

#[derive(thiserror::Error, Debug)]
pub enum AncestryCallError {
    #[error("record has no variant start position")]
    MissingPosition,
    #[error("sample index {index} does not exist in record")]
    MissingSample { index: usize },
    #[error("record has no {field} FORMAT field")]
    MissingAncestryField { field: &'static str },
    #[error("sample has no value for {field}")]
    MissingAncestryValue { field: &'static str },
    #[error("{field} has an unsupported type, expected integer or string")]
    UnsupportedAncestryType { field: &'static str },
}

/// This will open a VCF file and retrieve the name of the first sample,
/// which is the one consulted when no sample is specified on the CLI.
/// # Arguments
/// * `vcf_fn` - the VCF filename to open
pub fn get_vcf_sample_name(vcf_fn: &Path) -> anyhow::Result<String> {
    // Open the VCF file
    let mut vcf_reader = VariantBuilder::default()
        .build_from_path(vcf_fn)
        .with_context(|| format!("Error while opening {vcf_fn:?}:"))?;

    // get the header also
    let vcf_header = vcf_reader.read_header()
        .with_context(|| format!("Error while reading header of {vcf_fn:?}:"))?;

    let sample_name = vcf_header.sample_names().get_index(0)
        .ok_or(anyhow!("No samples found in {vcf_fn:?}"))?
        .clone();

    Ok(sample_name)
}

/// Forward-only reader producing one `AncestryCall` per variant record.
/// Handles plain VCF, bgzip compressed VCF, and BCF via the noodles format detection.
pub struct AncestryVcfReader {
    /// Reader for the VCF file
    vcf_reader: VariantReader<Box<dyn std::io::BufRead>>,
    /// Header for the VCF file
    vcf_header: vcf::Header,
    /// Index of the sample we pull ancestry labels from
    sample_index: usize,
}

impl AncestryVcfReader {
    /// Opens the input file and resolves the sample of interest.
    /// # Arguments
    /// * `vcf_fn` - filepath for the input VCF, multiple formats supported
    /// * `sample_name` - sample name to read from; the first sample when None
    /// # Errors
    /// * if the file or its header cannot be read
    /// * if the requested sample is not present, or the file has no samples at all
    pub fn new(vcf_fn: &Path, sample_name: Option<&str>) -> anyhow::Result<Self> {
        // Open the VCF file
        let mut vcf_reader = VariantBuilder::default()
            .build_from_path(vcf_fn)
            .with_context(|| format!("Error while opening {vcf_fn:?}:"))?;

        // get the header also
        let vcf_header = vcf_reader.read_header()
            .with_context(|| format!("Error while reading header of {vcf_fn:?}:"))?;

        // make sure the sample of interest is in the VCF file
        let sample_index = match sample_name {
            Some(s) => vcf_header.sample_names().get_index_of(s)
                .ok_or(anyhow!("Sample name {s:?} was not found in {vcf_fn:?}"))?,
            None => {
                if vcf_header.sample_names().is_empty() {
                    return Err(anyhow!("No samples found in {vcf_fn:?}"));
                }
                0
            }
        };
        debug!("Reading ancestry calls from sample column #{sample_index} of {vcf_fn:?}");

        Ok(Self {
            vcf_reader,
            vcf_header,
            sample_index
        })
    }

    /// Returns the lazy stream of decoded calls, in file order.
    /// This can only be consumed once; the underlying reader does not rewind.
    pub fn calls(&mut self) -> impl Iterator<Item = anyhow::Result<AncestryCall>> + '_ {
        let vcf_header = &self.vcf_header;
        let sample_index = self.sample_index;
        self.vcf_reader.records(vcf_header)
            .map(move |result| -> anyhow::Result<AncestryCall> {
                let record = result?;
                let record_buf = RecordBuf::try_from_variant_record(vcf_header, record.as_ref())?;
                let call = parse_ancestry_call(&record_buf, sample_index)
                    .with_context(|| format!("Error while parsing ancestry call in {record_buf:?}:"))?;
                Ok(call)
            })
    }
}

/// Given a pre-parsed variant record, this will pull out the per-site ancestry call for a sample.
/// # Arguments
/// * `record` - the record to parse
/// * `sample_index` - index of the sample to pull ancestry labels from
fn parse_ancestry_call(record: &RecordBuf, sample_index: usize) -> Result<AncestryCall, AncestryCallError> {
    let chrom = record.reference_sequence_name().to_string();
    let pos = record.variant_start()
        .ok_or(AncestryCallError::MissingPosition)?; // 1-based

    let all_samples = record.samples();
    let sample = all_samples.get_index(sample_index)
        .ok_or(AncestryCallError::MissingSample { index: sample_index })?;

    let an1 = ancestry_label(sample.get(ANCESTRY_KEY_1), ANCESTRY_KEY_1)?;
    let an2 = ancestry_label(sample.get(ANCESTRY_KEY_2), ANCESTRY_KEY_2)?;

    Ok(AncestryCall::new(chrom, pos.get() as u64, an1, an2))
}

/// Renders one ancestry label from a sample FORMAT value.
/// FLARE writes these as integers, but we keep them opaque and accept strings as well.
/// # Arguments
/// * `value` - the raw lookup result for the FORMAT key
/// * `field` - the FORMAT key that was read, AN1 or AN2
fn ancestry_label(
    value: Option<Option<&Value>>,
    field: &'static str
) -> Result<String, AncestryCallError> {
    let value = value
        .ok_or(AncestryCallError::MissingAncestryField { field })?
        .ok_or(AncestryCallError::MissingAncestryValue { field })?;

    match value {
        Value::Integer(i) => Ok(i.to_string()),
        Value::String(s) => Ok(s.clone()),
        _ => Err(AncestryCallError::UnsupportedAncestryType { field })
    }
}
