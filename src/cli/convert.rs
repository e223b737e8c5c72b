
use clap::Args;
use log::info;
use std::path::PathBuf;

use crate::cli::core::{check_required_filename, FULL_VERSION};
use crate::parsing::ancestry_vcf::get_vcf_sample_name;

#[derive(Args, Clone, Default)]
pub struct ConvertSettings {
    /// Input local-ancestry annotated variant file (VCF), e.g. FLARE output
    #[clap(required = true)]
    #[clap(value_name = "VCF")]
    #[clap(help_heading = Some("Input/Output"))]
    pub input_vcf: PathBuf,

    /// Output interval file (BED) with merged ancestry regions
    #[clap(required = true)]
    #[clap(value_name = "BED")]
    #[clap(help_heading = Some("Input/Output"))]
    pub output_bed: PathBuf,

    /// The sample name to read ancestry calls from [default: first sample]
    #[clap(short = 's')]
    #[clap(long = "sample")]
    #[clap(value_name = "SAMPLE")]
    #[clap(help_heading = Some("Input/Output"))]
    pub sample: Option<String>,

    /// Enable verbose output.
    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

pub fn check_convert_settings(mut settings: ConvertSettings) -> anyhow::Result<ConvertSettings> {
    info!("Flarebed version: {:?}", &**FULL_VERSION);
    info!("Inputs:");

    // check for the input file before we try to pull a sample name out of it
    check_required_filename(&settings.input_vcf, "Input VCF")?;
    info!("\tInput VCF: {:?}", &settings.input_vcf);

    if settings.sample.is_none() {
        settings.sample = Some(get_vcf_sample_name(&settings.input_vcf)?);
    }
    info!("\tSample name: {:?}", settings.sample.as_deref().unwrap());

    info!("Outputs:");
    info!("\tOutput BED: {:?}", &settings.output_bed);

    Ok(settings)
}
