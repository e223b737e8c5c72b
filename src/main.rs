
use log::{LevelFilter, error, info};
use std::time::Instant;

use flarebed::cli::convert::{ConvertSettings, check_convert_settings};
use flarebed::cli::core::get_cli;
use flarebed::parsing::ancestry_vcf::AncestryVcfReader;
use flarebed::region_merger::RegionMerger;
use flarebed::writers::bed_writer::BedWriter;

fn run_convert(settings: ConvertSettings) {
    // start the timer
    let start_time = Instant::now();

    // set up logging before we check the other settings
    let filter_level: LevelFilter = match settings.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace
    };
    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(filter_level)
        .init();

    let settings = match check_convert_settings(settings) {
        Ok(s) => s,
        Err(e) => {
            error!("Error while verifying settings: {e:#}");
            std::process::exit(exitcode::CONFIG);
        }
    };

    // open the input stream
    info!("Opening input VCF file...");
    let mut vcf_reader = match AncestryVcfReader::new(&settings.input_vcf, settings.sample.as_deref()) {
        Ok(vr) => vr,
        Err(e) => {
            error!("Error while opening input VCF: {e:#}");
            std::process::exit(exitcode::IOERR);
        }
    };

    // open the output before we start scanning
    info!("Opening output BED file...");
    let mut bed_writer = match BedWriter::new(&settings.output_bed) {
        Ok(bw) => bw,
        Err(e) => {
            error!("Error while creating output BED: {e:#}");
            std::process::exit(exitcode::IOERR);
        }
    };

    // single forward pass: decode calls, merge runs, write each region as it closes
    info!("Merging ancestry calls into regions...");
    let mut num_calls: u64 = 0;
    let mut num_regions: u64 = 0;
    let calls = vcf_reader.calls()
        .inspect(|r| if r.is_ok() { num_calls += 1 });
    for result in RegionMerger::new(calls) {
        let region = match result {
            Ok(r) => r,
            Err(e) => {
                error!("Error while merging ancestry calls: {e:#}");
                std::process::exit(exitcode::IOERR);
            }
        };

        if let Err(e) = bed_writer.write_region(&region) {
            error!("Error while writing region to BED: {e:#}");
            std::process::exit(exitcode::IOERR);
        }
        num_regions += 1;
    }

    if let Err(e) = bed_writer.finish() {
        error!("Error while finalizing output BED: {e:#}");
        std::process::exit(exitcode::IOERR);
    }

    info!("Merged {num_calls} ancestry calls into {num_regions} regions.");
    info!("Conversion completed in {} seconds.", start_time.elapsed().as_secs_f64());
}

fn main() {
    let cli = get_cli();
    run_convert(cli.settings);

    info!("Process finished successfully.");
}
