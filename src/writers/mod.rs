/*!
# Writers module
Contains the logic for writing the output files for the convert command.
*/
/// Generates the merged ancestry region BED file
pub mod bed_writer;
