/*!
# Parsing module
Contains the logic for parsing input files into meaningful structs / data.
*/
/// Handles decoding local-ancestry VCF records into per-site ancestry calls
pub mod ancestry_vcf;
