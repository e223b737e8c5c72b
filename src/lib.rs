
/// Command line interface functionality
pub mod cli;
/// Contains various shared data types
pub mod data_types;
/// Tooling for parsing input files into meaningful structs / data
pub mod parsing;
/// Contains the core logic for merging consecutive ancestry calls into regions
pub mod region_merger;
/// All output writers
pub mod writers;
