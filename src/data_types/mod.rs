
/// Contains the per-site ancestry call pulled out of each variant record
pub mod ancestry_call;
/// Contains the merged ancestry region accumulator and its BED conversion
pub mod ancestry_region;
