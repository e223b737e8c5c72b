/*!
# CLI module
Command line interface functionality that is specific to Flarebed.
*/

/// The main CLI module that contains the top-level CLI parser and help text
pub mod core;
/// The convert settings and their verification
pub mod convert;
