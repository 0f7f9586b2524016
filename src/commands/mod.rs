//! Command implementations
//!
//! Each module corresponds to a subcommand in the CLI and to one of the
//! standalone binaries.

pub mod architect;
pub mod ask;
pub mod convert_pdf;
pub mod search;
