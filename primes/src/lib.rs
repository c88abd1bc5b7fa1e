// CLI glue shared by the binary and integration tests
pub mod cli;
pub mod commands;
pub mod output_format;
pub mod source;
pub mod report;
pub mod logging;
