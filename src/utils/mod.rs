// Shared helpers used by the CLI commands

pub mod filter;

pub use filter::{collect_source_files, is_go_source_file, DescribeOptions};
