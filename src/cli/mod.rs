//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{parse_date_arg, Cli, Commands};
pub use output::{format_check_report, format_item_list, format_tag_list};
