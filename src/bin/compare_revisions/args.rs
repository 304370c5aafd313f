use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};

use crate::output_format::OutputFormat;

/// Compare two revisions of a record field by field
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// YAML manifest listing the sections and questions to compare
    #[arg(index = 1)]
    pub schema_path: PathBuf,

    /// JSON snapshot of the earlier revision
    #[arg(index = 2)]
    pub before_path: PathBuf,

    /// JSON snapshot of the later revision
    #[arg(index = 3)]
    pub after_path: PathBuf,

    /// Also show lines which are the same in both revisions
    #[arg(long)]
    pub include_unchanged_lines: bool,

    #[arg(
        long,
        value_name = "FORMAT",
        default_value_t = OutputFormat::Json,
        value_enum
    )]
    pub format: OutputFormat,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}
