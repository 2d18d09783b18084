use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "csvxl",
    version,
    about = "CSV to Excel Converter with Cleaning & Normalization"
)]
pub struct CliArgs {
    /// Path to input CSV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to output Excel file (.xlsx)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Column rename mapping: old1:new1,old2:new2
    #[arg(short, long)]
    pub rename: Option<String>,

    /// Keep all columns as text (skip date parsing)
    #[arg(long, default_value_t = false)]
    pub no_dates: bool,

    /// JSON file with conversion parameters; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a JSON conversion report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
