use std::path::PathBuf;

use clap::Parser;

/// Command line arguments. Anything omitted is asked for on the console.
#[derive(Parser, Debug, Default)]
#[command(
    name = "tagcloud",
    author,
    version,
    about = "Render the most frequent words of a text file as an HTML tag cloud",
    long_about = None
)]
pub(crate) struct Args {
    /// Input text file
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output HTML file
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Number of words to include in the tag cloud
    #[arg(short = 'n', long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// RON configuration file (defaults to ./tagcloud.ron when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Font size class of the least frequent word
    #[arg(long, value_name = "SIZE")]
    pub font_min: Option<u32>,

    /// Font size class of the most frequent word
    #[arg(long, value_name = "SIZE")]
    pub font_max: Option<u32>,
}
