//! `tagcloud` command: gather the inputs, then run the engine pipeline.
mod args;
mod config;
mod prompt;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tagcloud_core::FontRange;
use tagcloud_engine::{analyze, generate, CloudOptions, CloudSummary, HtmlRenderer};
use tagcloud_logging::{cloud_debug, cloud_info};

use args::Args;
use config::AppConfig;
use prompt::{prompt_path, prompt_top_n};

pub(crate) fn run() -> Result<()> {
    let args = Args::parse();
    let config = config::load(args.config.as_deref())?;
    tagcloud_logging::initialize(&config.log_destination(), config.log_level.into());
    cloud_debug!("Configuration: {config:?}");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    let summary = run_with(args, &config, &mut input, &mut output)?;
    writeln!(
        output,
        "Wrote top {} words to {}",
        summary.word_count,
        summary.output_path.display()
    )?;
    Ok(())
}

/// Fills in missing arguments from the console and generates the cloud.
fn run_with<R: BufRead, W: Write>(
    args: Args,
    config: &AppConfig,
    input: &mut R,
    output: &mut W,
) -> Result<CloudSummary> {
    let fonts = FontRange::new(
        args.font_min.unwrap_or(config.font_min),
        args.font_max.unwrap_or(config.font_max),
    )
    .context("invalid font range")?;

    let input_path = match args.input {
        Some(path) => path,
        None => PathBuf::from(prompt_path(
            input,
            output,
            "Enter the name of file location: ",
        )?),
    };
    let output_path = match args.output {
        Some(path) => path,
        None => PathBuf::from(prompt_path(
            input,
            output,
            "Enter the name of the output html file location: ",
        )?),
    };

    let analysis = analyze(&input_path)
        .with_context(|| format!("cannot analyze {}", input_path.display()))?;
    let available = analysis.distinct_words();
    if available == 0 {
        bail!("no words found in {}", input_path.display());
    }

    let top_n = match args.top {
        Some(n) => n,
        None => prompt_top_n(input, output, available)?,
    };
    cloud_info!("Building tag cloud of {top_n} out of {available} words");

    let renderer = HtmlRenderer::new(config.stylesheet_href.clone());
    let summary = generate(&analysis, CloudOptions { top_n, fonts }, &renderer, &output_path)
        .with_context(|| format!("cannot generate {}", output_path.display()))?;
    Ok(summary)
}
