use std::path::{Path, PathBuf};

use tagcloud_core::{select_top, FontRange, SelectError, SeparatorSet, TagCloud, WordCounts};
use tagcloud_logging::{cloud_debug, cloud_info};

use crate::persist::{AtomicFileWriter, PersistError};
use crate::render::Renderer;
use crate::source::{read_source, SourceError};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("invalid word count: {0}")]
    Select(#[from] SelectError),
    #[error("cannot write tag cloud: {0}")]
    Persist(#[from] PersistError),
}

/// Word counts of one document, ready for any number of cloud renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub source_name: String,
    pub encoding_label: String,
    pub counts: WordCounts,
}

impl Analysis {
    /// Upper bound for the number of words a cloud can show.
    pub fn distinct_words(&self) -> usize {
        self.counts.distinct_words()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudOptions {
    pub top_n: usize,
    pub fonts: FontRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudSummary {
    pub output_path: PathBuf,
    pub word_count: usize,
    pub count_min: u32,
    pub count_max: u32,
    pub bytes_written: u64,
}

/// Reads `path` and counts its words.
pub fn analyze(path: &Path) -> Result<Analysis, PipelineError> {
    let source = read_source(path)?;
    cloud_debug!(
        "Read {:?} ({} bytes, {})",
        source.path,
        source.text.len(),
        source.encoding_label
    );
    let analysis = Analysis {
        counts: WordCounts::from_lines(source.lines(), &SeparatorSet::default()),
        source_name: source.display_name,
        encoding_label: source.encoding_label,
    };
    cloud_info!(
        "Counted {} words ({} distinct) in {}",
        analysis.counts.total_words(),
        analysis.distinct_words(),
        analysis.source_name
    );
    Ok(analysis)
}

/// Counts words of text already in memory.
pub fn analyze_text(source_name: &str, text: &str) -> Analysis {
    Analysis {
        source_name: source_name.to_owned(),
        encoding_label: "UTF-8".to_owned(),
        counts: WordCounts::from_lines(text.lines(), &SeparatorSet::default()),
    }
}

/// Selects, scales and orders the top `top_n` words.
pub fn build_cloud(
    analysis: &Analysis,
    top_n: usize,
    fonts: FontRange,
) -> Result<TagCloud, PipelineError> {
    let selection = select_top(&analysis.counts, top_n)?;
    cloud_debug!(
        "Selected {} words, counts {}..={}",
        selection.len(),
        selection.count_min(),
        selection.count_max()
    );
    Ok(TagCloud::build(selection, fonts))
}

/// Builds the cloud, renders it and writes it atomically to `output`.
pub fn generate(
    analysis: &Analysis,
    options: CloudOptions,
    renderer: &dyn Renderer,
    output: &Path,
) -> Result<CloudSummary, PipelineError> {
    let cloud = build_cloud(analysis, options.top_n, options.fonts)?;
    let document = renderer.render(&cloud, &analysis.source_name);

    let writer = AtomicFileWriter::new(output);
    let bytes_written = writer.write(&document)?;
    cloud_info!(
        "Wrote top {} words of {} to {:?}",
        cloud.len(),
        analysis.source_name,
        output
    );

    Ok(CloudSummary {
        output_path: writer.target().to_path_buf(),
        word_count: cloud.len(),
        count_min: cloud.count_min(),
        count_max: cloud.count_max(),
        bytes_written,
    })
}
