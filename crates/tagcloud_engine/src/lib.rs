//! Tag cloud engine: file input, HTML output and the pipeline joining them.
mod persist;
mod pipeline;
mod render;
mod source;

pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use pipeline::{
    analyze, analyze_text, build_cloud, generate, Analysis, CloudOptions, CloudSummary,
    PipelineError,
};
pub use render::{escape_html, HtmlRenderer, Renderer, DEFAULT_STYLESHEET_HREF};
pub use source::{decode_text, read_source, DecodeError, DecodedText, SourceError, SourceText};
