use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode bytes with {encoding}: {message}")]
    DecodeFailure { encoding: String, message: String },
}

/// Decode raw file bytes into UTF-8 using: BOM -> strict UTF-8 -> chardetng fallback.
pub fn decode_text(bytes: &[u8]) -> Result<DecodedText, DecodeError> {
    // 1) BOM aware decode using encoding_rs helper
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    // 2) Plain UTF-8 (ASCII included) needs no guessing
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(DecodedText {
            text: text.to_owned(),
            encoding_label: UTF_8.name().to_string(),
        });
    }

    // 3) chardetng detection for legacy single-byte files
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> Result<DecodedText, DecodeError> {
    let (text, used, had_errors) = enc.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: used.name().to_string(),
            message: "decoding error".into(),
        });
    }
    Ok(DecodedText {
        text: text.into_owned(),
        encoding_label: used.name().to_string(),
    })
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

/// Decoded contents of one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    /// Name shown in the rendered title: the path as given.
    pub display_name: String,
    pub path: PathBuf,
    pub encoding_label: String,
    pub text: String,
}

impl SourceText {
    /// Lines without their `\n` / `\r\n` terminators.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }
}

/// Reads and decodes the file at `path`. The handle is closed before returning.
pub fn read_source(path: &Path) -> Result<SourceText, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = decode_text(&bytes).map_err(|source| SourceError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SourceText {
        display_name: path.display().to_string(),
        path: path.to_path_buf(),
        encoding_label: decoded.encoding_label,
        text: decoded.text,
    })
}
