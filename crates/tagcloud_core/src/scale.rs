/// Font size for the most frequent selected word.
pub const DEFAULT_FONT_MAX: u32 = 48;
/// Font size for the least frequent selected word.
pub const DEFAULT_FONT_MIN: u32 = 11;

/// Linear interpolation of `count` from `[count_min, count_max]` onto
/// `[font_min, font_max]`, truncating.
///
/// When every selected word shares one count (`count_min == count_max`)
/// there is no range to interpolate over and every word gets `font_min`.
/// Counts outside the selection range are clamped into it.
///
/// Requires `font_min <= font_max`; [`FontRange`] guarantees it.
pub fn scale_size(font_max: u32, font_min: u32, count: u32, count_min: u32, count_max: u32) -> u32 {
    debug_assert!(
        font_min <= font_max,
        "font_min {font_min} exceeds font_max {font_max}"
    );
    if count_min >= count_max {
        return font_min;
    }
    let count = count.clamp(count_min, count_max);
    let font_span = u64::from(font_max.saturating_sub(font_min));
    let offset = u64::from(count - count_min);
    let count_span = u64::from(count_max - count_min);
    // offset <= count_span, so the quotient fits back into font_span.
    let scaled = font_span * offset / count_span;
    font_min + scaled as u32
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FontRangeError {
    #[error("font minimum {min} is larger than font maximum {max}")]
    Inverted { min: u32, max: u32 },
}

/// Inclusive range of font size classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontRange {
    min: u32,
    max: u32,
}

impl FontRange {
    pub fn new(min: u32, max: u32) -> Result<Self, FontRangeError> {
        if min > max {
            return Err(FontRangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn scale(&self, count: u32, count_min: u32, count_max: u32) -> u32 {
        scale_size(self.max, self.min, count, count_min, count_max)
    }
}

impl Default for FontRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_FONT_MIN,
            max: DEFAULT_FONT_MAX,
        }
    }
}
