use crate::Pt;

/// Marker prefixed to each fragment of a word that had to be split across lines
pub const DEFAULT_CONTINUATION: &str = "-";

/// Marker appended to the last line when lines are cut off by `max_line_count`
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Settings for a wrap call
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WrapConfig {
    /// The widest a line may measure. Zero or negative widths are accepted and
    /// result in one character per line.
    pub max_width: Pt,
    /// Prefixed to every fragment after the first when a single word is wider than
    /// `max_width` and must be broken up
    pub long_word_continuation: String,
    /// Maximum number of lines to produce; `0` means unlimited
    pub max_line_count: usize,
    /// Appended to the last kept line when lines were dropped
    pub ellipsis: String,
}

impl Default for WrapConfig {
    fn default() -> Self {
        WrapConfig {
            max_width: Pt(0.0),
            long_word_continuation: DEFAULT_CONTINUATION.to_string(),
            max_line_count: 0,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

impl WrapConfig {
    /// Create a config for the given width with all other settings at their
    /// defaults: `-` continuation, unlimited lines, `...` ellipsis
    pub fn new<P: Into<Pt>>(max_width: P) -> WrapConfig {
        WrapConfig {
            max_width: max_width.into(),
            ..Default::default()
        }
    }

    /// Set the long word continuation marker, modifying `self`
    pub fn long_word_continuation<S: ToString>(&mut self, marker: S) -> &mut Self {
        self.long_word_continuation = marker.to_string();
        self
    }

    /// Set the maximum number of lines, modifying `self`
    pub fn max_line_count(&mut self, count: usize) -> &mut Self {
        self.max_line_count = count;
        self
    }

    /// Set the ellipsis, modifying `self`
    pub fn ellipsis<S: ToString>(&mut self, ellipsis: S) -> &mut Self {
        self.ellipsis = ellipsis.to_string();
        self
    }
}
