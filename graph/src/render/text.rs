use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Fixed-width text clipping for graph output
#[derive(Debug, Clone, Copy)]
pub struct TextLayout {
    max_width: usize,
}

impl TextLayout {
    pub fn new(max_width: usize) -> Self {
        Self { max_width }
    }

    /// Calculate display width of a string
    pub fn display_width(text: &str) -> usize {
        UnicodeWidthStr::width(text)
    }

    /// Drop whatever does not fit, preserving grapheme boundaries.
    ///
    /// No ellipsis is added: graph lines are cut, not abbreviated.
    pub fn clip(&self, text: &str) -> String {
        if Self::display_width(text) <= self.max_width {
            return text.to_string();
        }

        let mut result = String::new();
        let mut current_width = 0;
        for grapheme in text.graphemes(true) {
            let grapheme_width = UnicodeWidthStr::width(grapheme);
            if current_width + grapheme_width > self.max_width {
                break;
            }
            result.push_str(grapheme);
            current_width += grapheme_width;
        }
        result
    }
}
