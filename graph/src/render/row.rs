use super::options::RenderOptions;
use super::text::TextLayout;
use crate::error::{GraphError, Result};

/// Gap between the rails and the commit ID
const ID_SEPARATOR: &str = "   ";

/// Renders the text of one commit row
#[derive(Debug, Clone)]
pub struct RowFormatter {
    marker: char,
    rail: char,
    layout: TextLayout,
}

impl RowFormatter {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            marker: options.marker,
            rail: options.rail,
            layout: TextLayout::new(options.max_width),
        }
    }

    /// One glyph per rail, then the commit ID and message.
    ///
    /// `commit` must sit on exactly one rail.
    pub fn format(&self, commit: &str, rails: &[String], message: Option<&str>) -> Result<String> {
        let markers = rails.iter().filter(|rail| *rail == commit).count();
        if markers != 1 {
            return Err(GraphError::LayoutInconsistency(format!(
                "commit {} occupies {} rails when its row is drawn",
                commit, markers
            )));
        }

        let glyphs: Vec<String> = rails
            .iter()
            .map(|rail| {
                if rail == commit {
                    self.marker.to_string()
                } else {
                    self.rail.to_string()
                }
            })
            .collect();

        let mut line = glyphs.join(" ");
        line.push_str(ID_SEPARATOR);
        line.push_str(commit);
        if let Some(message) = message.filter(|m| !m.is_empty()) {
            line.push(' ');
            line.push_str(message);
        }
        Ok(self.layout.clip(&line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rails(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_marker_and_rails() {
        let formatter = RowFormatter::new(&RenderOptions::default());
        let line = formatter
            .format("b", &rails(&["a", "b", "c"]), Some("fix parser"))
            .unwrap();
        assert_eq!(line, "| o |   b fix parser");
    }

    #[test]
    fn test_without_message() {
        let formatter = RowFormatter::new(&RenderOptions::default());
        assert_eq!(formatter.format("a", &rails(&["a"]), None).unwrap(), "o   a");
        assert_eq!(formatter.format("a", &rails(&["a"]), Some("")).unwrap(), "o   a");
    }

    #[test]
    fn test_custom_glyphs() {
        let options = RenderOptions {
            marker: '*',
            rail: ':',
            ..RenderOptions::default()
        };
        let formatter = RowFormatter::new(&options);
        assert_eq!(
            formatter.format("a", &rails(&["x", "a"]), None).unwrap(),
            ": *   a"
        );
    }

    #[test]
    fn test_truncated_to_width() {
        let formatter = RowFormatter::new(&RenderOptions::default());
        let message = "x".repeat(200);
        let line = formatter
            .format("abc1234", &rails(&["abc1234"]), Some(&message))
            .unwrap();
        assert_eq!(line.len(), 80);
        assert!(line.starts_with("o   abc1234 xxx"));
    }

    #[test]
    fn test_marker_must_be_unique() {
        let formatter = RowFormatter::new(&RenderOptions::default());
        let err = formatter.format("a", &rails(&["a", "a"]), None).unwrap_err();
        assert!(matches!(err, GraphError::LayoutInconsistency(_)));
        let err = formatter.format("a", &rails(&["b"]), None).unwrap_err();
        assert!(matches!(err, GraphError::LayoutInconsistency(_)));
    }
}
