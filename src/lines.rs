/// Multi-line content to per-line descriptors
use crate::ast::{Color, Element, MarginLevel, Segment, TextLine, TextStyle, Variant};
use crate::link::extract_link;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

/// Content as it arrives from the CMS: one text field, or a list of lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Split on `\n` into lines
    Text(String),
    /// One element per line; non-string elements are skipped
    Lines(Vec<Value>),
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Vec<String>> for Content {
    fn from(lines: Vec<String>) -> Self {
        Content::Lines(lines.into_iter().map(Value::String).collect())
    }
}

impl From<Vec<&str>> for Content {
    fn from(lines: Vec<&str>) -> Self {
        Content::Lines(lines.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<Value>> for Content {
    fn from(lines: Vec<Value>) -> Self {
        Content::Lines(lines)
    }
}

impl Content {
    fn raw_lines(&self) -> Vec<Option<&str>> {
        match self {
            Content::Text(text) => text.split('\n').map(Some).collect(),
            Content::Lines(values) => values.iter().map(Value::as_str).collect(),
        }
    }
}

/// Options for one multi-line render call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub variant: Variant,
    pub center: bool,
    pub bold: bool,
    pub color: Color,
    pub element: Element,
    /// Margin below every line but the last
    pub min_margin: MarginLevel,
    /// Margin below the last line
    pub max_margin: MarginLevel,
    /// Extra class appended to each block
    pub class_name: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            variant: Variant::Body,
            center: false,
            bold: false,
            color: Color::Text,
            element: Element::Div,
            min_margin: MarginLevel::DEFAULT_MIN,
            max_margin: MarginLevel::DEFAULT_MAX,
            class_name: None,
        }
    }
}

impl RenderOptions {
    pub fn super_heading() -> Self {
        RenderOptions {
            variant: Variant::SuperHeading,
            element: Element::H1,
            ..Default::default()
        }
    }

    pub fn heading() -> Self {
        RenderOptions {
            variant: Variant::Heading,
            element: Element::H2,
            ..Default::default()
        }
    }

    pub fn subhead() -> Self {
        RenderOptions {
            variant: Variant::Subhead,
            element: Element::H3,
            ..Default::default()
        }
    }

    pub fn kicker() -> Self {
        RenderOptions {
            variant: Variant::Kicker,
            ..Default::default()
        }
    }

    fn style(&self, margin: MarginLevel) -> TextStyle {
        TextStyle {
            variant: self.variant,
            color: self.color,
            center: self.center,
            bold: self.bold,
            element: self.element,
            margin,
        }
    }
}

/// Keeps the non-blank lines of `content` and assigns their margins.
///
/// The last retained line gets `max_margin`, so trailing blank lines never
/// steal the larger spacing from the last visible block.
pub fn split_lines(content: &Content, options: &RenderOptions) -> Vec<TextLine> {
    let retained: Vec<&str> = content
        .raw_lines()
        .into_iter()
        .enumerate()
        .filter_map(|(index, line)| match line {
            Some(text) if !is_blank(text) => Some(text),
            Some(_) => {
                trace!(index, "skipping blank line");
                None
            }
            None => {
                debug!(index, "skipping non-string line");
                None
            }
        })
        .collect();

    let count = retained.len();
    retained
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let is_last = i + 1 == count;
            TextLine {
                content: text.to_string(),
                margin: if is_last {
                    options.max_margin
                } else {
                    options.min_margin
                },
                is_last,
            }
        })
        .collect()
}

/// True when the line holds nothing but whitespace or byte-order marks.
fn is_blank(text: &str) -> bool {
    text.chars()
        .all(|c| c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}'))
}

/// Turns content into one descriptor per non-blank line.
pub fn render_lines(content: &Content, options: &RenderOptions) -> Vec<Segment> {
    split_lines(content, options)
        .into_iter()
        .map(|line| {
            let style = options.style(line.margin);
            match extract_link(&line.content) {
                // Links with an empty label or url render as plain text
                Some(link) if !link.label.is_empty() && !link.url.is_empty() => {
                    Segment::Linked { link, style }
                }
                _ => Segment::Plain {
                    text: line.content,
                    style,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::LinkMatch;
    use serde_json::json;

    fn margins(segments: &[Segment]) -> Vec<u8> {
        segments.iter().map(|s| s.margin().get()).collect()
    }

    fn texts(segments: &[Segment]) -> Vec<String> {
        segments
            .iter()
            .map(|s| match s {
                Segment::Plain { text, .. } => text.clone(),
                Segment::Linked { link, .. } => link.plain_text(),
            })
            .collect()
    }

    #[test]
    fn test_margin_assignment() {
        let content = Content::from(vec!["First", "Second", "Third"]);
        let segments = render_lines(&content, &RenderOptions::default());
        assert_eq!(margins(&segments), vec![1, 1, 3]);
        assert_eq!(texts(&segments), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let segments = render_lines(&"Hello\n\nWorld".into(), &RenderOptions::default());
        assert_eq!(texts(&segments), vec!["Hello", "World"]);
        assert_eq!(margins(&segments), vec![1, 3]);
    }

    #[test]
    fn test_trailing_blank_lines_keep_last_margin() {
        let segments = render_lines(&"One\nTwo\n\n   \n".into(), &RenderOptions::default());
        assert_eq!(margins(&segments), vec![1, 3]);
    }

    #[test]
    fn test_empty_inputs() {
        let options = RenderOptions::default();
        assert!(render_lines(&"".into(), &options).is_empty());
        assert!(render_lines(&"\n \n\t".into(), &options).is_empty());
        assert!(render_lines(&Content::from(vec!["", "   "]), &options).is_empty());
        assert!(render_lines(&Content::Lines(Vec::new()), &options).is_empty());
    }

    #[test]
    fn test_byte_order_mark_line_is_blank() {
        let segments = render_lines(&"a\n\u{FEFF}".into(), &RenderOptions::default());
        assert_eq!(texts(&segments), vec!["a"]);
        assert_eq!(margins(&segments), vec![3]);
        assert!(is_blank(" \u{FEFF}\t\u{3000}"));
        // NEL is not trimmed away
        assert!(!is_blank("\u{85}"));
    }

    #[test]
    fn test_non_string_lines_are_skipped() {
        let content = Content::from(vec![json!("a"), json!(3), json!(null), json!("b")]);
        let segments = render_lines(&content, &RenderOptions::default());
        assert_eq!(texts(&segments), vec!["a", "b"]);
        assert_eq!(margins(&segments), vec![1, 3]);
    }

    #[test]
    fn test_sequence_elements_are_not_split() {
        let content = Content::from(vec!["a\nb"]);
        let lines = split_lines(&content, &RenderOptions::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].content, "a\nb");
        assert!(lines[0].is_last);
    }

    #[test]
    fn test_plain_text_is_not_trimmed() {
        let segments = render_lines(&"  indented  ".into(), &RenderOptions::default());
        assert_eq!(texts(&segments), vec!["  indented  "]);
    }

    #[test]
    fn test_linked_line() {
        let segments = render_lines(
            &"Click [here](https://example.com) now".into(),
            &RenderOptions::default(),
        );
        assert_eq!(segments.len(), 1);
        assert_eq!(
            segments[0].link(),
            Some(&LinkMatch {
                before_link: "Click ".to_string(),
                label: "here".to_string(),
                url: "https://example.com".to_string(),
                after_link: " now".to_string(),
            })
        );
        assert_eq!(segments[0].margin().get(), 3);
    }

    #[test]
    fn test_empty_label_or_url_renders_plain() {
        let segments = render_lines(&"a [](b)\nc [d]()".into(), &RenderOptions::default());
        assert!(segments.iter().all(|s| s.link().is_none()));
        assert_eq!(texts(&segments), vec!["a [](b)", "c [d]()"]);
    }

    #[test]
    fn test_style_is_shared() {
        let options = RenderOptions {
            center: true,
            bold: true,
            color: Color::Muted,
            min_margin: MarginLevel::new(2).unwrap(),
            max_margin: MarginLevel::new(4).unwrap(),
            ..RenderOptions::heading()
        };
        let segments = render_lines(&"x\n[y](/z)".into(), &options);
        for segment in &segments {
            let style = segment.style();
            assert_eq!(style.variant, Variant::Heading);
            assert_eq!(style.element, Element::H2);
            assert_eq!(style.color, Color::Muted);
            assert!(style.center && style.bold);
        }
        assert_eq!(margins(&segments), vec![2, 4]);
    }

    #[test]
    fn test_content_deserializes_untagged() {
        let text: Content = serde_json::from_str("\"a\\nb\"").unwrap();
        assert_eq!(text, Content::Text("a\nb".to_string()));
        let lines: Content = serde_json::from_str("[\"a\", 1]").unwrap();
        assert_eq!(lines, Content::Lines(vec![json!("a"), json!(1)]));
    }
}
