/// HTML renderer for text segments
use crate::ast::{Color, LinkMatch, Segment, TextStyle, Variant};

pub struct HtmlRenderer {
    class_name: Option<String>,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        HtmlRenderer { class_name: None }
    }

    /// Appends an extra class to every block.
    pub fn with_class(mut self, class_name: Option<String>) -> Self {
        self.class_name = class_name.filter(|name| !name.trim().is_empty());
        self
    }

    pub fn render(&self, segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|segment| self.render_segment(segment))
            .collect()
    }

    fn render_segment(&self, segment: &Segment) -> String {
        let style = segment.style();
        let tag = style.element.as_str();
        let content = match segment {
            Segment::Plain { text, .. } => escape_html(text),
            Segment::Linked { link, .. } => render_link(link),
        };
        format!(
            "<{} class=\"{}\">{}</{}>\n",
            tag,
            escape_html(&self.classes(style)),
            content,
            tag
        )
    }

    fn classes(&self, style: &TextStyle) -> String {
        let margin = (style.margin.get() > 0).then(|| format!("text-bottom-{}", style.margin));
        class_list(&[
            Some(variant_class(style.variant)),
            Some(color_class(style.color)),
            style.center.then_some("text-center"),
            style.bold.then_some("text-bold"),
            margin.as_deref(),
            self.class_name.as_deref(),
        ])
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_link(link: &LinkMatch) -> String {
    let mut out = String::new();
    if !link.before_link.is_empty() {
        out.push_str(&format!("<span>{}</span>", escape_html(&link.before_link)));
    }
    out.push_str(&format!(
        "<a href=\"{}\">{}</a>",
        escape_html(&link.url),
        escape_html(&link.label)
    ));
    if !link.after_link.is_empty() {
        out.push_str(&format!("<span>{}</span>", escape_html(&link.after_link)));
    }
    out
}

/// Joins the present class names with single spaces.
pub fn class_list(classes: &[Option<&str>]) -> String {
    classes
        .iter()
        .flatten()
        .filter(|name| !name.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn variant_class(variant: Variant) -> &'static str {
    match variant {
        Variant::Body => "text-body",
        Variant::Lead => "text-lead",
        Variant::SuperHeading => "text-super-heading",
        Variant::Heading => "text-heading",
        Variant::Subhead => "text-subhead",
        Variant::SubheadSmall => "text-subhead-small",
        Variant::Kicker => "text-kicker",
        Variant::Caps => "text-caps",
        Variant::Stat => "text-stat",
        Variant::StatLabel => "text-stat-label",
        Variant::Small => "text-small",
        Variant::Medium => "text-medium",
        Variant::Mega => "text-mega",
    }
}

fn color_class(color: Color) -> &'static str {
    match color {
        Color::Text => "color-text",
        Color::Primary => "color-primary",
        Color::Muted => "color-muted",
        Color::Background => "color-background",
        Color::Black => "color-black",
    }
}

fn escape_html(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '&' => "&amp;".to_string(),
            '"' => "&quot;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
