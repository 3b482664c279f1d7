/// Descriptor types produced from plain-text content fields
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single `[label](url)` link pulled out of a line, with the markup removed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkMatch {
    pub before_link: String,
    pub label: String,
    pub url: String,
    pub after_link: String,
}

impl LinkMatch {
    /// The line as it reads once the link markup is gone.
    pub fn plain_text(&self) -> String {
        format!("{}{}{}", self.before_link, self.label, self.after_link)
    }
}

/// One retained (non-blank) line with its computed spacing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub content: String,
    pub margin: MarginLevel,
    pub is_last: bool,
}

/// Style shared by every block of one render call, plus the per-line margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub variant: Variant,
    pub color: Color,
    pub center: bool,
    pub bold: bool,
    pub element: Element,
    pub margin: MarginLevel,
}

/// Render-agnostic description of one line of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Segment {
    Plain { text: String, style: TextStyle },
    Linked { link: LinkMatch, style: TextStyle },
}

impl Segment {
    pub fn style(&self) -> &TextStyle {
        match self {
            Segment::Plain { style, .. } | Segment::Linked { style, .. } => style,
        }
    }

    pub fn margin(&self) -> MarginLevel {
        self.style().margin
    }

    pub fn link(&self) -> Option<&LinkMatch> {
        match self {
            Segment::Linked { link, .. } => Some(link),
            Segment::Plain { .. } => None,
        }
    }
}

/// Typography variants understood by the text primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Variant {
    #[default]
    Body,
    Lead,
    SuperHeading,
    Heading,
    Subhead,
    SubheadSmall,
    Kicker,
    Caps,
    Stat,
    StatLabel,
    Small,
    Medium,
    Mega,
}

impl Variant {
    pub const ALL: [Variant; 13] = [
        Variant::Body,
        Variant::Lead,
        Variant::SuperHeading,
        Variant::Heading,
        Variant::Subhead,
        Variant::SubheadSmall,
        Variant::Kicker,
        Variant::Caps,
        Variant::Stat,
        Variant::StatLabel,
        Variant::Small,
        Variant::Medium,
        Variant::Mega,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Body => "body",
            Variant::Lead => "lead",
            Variant::SuperHeading => "superHeading",
            Variant::Heading => "heading",
            Variant::Subhead => "subhead",
            Variant::SubheadSmall => "subheadSmall",
            Variant::Kicker => "kicker",
            Variant::Caps => "caps",
            Variant::Stat => "stat",
            Variant::StatLabel => "statLabel",
            Variant::Small => "small",
            Variant::Medium => "medium",
            Variant::Mega => "mega",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Color {
    #[default]
    Text,
    Primary,
    Muted,
    Background,
    Black,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Text,
        Color::Primary,
        Color::Muted,
        Color::Background,
        Color::Black,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Text => "text",
            Color::Primary => "primary",
            Color::Muted => "muted",
            Color::Background => "background",
            Color::Black => "black",
        }
    }
}

/// HTML element a text block is emitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    #[default]
    Div,
    P,
    H1,
    H2,
    H3,
    Span,
}

impl Element {
    pub const ALL: [Element; 6] = [
        Element::Div,
        Element::P,
        Element::H1,
        Element::H2,
        Element::H3,
        Element::Span,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Element::Div => "div",
            Element::P => "p",
            Element::H1 => "h1",
            Element::H2 => "h2",
            Element::H3 => "h3",
            Element::Span => "span",
        }
    }
}

macro_rules! impl_tag_from_str {
    ($ty:ident, $kind:literal) => {
        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .into_iter()
                    .find(|tag| tag.as_str() == s)
                    .ok_or_else(|| Error::UnknownTag {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_tag_from_str!(Variant, "variant");
impl_tag_from_str!(Color, "color");
impl_tag_from_str!(Element, "element");

/// Spacing tier applied below a text block (0 through 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MarginLevel(u8);

impl MarginLevel {
    pub const MAX: u8 = 6;
    pub const NONE: MarginLevel = MarginLevel(0);
    pub const DEFAULT_MIN: MarginLevel = MarginLevel(1);
    pub const DEFAULT_MAX: MarginLevel = MarginLevel(3);

    pub fn new(tier: u8) -> Result<Self, Error> {
        if tier <= Self::MAX {
            Ok(MarginLevel(tier))
        } else {
            Err(Error::InvalidMargin(tier.to_string()))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MarginLevel {
    type Error = Error;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        MarginLevel::new(tier)
    }
}

impl From<MarginLevel> for u8 {
    fn from(margin: MarginLevel) -> u8 {
        margin.0
    }
}

impl FromStr for MarginLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tier: u8 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidMargin(s.to_string()))?;
        MarginLevel::new(tier)
    }
}

impl fmt::Display for MarginLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
