/// Plain-text content fields with inline `[label](url)` links, split into
/// per-line descriptors and rendered to HTML
pub mod ast;
pub mod config;
pub mod error;
pub mod lines;
pub mod link;
pub mod renderer;

pub use ast::{Color, Element, LinkMatch, MarginLevel, Segment, TextLine, TextStyle, Variant};
pub use config::Config;
pub use error::{Error, Result};
pub use lines::{Content, RenderOptions, render_lines, split_lines};
pub use link::extract_link;

use renderer::HtmlRenderer;

/// Split content into lines and render them to HTML
pub fn text_to_html(content: impl Into<Content>, options: &RenderOptions) -> String {
    let segments = render_lines(&content.into(), options);
    let renderer = HtmlRenderer::new().with_class(options.class_name.clone());
    renderer.render(&segments)
}
