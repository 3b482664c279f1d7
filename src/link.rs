/// Single-link extraction from plain-text content fields
use crate::ast::LinkMatch;
use tracing::trace;

/// Finds the first `[label](url)` span in `input` and splits the line around it.
///
/// The label runs from the leftmost `[` to the nearest `](` that is followed by
/// a `)`; the url runs to that first `)`. Neither may cross a line break. Only
/// the first match is used, any later bracket/paren pairs stay in the text.
///
/// The markup is removed by literal first-occurrence replacement: `[label]`
/// becomes `label` and `(url)` is dropped. The result is then split at the
/// first occurrence of the label, so a label whose text also appears earlier
/// in the line splits at that earlier position. When the removals break up
/// the label text entirely, the before part is empty and the after part starts
/// one code unit short of the label's length into the line.
///
/// Returns `None` when the line carries no link.
pub fn extract_link(input: &str) -> Option<LinkMatch> {
    let (label, url) = find_link(input)?;
    trace!(label, url, "matched link");

    let output = input
        .replacen(&format!("[{}]", label), label, 1)
        .replacen(&format!("({})", url), "", 1);

    let (before_link, after_link) = match output.find(label) {
        Some(start) => (
            output[..start].to_string(),
            output[start + label.len()..].to_string(),
        ),
        None => {
            let skip = label.encode_utf16().count().saturating_sub(1);
            (String::new(), skip_utf16(&output, skip).to_string())
        }
    };

    Some(LinkMatch {
        before_link,
        label: label.to_string(),
        url: url.to_string(),
        after_link,
    })
}

/// Locates the label and url of the first link pattern.
fn find_link(input: &str) -> Option<(&str, &str)> {
    for (open, _) in input.match_indices('[') {
        let rest = &input[open + 1..];
        // Label can't cross a line break
        let line_end = rest.find(is_line_terminator).unwrap_or(rest.len());

        let Some(close) = rest[..line_end].find("](") else {
            continue;
        };
        let label = &rest[..close];
        let tail = &rest[close + 2..];

        // The nearest ')' ends the url; a later "](" on this line would see the
        // same line break, so a miss here means no match from this '['
        match tail.find(|c: char| c == ')' || is_line_terminator(c)) {
            Some(end) if tail[end..].starts_with(')') => return Some((label, &tail[..end])),
            _ => continue,
        }
    }
    None
}

/// Drops the first `units` UTF-16 code units, rounding up to a char boundary.
fn skip_utf16(text: &str, units: usize) -> &str {
    let mut seen = 0;
    for (offset, c) in text.char_indices() {
        if seen >= units {
            return &text[offset..];
        }
        seen += c.len_utf16();
    }
    ""
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
