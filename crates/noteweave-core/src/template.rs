// split a raw document into YAML frontmatter and body

use crate::model::{Frontmatter, ParsedTemplate};

/// Parse a raw template document into frontmatter and body.
///
/// The frontmatter block is a first line of exactly `---`, zero or more
/// content lines, and a closing line of exactly `---`. Anything after the
/// closing delimiter is the body, trimmed. Documents without a block are
/// all body. Total function: malformed YAML inside a detected block is
/// caught and discarded, yielding an empty mapping rather than an error.
pub fn parse_template(raw: &str) -> ParsedTemplate {
    let Some((block, rest)) = split_frontmatter(raw) else {
        return ParsedTemplate {
            frontmatter: Frontmatter::new(),
            body: raw.trim().to_string(),
        };
    };

    // Degrade silently on decode failure. Non-mapping documents and
    // non-string keys fail the typed decode and land here too.
    let frontmatter: Frontmatter = serde_yaml::from_str(block).unwrap_or_default();

    ParsedTemplate {
        frontmatter,
        body: rest.trim().to_string(),
    }
}

/// Split off a leading frontmatter block, returning the inner block text
/// and the remainder after the closing delimiter. `None` when the document
/// does not start with a complete block.
fn split_frontmatter(raw: &str) -> Option<(&str, &str)> {
    let first_line_end = raw.find('\n')?;
    if !is_delimiter(&raw[..first_line_end]) {
        return None;
    }

    let block_start = first_line_end + 1;
    let mut pos = block_start;
    loop {
        let line_end = raw[pos..].find('\n').map(|i| pos + i);
        let line = match line_end {
            Some(end) => &raw[pos..end],
            None => &raw[pos..],
        };
        if is_delimiter(line) {
            let block = &raw[block_start..pos];
            let rest = match line_end {
                Some(end) => &raw[end + 1..],
                None => "",
            };
            return Some((block, rest));
        }
        pos = line_end? + 1;
    }
}

fn is_delimiter(line: &str) -> bool {
    line == "---" || line == "---\r"
}
