//! Front matter handling.
//!
//! A document may open with a block delimited by `---` lines. It carries
//! metadata for the sync layer and never reaches the converter.

const FENCE: &str = "---";

/// Splits a leading `---` delimited block off `markdown`.
///
/// Returns the block's body (without fences) and the remaining markdown.
/// An opening fence with no closing fence is not front matter, and the
/// input comes back untouched.
pub fn split_front_matter(markdown: &str) -> (Option<&str>, &str) {
    let mut lines = markdown.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return (None, markdown);
    };
    if !is_fence(first) {
        return (None, markdown);
    }

    let body_start = first.len();
    let mut offset = body_start;
    for line in lines {
        if is_fence(line) {
            let body = &markdown[body_start..offset];
            let rest = &markdown[offset + line.len()..];
            return (Some(body), rest);
        }
        offset += line.len();
    }
    (None, markdown)
}

/// Returns `markdown` with any leading front matter block removed.
pub fn strip_front_matter(markdown: &str) -> &str {
    split_front_matter(markdown).1
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == FENCE
}
