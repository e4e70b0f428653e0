// ABOUTME: Line-based pre-filter that trims a full page to the lines holding item containers.
// ABOUTME: Keeps the span from the first to the last line mentioning the container tag.

use tracing::debug;

/// Returns the slice of `raw` running from the first line that contains `tag`
/// through the last such line, inclusive. Lines outside that span are dropped.
///
/// This is a substring count, not a parse: a line mentioning `tag` inside an
/// attribute or text counts the same as a real tag, and nesting is never
/// checked. Unbalanced markup gives a best-effort span. When `tag` never
/// occurs the result is empty, which callers treat as "no items".
pub fn isolate_fragment<'a>(raw: &'a str, tag: &str) -> &'a str {
    let total = raw
        .split_inclusive('\n')
        .filter(|line| line.contains(tag))
        .count();
    if total == 0 {
        debug!(tag, "container tag not found; fragment is empty");
        return "";
    }

    let mut remaining = total;
    let mut start: Option<usize> = None;
    let mut offset = 0;

    for line in raw.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        if !line.contains(tag) {
            continue;
        }

        let first = *start.get_or_insert(line_start);
        remaining -= 1;
        if remaining == 0 {
            let end = line_start + line.trim_end_matches(['\n', '\r']).len();
            let fragment = &raw[first..end];
            debug!(
                tag,
                markers = total,
                bytes = fragment.len(),
                dropped = raw.len() - fragment.len(),
                "isolated fragment"
            );
            return fragment;
        }
    }

    ""
}
