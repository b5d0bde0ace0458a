use crate::app::domain::settings::EditorSettings;

use super::metrics::PageMetrics;

/// Split `content` into page-sized chunks for the given settings.
///
/// Always returns at least one page; empty content yields a single empty page.
pub fn paginate(content: &str, settings: &EditorSettings) -> Vec<String> {
    paginate_with_metrics(content, PageMetrics::resolve(settings))
}

/// Greedily pack `content` into pages of `lines_per_page` rows, `chars_per_line` wide.
///
/// Explicit newlines are hard row breaks. A source line that starts inside a page
/// gets a `\n` in front of it; a line that starts a fresh page does not, so the
/// break at a page boundary is carried only by the page split itself.
/// Empty source lines take one row but add no text of their own.
pub fn paginate_with_metrics(content: &str, metrics: PageMetrics) -> Vec<String> {
    if content.is_empty() {
        return vec![String::new()];
    }

    let chars_per_line = metrics.chars_per_line.max(1);
    let lines_per_page = metrics.lines_per_page.max(1);

    let mut pages = Vec::new();
    let mut current = String::new();
    let mut rows = 0usize;

    for (index, line) in content.split('\n').enumerate() {
        let mut remaining = line;
        let mut first_chunk = true;

        while !remaining.is_empty() || line.is_empty() {
            let rows_available = lines_per_page.saturating_sub(rows);
            let chars_available = rows_available.saturating_mul(chars_per_line);

            if chars_available == 0 {
                flush_page(&mut pages, &mut current);
                rows = 0;
                continue;
            }

            let (chunk, rest) = split_at_char(remaining, chars_available);
            let chunk_rows = chunk.chars().count().max(1).div_ceil(chars_per_line);

            if first_chunk && index > 0 && !current.is_empty() && !current.ends_with('\n') {
                current.push('\n');
            }

            current.push_str(chunk);
            rows += chunk_rows;
            remaining = rest;
            first_chunk = false;

            if line.is_empty() {
                break;
            }

            if rows >= lines_per_page && !remaining.is_empty() {
                flush_page(&mut pages, &mut current);
                rows = 0;
            }
        }
    }

    if !current.is_empty() || pages.is_empty() {
        pages.push(current);
    }

    pages
}

/// Concatenate pages back into raw content, with no separator.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut content = String::new();
    for page in pages {
        content.push_str(page.as_ref());
    }
    content
}

/// Rebuild the content with page `index` replaced by `text`.
///
/// Returns `None` when `index` is out of range. Any newline the paginator put in
/// for display becomes part of the returned content.
pub fn replace_page<S: AsRef<str>>(pages: &[S], index: usize, text: &str) -> Option<String> {
    if index >= pages.len() {
        return None;
    }

    let mut content = String::new();
    for (i, page) in pages.iter().enumerate() {
        if i == index {
            content.push_str(text);
        } else {
            content.push_str(page.as_ref());
        }
    }
    Some(content)
}

fn flush_page(pages: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        pages.push(std::mem::take(current));
    }
}

/// Split after the first `n` chars, or return the whole string when it is shorter.
fn split_at_char(s: &str, n: usize) -> (&str, &str) {
    match s.char_indices().nth(n) {
        Some((byte, _)) => s.split_at(byte),
        None => (s, ""),
    }
}
