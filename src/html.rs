//! Minimal, tolerant HTML table extraction.
//!
//! The market page carries exactly one data table; this module scans for it
//! with case-insensitive tag detection, strips markup from cell contents, and
//! normalizes entities and whitespace. Scanning stays local to known blocks
//! (`<table>…</table>`, `<tr>…</tr>`) rather than pattern-matching the whole
//! document, so attribute noise, missing close tags, and `<thead>`/`<tbody>`
//! wrappers are all tolerated.

/// Inner markup of the first `<table>` element, or `None` if the page has no
/// table at all. An unclosed table runs to the end of the document.
pub(crate) fn first_table(html: &str) -> Option<&str> {
    let lower = html.to_ascii_lowercase();
    let open = find_tag(&lower, "table", 0)?;
    let gt = lower[open..].find('>')?;
    let start = open + gt + 1;
    let end = find_ci(&lower, "</table", start).unwrap_or(html.len());
    Some(&html[start..end])
}

/// Inner markup of each `<tr>` within a table block, in document order.
/// A row missing its `</tr>` ends at the next `<tr>` or at end of input.
pub(crate) fn table_rows(table: &str) -> Vec<&str> {
    let lower = table.to_ascii_lowercase();
    let mut rows = Vec::new();
    let mut pos = 0;

    while let Some(open) = find_tag(&lower, "tr", pos) {
        let Some(gt) = lower[open..].find('>') else {
            break;
        };
        let start = open + gt + 1;
        let close = find_ci(&lower, "</tr", start);
        let next = find_tag(&lower, "tr", start);
        let (end, resume) = match (close, next) {
            (Some(c), Some(n)) if n < c => (n, n),
            (Some(c), _) => (c, c + "</tr".len()),
            (None, Some(n)) => (n, n),
            (None, None) => (table.len(), table.len()),
        };
        rows.push(&table[start..end]);
        if resume >= table.len() {
            break;
        }
        pos = resume;
    }

    rows
}

/// Text content of each `<td>`/`<th>` cell in a row, tags stripped, entities
/// decoded, whitespace collapsed.
pub(crate) fn row_cells(row: &str) -> Vec<String> {
    let lower = row.to_ascii_lowercase();
    let mut cells = Vec::new();
    let mut pos = 0;

    loop {
        let open = match (find_tag(&lower, "td", pos), find_tag(&lower, "th", pos)) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => break,
        };
        let Some(gt) = lower[open..].find('>') else {
            break;
        };
        let start = open + gt + 1;
        // A cell ends at its close tag, or at the next cell when unclosed.
        let end = [
            find_ci(&lower, "</td", start),
            find_ci(&lower, "</th", start),
            find_tag(&lower, "td", start),
            find_tag(&lower, "th", start),
        ]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(row.len());

        cells.push(text(&row[start..end]));
        if end >= row.len() {
            break;
        }
        pos = end;
    }

    cells
}

/// Find `<tag` at a real element boundary (next byte is `>`, `/`, or
/// whitespace), skipping lookalikes such as `<th` inside `<thead`.
/// `lower` must already be ASCII-lowercased; the returned index is valid for
/// the original string as well.
fn find_tag(lower: &str, tag: &str, mut from: usize) -> Option<usize> {
    let pat = format!("<{}", tag);
    while let Some(i) = find_ci(lower, &pat, from) {
        match lower.as_bytes().get(i + pat.len()) {
            None => return None,
            Some(b'>') | Some(b'/') | Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') => {
                return Some(i)
            }
            _ => from = i + 1,
        }
    }
    None
}

fn find_ci(lower: &str, needle: &str, from: usize) -> Option<usize> {
    lower.get(from..).and_then(|s| s.find(needle)).map(|i| i + from)
}

/// Strip tags, decode entities, collapse whitespace.
fn text(fragment: &str) -> String {
    let mut flat = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                flat.push(' ');
            }
            c if !in_tag => flat.push(c),
            _ => {}
        }
    }
    let decoded = decode_entities(&flat);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode the handful of entities the market page actually uses, plus
/// numeric references (the rupee sign appears as `&#8377;` in some renders).
fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let semi = tail
            .char_indices()
            .skip(1)
            .take(9)
            .find(|&(_, c)| c == ';')
            .map(|(i, _)| i);
        let decoded = semi.and_then(|i| decode_entity(&tail[1..i]).map(|c| (c, i)));
        match decoded {
            Some((c, i)) => {
                out.push(c);
                rest = &tail[i + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let digits = entity.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}
