//! A small, generic HTML pretty-printer.
//!
//! Block-level tags each go on their own line, indented two spaces per level
//! of nesting; inline tags stay in the flow of the text around them. Line
//! breaks inside text become spaces, so the rendered document reads the same.

const BLOCK_TAGS: &[&str] = &[
    "!doctype",
    "html",
    "head",
    "body",
    "meta",
    "title",
    "p",
    "ul",
    "ol",
    "li",
    "blockquote",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
];

const VOID_TAGS: &[&str] = &["!doctype", "meta", "br", "hr", "img", "link"];

const INDENT: &str = "  ";

/// Reformats `html` with one block-level tag per line.
///
/// ```rust
/// # use linemark::prettify;
/// assert_eq!(prettify("<ul>\n<li>one <b>two</b></li>\n</ul>\n"),
///            "<ul>\n  <li>\n    one <b>two</b>\n  </li>\n</ul>\n");
/// ```
pub fn prettify(html: &str) -> String {
    let mut out = String::with_capacity(html.len() * 2);
    let mut text = String::new();
    let mut depth = 0usize;
    let mut rest = html;

    while !rest.is_empty() {
        let tag_end = if starts_tag(rest) {
            rest.find('>')
        } else {
            None
        };

        let end = match tag_end {
            Some(end) => end,
            None => {
                let skip = rest.chars().next().map_or(0, char::len_utf8);
                let next = rest[skip..].find('<').map_or(rest.len(), |i| i + skip);
                text.extend(rest[..next].chars().map(|c| if c == '\n' { ' ' } else { c }));
                rest = &rest[next..];
                continue;
            }
        };

        let tag = &rest[..=end];
        rest = &rest[end + 1..];

        let (name, closing) = tag_name(tag);
        if !BLOCK_TAGS.contains(&name.as_str()) {
            text.push_str(tag);
            continue;
        }

        flush(&mut out, &mut text, depth);
        if closing {
            depth = depth.saturating_sub(1);
        }
        push_line(&mut out, tag, depth);
        if !closing && !VOID_TAGS.contains(&name.as_str()) && !tag.ends_with("/>") {
            depth += 1;
        }
    }

    flush(&mut out, &mut text, depth);
    out
}

/// Whether `s` opens a tag rather than a stray `<` in text.
fn starts_tag(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next() == Some('<')
        && matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '/' || c == '!')
}

/// The lowercased name of `tag`, and whether it is a closing tag.
fn tag_name(tag: &str) -> (String, bool) {
    let inner = &tag[1..];
    let (closing, inner) = match inner.strip_prefix('/') {
        Some(inner) => (true, inner),
        None => (false, inner),
    };
    let name = inner
        .chars()
        .take_while(|&c| c.is_ascii_alphanumeric() || c == '!')
        .collect::<String>()
        .to_ascii_lowercase();
    (name, closing)
}

fn flush(out: &mut String, text: &mut String, depth: usize) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        push_line(out, trimmed, depth);
    }
    text.clear();
}

fn push_line(out: &mut String, line: &str, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(line);
    out.push('\n');
}
