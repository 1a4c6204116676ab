//! The HTML document shell around converted Markdown.

use std::fmt::{self, Write};

use crate::character_set::character_set;
use crate::parser::{Options, Parser};

/// Converts `md` and writes the HTML document to `output`.
///
/// Unless [`Render::fragment`](crate::Render::fragment) is set, the body is
/// wrapped in `<!DOCTYPE html>`, `<html>`, a `<head>` carrying the charset
/// and any configured title and author, and `<body>`.
pub fn format_document(md: &str, options: &Options, output: &mut dyn Write) -> fmt::Result {
    let mut parser = Parser::new(options);
    parser.feed(md);
    let body = parser.finish();

    if options.render.fragment {
        return output.write_str(&body);
    }

    write_head(options, output)?;
    output.write_str(&body)?;
    output.write_str("</body>\n</html>\n")
}

fn write_head(options: &Options, output: &mut dyn Write) -> fmt::Result {
    output.write_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n")?;
    if let Some(author) = &options.render.author {
        output.write_str("<meta name=\"author\" content=\"")?;
        escape(author, output)?;
        output.write_str("\">\n")?;
    }
    if let Some(title) = &options.render.title {
        output.write_str("<title>")?;
        escape(title, output)?;
        output.write_str("</title>\n")?;
    }
    output.write_str("</head>\n<body>\n")
}

/// Escapes text for the document head. Converted Markdown content is never
/// escaped; only the configured metadata goes through here.
pub fn escape(buffer: &str, output: &mut dyn Write) -> fmt::Result {
    const HTML_UNSAFE: [bool; 256] = character_set!(b"&<>\"");

    let bytes = buffer.as_bytes();
    let mut offset = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if HTML_UNSAFE[byte as usize] {
            let esc: &str = match byte {
                b'"' => "&quot;",
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                _ => unreachable!(),
            };
            output.write_str(&buffer[offset..i])?;
            output.write_str(esc)?;
            offset = i + 1;
        }
    }
    output.write_str(&buffer[offset..])
}
