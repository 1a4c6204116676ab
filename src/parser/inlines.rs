//! Inline markup within a single line: emphasis, underline, links and
//! images.
//!
//! Nested content (emphasis inside emphasis, markup inside link text) is
//! walked with an explicit frame stack rather than recursion.

use std::ops::Range;

use smallvec::SmallVec;
use tracing::trace;

use crate::scanner::{MarkerSpan, Spans};

const EMPHASIS_TAGS: [(&str, &str); 3] = [
    ("<i>", "</i>"),
    ("<b>", "</b>"),
    ("<b><i>", "</i></b>"),
];

const UNDERLINE_OPEN: &str = "<span style=\"text-decoration: underline;\">";

/// A resolved piece of inline markup. All offsets are into the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// `*`, `**` or `***` around `content`.
    Emphasis {
        level: usize,
        content: Range<usize>,
        resume: usize,
    },
    /// `_` around `content`.
    Underline { content: Range<usize>, resume: usize },
    /// `![alt](url)`.
    Image {
        alt: Range<usize>,
        url: Range<usize>,
        resume: usize,
    },
    /// `[text](url)`.
    Link {
        text: Range<usize>,
        url: Range<usize>,
        resume: usize,
    },
}

impl Inline {
    /// Where scanning continues once this markup is written.
    fn resume(&self) -> usize {
        match *self {
            Inline::Emphasis { resume, .. }
            | Inline::Underline { resume, .. }
            | Inline::Image { resume, .. }
            | Inline::Link { resume, .. } => resume,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    pos: usize,
    end: usize,
    close: &'static str,
}

pub struct Subject<'s, 'l> {
    spans: &'s Spans<'l>,
    line: &'l str,
    // Sorted offsets of every `]`, `)` and whitespace byte in the line.
    close_brackets: Vec<usize>,
    close_parens: Vec<usize>,
    whitespace: Vec<usize>,
}

impl<'s, 'l> Subject<'s, 'l> {
    pub fn new(spans: &'s Spans<'l>) -> Self {
        let line = spans.line();
        Subject {
            spans,
            line,
            close_brackets: offsets(line, |b| b == b']'),
            close_parens: offsets(line, |b| b == b')'),
            whitespace: offsets(line, |b| b.is_ascii_whitespace()),
        }
    }

    /// Tries to read inline markup opened by `span`, looking no further
    /// than `to`.
    pub fn resolve(&self, span: MarkerSpan, to: usize) -> Option<Inline> {
        let bytes = self.line.as_bytes();

        match span.leading(self.line) {
            b'*' => {
                let level = span.leading_run(self.line);
                if level > EMPHASIS_TAGS.len() {
                    return None;
                }
                let open_end = span.start + level;
                let close = self.spans.find_run(b'*', level, open_end, to)?;
                Some(Inline::Emphasis {
                    level,
                    content: open_end..close,
                    resume: close + level,
                })
            }
            b'_' => {
                if span.leading_run(self.line) != 1 {
                    return None;
                }
                let close = self.spans.find_run(b'_', 1, span.start + 1, to)?;
                Some(Inline::Underline {
                    content: span.start + 1..close,
                    resume: close + 1,
                })
            }
            b'!' if bytes.get(span.start + 1) == Some(&b'[') => {
                let (alt, url) = self.bracketed(span.start + 1, to)?;
                Some(Inline::Image {
                    resume: url.end + 1,
                    alt,
                    url,
                })
            }
            b'[' => {
                let (text, url) = self.bracketed(span.start, to)?;
                Some(Inline::Link {
                    resume: url.end + 1,
                    text,
                    url,
                })
            }
            _ => None,
        }
    }

    /// Matches `[text](url)` with the `[` at `open`, ending before `to`.
    /// The URL must be non-empty and free of whitespace.
    fn bracketed(&self, open: usize, to: usize) -> Option<(Range<usize>, Range<usize>)> {
        let bytes = self.line.as_bytes();
        if open >= to || bytes.get(open) != Some(&b'[') {
            return None;
        }

        let text_end = first_within(&self.close_brackets, open + 1, to)?;
        let url_start = text_end + 2;
        if url_start > to || bytes[text_end + 1] != b'(' {
            return None;
        }

        let url_end = first_within(&self.close_parens, url_start, to)?;
        if url_end == url_start || first_within(&self.whitespace, url_start, url_end).is_some() {
            return None;
        }

        Some((open + 1..text_end, url_start..url_end))
    }

    /// Writes `[from, to)` of the line as HTML. Markers that don't resolve,
    /// or that would nest deeper than `max_depth`, are written as text.
    pub fn render(&self, from: usize, to: usize, max_depth: usize, output: &mut String) {
        let mut frames: SmallVec<[Frame; 8]> = SmallVec::new();
        frames.push(Frame {
            pos: from,
            end: to,
            close: "",
        });

        while let Some(&Frame { pos, end, close }) = frames.last() {
            let top = frames.len() - 1;

            let span = match self.spans.next_in(pos, end) {
                Some(span) => span,
                None => {
                    output.push_str(&self.line[pos..end]);
                    output.push_str(close);
                    frames.pop();
                    continue;
                }
            };

            output.push_str(&self.line[pos..span.start]);

            let inline = if frames.len() > max_depth {
                None
            } else {
                self.resolve(span, end)
            };
            let inline = match inline {
                Some(inline) => inline,
                None => {
                    let marker = &self.line[span.start..span.start + span.leading_run(self.line)];
                    trace!(marker, "unresolved marker kept as text");
                    output.push_str(marker);
                    frames[top].pos = span.start + marker.len();
                    continue;
                }
            };

            frames[top].pos = inline.resume();
            match inline {
                Inline::Emphasis { level, content, .. } => {
                    let (open, close) = EMPHASIS_TAGS[level - 1];
                    output.push_str(open);
                    frames.push(Frame {
                        pos: content.start,
                        end: content.end,
                        close,
                    });
                }
                Inline::Underline { content, .. } => {
                    output.push_str(UNDERLINE_OPEN);
                    frames.push(Frame {
                        pos: content.start,
                        end: content.end,
                        close: "</span>",
                    });
                }
                Inline::Image { alt, url, .. } => {
                    output.push_str("<img src=\"");
                    output.push_str(&self.line[url]);
                    output.push_str("\" alt=\"");
                    output.push_str(&self.line[alt]);
                    output.push_str("\"/>");
                }
                Inline::Link { text, url, .. } => {
                    output.push_str("<a href=\"");
                    output.push_str(&self.line[url]);
                    output.push_str("\">");
                    frames.push(Frame {
                        pos: text.start,
                        end: text.end,
                        close: "</a>",
                    });
                }
            }
        }
    }
}

fn offsets(line: &str, pred: impl Fn(u8) -> bool) -> Vec<usize> {
    line.bytes()
        .enumerate()
        .filter(|&(_, b)| pred(b))
        .map(|(i, _)| i)
        .collect()
}

/// The first of the sorted `offsets` inside `[from, to)`.
fn first_within(offsets: &[usize], from: usize, to: usize) -> Option<usize> {
    let ix = offsets.partition_point(|&o| o < from);
    offsets.get(ix).copied().filter(|&o| o < to)
}
