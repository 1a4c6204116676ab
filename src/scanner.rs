//! Splits a line into literal text and marker spans.
//!
//! A marker span is a maximal run of bytes that are not plain text. Every
//! non-ASCII byte counts as text, so span boundaries always fall on `char`
//! boundaries.

use crate::character_set::character_set;
use crate::strings;

/// Bytes that are plain text: ASCII letters and digits, space, both quote
/// marks, the punctuation that shows up in prose and URLs, and all of
/// non-ASCII.
const LITERAL: [bool; 256] = character_set!(
    b'a'..=b'z',
    b'A'..=b'Z',
    b'0'..=b'9',
    b" '\"",
    b".,:;/?=&%@~",
    0x80..=0xff,
);

/// Whether `b` is plain text rather than a potential marker.
#[inline]
pub fn is_literal(b: u8) -> bool {
    LITERAL[b as usize]
}

/// A half-open byte range `[start, end)` of marker characters within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSpan {
    /// Offset of the first marker byte.
    pub start: usize,
    /// Offset one past the last marker byte.
    pub end: usize,
}

impl MarkerSpan {
    /// The marker text this span covers in `line`.
    pub fn literal<'l>(&self, line: &'l str) -> &'l str {
        &line[self.start..self.end]
    }

    /// The byte this span begins with.
    pub fn leading(&self, line: &str) -> u8 {
        line.as_bytes()[self.start]
    }

    /// Length of the run of the leading byte at the start of the span.
    pub fn leading_run(&self, line: &str) -> usize {
        let bytes = &line.as_bytes()[..self.end];
        strings::run_length(bytes, self.start, bytes[self.start])
    }
}

/// Returns every marker span in `line`, in order.
///
/// A line of only plain text yields an empty list.
pub fn marker_spans(line: &str) -> Vec<MarkerSpan> {
    let bytes = line.as_bytes();
    let mut spans = vec![];
    let mut i = 0;

    while i < bytes.len() {
        if is_literal(bytes[i]) {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && !is_literal(bytes[i]) {
            i += 1;
        }
        spans.push(MarkerSpan { start, end: i });
    }

    spans
}

/// The marker spans of one line, queried by byte region.
///
/// Looking at the spans of a region `[from, to)` gives the same answer as
/// scanning `&line[from..to]` afresh, so the remainder of a line can be
/// re-examined as often as needed without rescanning it.
#[derive(Debug)]
pub struct Spans<'l> {
    line: &'l str,
    spans: Vec<MarkerSpan>,
}

impl<'l> Spans<'l> {
    /// Scans `line`.
    pub fn scan(line: &'l str) -> Self {
        Spans {
            line,
            spans: marker_spans(line),
        }
    }

    /// The line these spans were scanned from.
    pub fn line(&self) -> &'l str {
        self.line
    }

    /// Whether the line is plain text.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The first span of the line.
    pub fn first(&self) -> Option<MarkerSpan> {
        self.spans.first().copied()
    }

    /// The first span overlapping `[from, to)`, clipped to that region.
    pub fn next_in(&self, from: usize, to: usize) -> Option<MarkerSpan> {
        let ix = self.spans.partition_point(|s| s.end <= from);
        let span = self.spans.get(ix)?;
        let start = span.start.max(from);
        if start >= to {
            return None;
        }
        Some(MarkerSpan {
            start,
            end: span.end.min(to),
        })
    }

    /// Offset of the first run of exactly `len` copies of `ch` inside
    /// `[from, to)`.
    pub fn find_run(&self, ch: u8, len: usize, from: usize, to: usize) -> Option<usize> {
        let bytes = self.line.as_bytes();
        let mut pos = from;

        while let Some(span) = self.next_in(pos, to) {
            let window = &bytes[..span.end];
            let mut i = span.start;
            while i < span.end {
                if window[i] != ch {
                    i += 1;
                    continue;
                }
                let run = strings::run_length(window, i, ch);
                if run == len {
                    return Some(i);
                }
                i += run;
            }
            pos = span.end;
        }

        None
    }
}
