mod inlines;
pub mod options;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::parser::inlines::Subject;
pub use crate::parser::options::Options;
use crate::scanner::{MarkerSpan, Spans};
use crate::strings;

/// A block element that stays open across lines until its closing
/// condition is met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// `<p>`, opened by plain text.
    Paragraph,
    /// `<ul>`, opened by a line starting with `-`.
    UnorderedList,
    /// `<ol>`, opened by a line starting with `+`.
    OrderedList,
    /// `<blockquote>`, opened by a line starting with `>`.
    BlockQuote,
}

impl Block {
    /// The HTML tag name of this block.
    pub fn tag(self) -> &'static str {
        match self {
            Block::Paragraph => "p",
            Block::UnorderedList => "ul",
            Block::OrderedList => "ol",
            Block::BlockQuote => "blockquote",
        }
    }

    /// The character a line must start with to continue this block.
    fn marker(self) -> Option<u8> {
        match self {
            Block::Paragraph => None,
            Block::UnorderedList => Some(b'-'),
            Block::OrderedList => Some(b'+'),
            Block::BlockQuote => Some(b'>'),
        }
    }

    /// Tags wrapping each line of the block.
    fn item_tags(self) -> (&'static str, &'static str) {
        match self {
            Block::BlockQuote => ("<p>", "</p>\n"),
            _ => ("<li>", "</li>\n"),
        }
    }
}

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

const UNDERLINE_BLOCK_OPEN: &str = "<p style=\"text-decoration: underline;\">";

const CONTAINERS: [Block; 3] = [Block::BlockQuote, Block::UnorderedList, Block::OrderedList];

/// Converts Markdown to HTML one line at a time.
///
/// A parser converts exactly one document: feed it text with
/// [`Parser::feed`], then collect the body HTML with [`Parser::finish`].
///
/// ```rust
/// # use linemark::{Options, Parser};
/// let options = Options::default();
/// let mut parser = Parser::new(&options);
/// parser.feed("- one\n");
/// parser.feed("- two\n");
/// assert_eq!(parser.finish(), "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n");
/// ```
#[derive(Debug)]
pub struct Parser<'o> {
    options: &'o Options,
    output: String,
    open: SmallVec<[Block; 4]>,
    in_blockquote: bool,
    in_unordered_list: bool,
    in_ordered_list: bool,
    previous_blank: bool,
    pending_cr: bool,
}

impl<'o> Parser<'o> {
    /// Creates a parser for one document.
    pub fn new(options: &'o Options) -> Self {
        Parser {
            options,
            output: String::with_capacity(256),
            open: SmallVec::new(),
            in_blockquote: false,
            in_unordered_list: false,
            in_ordered_list: false,
            previous_blank: false,
            pending_cr: false,
        }
    }

    /// Feeds text to the parser. The text is split on line endings; a final
    /// line without a line ending is still a complete line. A `\r\n` split
    /// across two calls is one line ending.
    pub fn feed(&mut self, s: &str) {
        let sb = s.as_bytes();
        let end = s.len();
        let matcher = jetscii::bytes!(b'\r', b'\n');
        let mut ix = 0;

        if self.pending_cr && end > 0 {
            self.pending_cr = false;
            if sb[0] == b'\n' {
                ix = 1;
            }
        }

        while ix < end {
            let eol = match matcher.find(&sb[ix..]) {
                Some(offset) => ix + offset,
                None => end,
            };
            let next = match sb.get(eol) {
                Some(b'\r') if eol + 1 == end => {
                    self.pending_cr = true;
                    end
                }
                Some(b'\r') if sb[eol + 1] == b'\n' => eol + 2,
                Some(_) => eol + 1,
                None => end,
            };

            self.process_line(&s[ix..eol]);
            ix = next;
        }
    }

    /// Closes every block still open and returns the body HTML.
    pub fn finish(mut self) -> String {
        self.close_all();
        self.output
    }

    /// The blocks currently open, outermost first.
    pub fn open_elements(&self) -> &[Block] {
        &self.open
    }

    fn process_line(&mut self, line: &str) {
        let line = line.trim();

        if line.is_empty() {
            self.in_blockquote = false;
            self.in_unordered_list = false;
            self.in_ordered_list = false;
            self.previous_blank = true;
            return;
        }

        if self.previous_blank {
            if let Some(block) = self.open.pop() {
                self.write_close(block);
            }
        }

        self.end_interrupted_blocks(line.as_bytes()[0]);

        let spans = Spans::scan(line);
        match spans.first() {
            None => {
                self.begin_paragraph_line();
                self.output.push_str(line);
            }
            Some(first) => self.dispatch(&spans, first),
        }

        self.previous_blank = false;
    }

    /// Ends any running list or blockquote whose marker the line no longer
    /// starts with.
    fn end_interrupted_blocks(&mut self, first: u8) {
        for block in CONTAINERS {
            let interrupted = match self.continuation(block) {
                Some(flag) if *flag && block.marker() != Some(first) => {
                    *flag = false;
                    true
                }
                _ => false,
            };
            if interrupted {
                self.close_through(block);
            }
        }
    }

    fn dispatch(&mut self, spans: &Spans, first: MarkerSpan) {
        let line = spans.line();

        if first.start == 0 {
            let handled = match first.leading(line) {
                b'#' => self.heading(spans, first),
                b'>' => self.container_item(Block::BlockQuote, spans, first),
                b'-' => self.container_item(Block::UnorderedList, spans, first),
                b'+' => self.container_item(Block::OrderedList, spans, first),
                b'_' if self.options.render.underline_block => self.underline_block(spans, first),
                _ => false,
            };
            if handled {
                return;
            }
        }

        let resolves = Subject::new(spans).resolve(first, line.len()).is_some();

        self.begin_paragraph_line();
        if resolves {
            self.render_inline(spans, 0, line.len());
        } else {
            debug!(
                marker = first.literal(line),
                "unresolved leading marker; keeping line as text"
            );
            self.output.push_str(line);
        }
    }

    fn heading(&mut self, spans: &Spans, first: MarkerSpan) -> bool {
        let line = spans.line();
        let bytes = line.as_bytes();
        let run = first.leading_run(line);
        if bytes.get(run) != Some(&b' ') {
            return false;
        }

        let tag = HEADING_TAGS[run.min(HEADING_TAGS.len()) - 1];
        self.close_all();
        self.output.push('<');
        self.output.push_str(tag);
        self.output.push('>');
        self.render_inline(spans, strings::skip_spaces(bytes, run), line.len());
        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push_str(">\n");
        true
    }

    fn container_item(&mut self, block: Block, spans: &Spans, first: MarkerSpan) -> bool {
        let line = spans.line();
        if first.leading_run(line) != 1 {
            return false;
        }
        let content = strings::skip_spaces(line.as_bytes(), 1);
        if content >= line.len() {
            return false;
        }

        if self.open.last() != Some(&block) {
            self.close_all();
            self.open_block(block);
        }
        if let Some(flag) = self.continuation(block) {
            *flag = true;
        }

        let (open, close) = block.item_tags();
        self.output.push_str(open);
        self.render_inline(spans, content, line.len());
        self.output.push_str(close);
        true
    }

    fn underline_block(&mut self, spans: &Spans, first: MarkerSpan) -> bool {
        let line = spans.line();
        if first.leading_run(line) != 1 {
            return false;
        }
        let close = match spans.find_run(b'_', 1, 1, line.len()) {
            Some(close) => close,
            None => return false,
        };

        self.close_all();
        self.output.push_str(UNDERLINE_BLOCK_OPEN);
        self.render_inline(spans, 1, close);
        self.output.push_str("</p>");
        self.render_inline(spans, close + 1, line.len());
        self.output.push('\n');
        true
    }

    fn render_inline(&mut self, spans: &Spans, from: usize, to: usize) {
        let max_depth = self.options.parse.max_inline_depth;
        Subject::new(spans).render(from, to, max_depth, &mut self.output);
    }

    /// Continues the open paragraph on a new line, or opens one.
    fn begin_paragraph_line(&mut self) {
        if self.open.last() == Some(&Block::Paragraph) {
            self.output.push('\n');
        } else {
            self.close_all();
            self.open_block(Block::Paragraph);
        }
    }

    fn continuation(&mut self, block: Block) -> Option<&mut bool> {
        match block {
            Block::BlockQuote => Some(&mut self.in_blockquote),
            Block::UnorderedList => Some(&mut self.in_unordered_list),
            Block::OrderedList => Some(&mut self.in_ordered_list),
            Block::Paragraph => None,
        }
    }

    fn open_block(&mut self, block: Block) {
        trace!(tag = block.tag(), "open");
        self.output.push('<');
        self.output.push_str(block.tag());
        self.output.push('>');
        if block != Block::Paragraph {
            self.output.push('\n');
        }
        self.open.push(block);
    }

    fn write_close(&mut self, block: Block) {
        trace!(tag = block.tag(), "close");
        if let Some(flag) = self.continuation(block) {
            *flag = false;
        }
        self.output.push_str("</");
        self.output.push_str(block.tag());
        self.output.push_str(">\n");
    }

    /// Closes open blocks from the innermost out, up to and including
    /// `block`. Does nothing if `block` isn't open.
    fn close_through(&mut self, block: Block) {
        if !self.open.contains(&block) {
            return;
        }
        while let Some(top) = self.open.pop() {
            self.write_close(top);
            if top == block {
                break;
            }
        }
    }

    fn close_all(&mut self) {
        while let Some(top) = self.open.pop() {
            self.write_close(top);
        }
    }
}
