//! Configuration for the parser and renderer.

#[cfg(feature = "bon")]
use bon::Builder;

/// Default for [`Parse::max_inline_depth`].
pub const DEFAULT_MAX_INLINE_DEPTH: usize = 32;

#[derive(Default, Debug, Clone)]
/// Umbrella options struct.
pub struct Options {
    /// Configure parse-time options.
    pub parse: Parse,

    /// Configure render-time options.
    pub render: Render,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Options for the line and inline scanners.
pub struct Parse {
    /// How deeply inline markup may nest (emphasis inside link text inside
    /// emphasis, and so on). Markers beyond this depth are kept as text.
    ///
    /// ```rust
    /// # use linemark::{markdown_to_html, Options};
    /// let mut options = Options::default();
    /// options.render.fragment = true;
    /// assert_eq!(markdown_to_html("**a *b* c**\n", &options),
    ///            "<p><b>a <i>b</i> c</b></p>\n");
    ///
    /// options.parse.max_inline_depth = 1;
    /// assert_eq!(markdown_to_html("**a *b* c**\n", &options),
    ///            "<p><b>a *b* c</b></p>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = DEFAULT_MAX_INLINE_DEPTH))]
    pub max_inline_depth: usize,
}

impl Default for Parse {
    fn default() -> Self {
        Parse {
            max_inline_depth: DEFAULT_MAX_INLINE_DEPTH,
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Options for the HTML output.
pub struct Render {
    /// Emit only the converted body content, without the `<!DOCTYPE html>`
    /// document shell.
    ///
    /// ```rust
    /// # use linemark::{markdown_to_html, Options};
    /// let mut options = Options::default();
    /// assert_eq!(markdown_to_html("Hello.\n", &options),
    ///            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
    ///             </head>\n<body>\n<p>Hello.</p>\n</body>\n</html>\n");
    ///
    /// options.render.fragment = true;
    /// assert_eq!(markdown_to_html("Hello.\n", &options),
    ///            "<p>Hello.</p>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub fragment: bool,

    /// Document title, written as `<title>` in the head.
    pub title: Option<String>,

    /// Document author, written as `<meta name="author">` in the head.
    pub author: Option<String>,

    /// Render an underline that opens a line as its own styled paragraph.
    /// Underlines anywhere else are always styled spans.
    ///
    /// ```rust
    /// # use linemark::{markdown_to_html, Options};
    /// let mut options = Options::default();
    /// options.render.fragment = true;
    /// assert_eq!(markdown_to_html("_Note_\n", &options),
    ///            "<p style=\"text-decoration: underline;\">Note</p>\n");
    ///
    /// options.render.underline_block = false;
    /// assert_eq!(markdown_to_html("_Note_\n", &options),
    ///            "<p><span style=\"text-decoration: underline;\">Note</span></p>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub underline_block: bool,
}

impl Default for Render {
    fn default() -> Self {
        Render {
            fragment: false,
            title: None,
            author: None,
            underline_block: true,
        }
    }
}
