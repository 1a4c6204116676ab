use super::*;

#[test]
fn exercise_full_api() {
    let default_options = Options::default();

    // Use every member of the exposed API without any defaults.
    // Not looking for specific outputs, just want to know if the API changes shape.

    let _: String = markdown_to_html("# My document\n", &default_options);
    let _: String = markdown_to_pretty_html("# My document\n", &default_options);

    let mut buffer = String::new();
    let _: std::fmt::Result = format_html("# My document\n", &default_options, &mut buffer);
    let _: std::fmt::Result = html::escape("<title>", &mut buffer);

    let mut parser = Parser::new(&default_options);
    parser.feed("# My document\n");
    let _: &[Block] = parser.open_elements();
    let _: String = parser.finish();

    let _: &str = Block::Paragraph.tag();

    let spans: Vec<crate::scanner::MarkerSpan> = crate::scanner::marker_spans("**a**");
    let _: &str = spans[0].literal("**a**");
    let _: bool = crate::scanner::is_literal(b'a');
    let scanned = crate::scanner::Spans::scan("**a**");
    let _: Option<crate::scanner::MarkerSpan> = scanned.next_in(0, 5);
    let _: Option<usize> = scanned.find_run(b'*', 2, 2, 5);

    let _: String = prettify("<p>a</p>");

    let _: Result<String, Error> = Source::Raw("a".to_string()).load();
    let _: Result<String, Error> = load_all(&[Source::Raw("a".to_string())]);

    let parse = Parse {
        max_inline_depth: options::DEFAULT_MAX_INLINE_DEPTH,
    };
    let render = Render {
        fragment: true,
        title: Some("title".to_string()),
        author: Some("author".to_string()),
        underline_block: false,
    };
    let _ = Options { parse, render };
}

#[test]
fn defaults() {
    let options = Options::default();
    assert_eq!(options.parse.max_inline_depth, 32);
    assert!(!options.render.fragment);
    assert!(options.render.underline_block);
    assert_eq!(options.render.title, None);
    assert_eq!(options.render.author, None);
}

#[cfg(feature = "bon")]
#[test]
fn builders() {
    let render = Render::builder()
        .fragment(true)
        .title("Notes".to_string())
        .build();
    assert!(render.fragment);
    assert!(render.underline_block);
    assert_eq!(render.title.as_deref(), Some("Notes"));
    assert_eq!(render.author, None);

    let parse = Parse::builder().build();
    assert_eq!(parse.max_inline_depth, options::DEFAULT_MAX_INLINE_DEPTH);

    let options = Options { parse, render };
    assert_eq!(
        markdown_to_html("**hi**\n", &options),
        "<p><b>hi</b></p>\n"
    );
}
