use super::*;

#[test]
fn single_line() {
    html("> quote", "<blockquote>\n<p>quote</p>\n</blockquote>\n");
}

#[test]
fn lines_are_paragraphs() {
    html(
        "> a\n> b",
        "<blockquote>\n<p>a</p>\n<p>b</p>\n</blockquote>\n",
    );
}

#[test]
fn blank_line_ends_quote() {
    html(
        "> a\n\n> b",
        concat!(
            "<blockquote>\n<p>a</p>\n</blockquote>\n",
            "<blockquote>\n<p>b</p>\n</blockquote>\n"
        ),
    );
}

#[test]
fn text_ends_quote() {
    html(
        "> q\ntext",
        "<blockquote>\n<p>q</p>\n</blockquote>\n<p>text</p>\n",
    );
}

#[test]
fn no_space_needed() {
    html(">no space", "<blockquote>\n<p>no space</p>\n</blockquote>\n");
}

#[test]
fn nesting_is_text() {
    html(">> nested", "<p>>> nested</p>\n");
    html(">", "<p>></p>\n");
}

#[test]
fn inline_content() {
    html(
        "> *soft* words",
        "<blockquote>\n<p><i>soft</i> words</p>\n</blockquote>\n",
    );
}

#[test]
fn quote_then_list() {
    html(
        "> q\n- a",
        "<blockquote>\n<p>q</p>\n</blockquote>\n<ul>\n<li>a</li>\n</ul>\n",
    );
}
