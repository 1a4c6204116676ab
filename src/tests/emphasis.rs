use super::*;

#[test]
fn levels() {
    html("*italic*", "<p><i>italic</i></p>\n");
    html("**bold**", "<p><b>bold</b></p>\n");
    html("***both***", "<p><b><i>both</i></b></p>\n");
}

#[test]
fn mid_line() {
    html(
        "some **bold** and *it* text",
        "<p>some <b>bold</b> and <i>it</i> text</p>\n",
    );
}

#[test]
fn closer_run_may_carry_punctuation() {
    html("**bold**!", "<p><b>bold</b>!</p>\n");
}

#[test]
fn nested() {
    html("*a **b** c*", "<p><i>a <b>b</b> c</i></p>\n");
}

#[test]
fn runs_must_match_exactly() {
    html("**a*", "<p>**a*</p>\n");
    html("****x****", "<p>****x****</p>\n");
}

#[test]
fn star_bullet_is_text() {
    html("* item", "<p>* item</p>\n");
}

#[test]
fn continues_paragraph() {
    html("plain\n**bold** line", "<p>plain\n<b>bold</b> line</p>\n");
}

#[test]
fn dangling_marker_later_in_line() {
    html(
        "**bold** and *dangling",
        "<p><b>bold</b> and *dangling</p>\n",
    );
}

#[test]
fn inside_list_item() {
    html("- **a** b", "<ul>\n<li><b>a</b> b</li>\n</ul>\n");
}

#[test]
fn depth_limit() {
    html_opts!(
        [parse.max_inline_depth = 1],
        "**a *b* c**",
        "<p><b>a *b* c</b></p>\n"
    );
    html_opts!([parse.max_inline_depth = 0], "**a**", "<p>**a**</p>\n");
}
