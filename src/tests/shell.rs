use super::*;

#[test]
fn document_shell() {
    assert_eq!(
        markdown_to_html("Hi", &Options::default()),
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "</head>\n",
            "<body>\n",
            "<p>Hi</p>\n",
            "</body>\n",
            "</html>\n"
        )
    );
}

#[test]
fn empty_document_still_has_shell() {
    assert_eq!(
        markdown_to_html("", &Options::default()),
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n<body>\n</body>\n</html>\n"
    );
}

#[test]
fn metadata_is_escaped() {
    let mut options = Options::default();
    options.render.title = Some("<Notes>".to_string());
    options.render.author = Some("Ann & \"Bo\"".to_string());

    assert_eq!(
        markdown_to_html("Hi", &options),
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<meta name=\"author\" content=\"Ann &amp; &quot;Bo&quot;\">\n",
            "<title>&lt;Notes&gt;</title>\n",
            "</head>\n",
            "<body>\n",
            "<p>Hi</p>\n",
            "</body>\n",
            "</html>\n"
        )
    );
}

#[test]
fn fragment_has_no_shell() {
    let mut options = Options::default();
    options.render.fragment = true;
    options.render.title = Some("ignored".to_string());
    assert_eq!(markdown_to_html("Hi", &options), "<p>Hi</p>\n");
}

#[test]
fn writes_into_any_formatter() {
    struct Counter(usize);

    impl std::fmt::Write for Counter {
        fn write_str(&mut self, s: &str) -> std::fmt::Result {
            self.0 += s.len();
            Ok(())
        }
    }

    let options = Options::default();
    let mut counter = Counter(0);
    format_html("# Title\n", &options, &mut counter).unwrap();
    assert_eq!(counter.0, markdown_to_html("# Title\n", &options).len());
}
