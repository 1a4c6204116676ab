use std::io::Write;
use std::path::PathBuf;

use crate::{load_all, Error, Source};

#[test]
fn raw_text() {
    assert_eq!(Source::Raw("# Title".to_string()).load().unwrap(), "# Title");
}

#[test]
fn empty_raw_text() {
    assert!(matches!(
        Source::Raw(String::new()).load(),
        Err(Error::NoInput)
    ));
}

#[test]
fn missing_file() {
    let path = PathBuf::from("definitely/not/here.md");
    match Source::File(path.clone()).load() {
        Err(Error::NotFound(p)) => assert_eq!(p, path),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "# Title\n\ntext\n").unwrap();

    let text = Source::File(file.path().to_path_buf()).load().unwrap();
    assert_eq!(text, "# Title\n\ntext\n");
}

#[test]
fn empty_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert!(matches!(
        Source::File(file.path().to_path_buf()).load(),
        Err(Error::NoInput)
    ));
}

#[test]
fn invalid_utf8() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[b'a', 0xff, 0xfe]).unwrap();
    assert!(matches!(
        Source::File(file.path().to_path_buf()).load(),
        Err(Error::Utf8(_))
    ));
}

#[test]
fn load_all_joins_on_line_boundaries() {
    let text = load_all(&[
        Source::Raw("- a".to_string()),
        Source::Raw("- b\n".to_string()),
    ])
    .unwrap();
    assert_eq!(text, "- a\n- b\n");
}

#[test]
fn load_all_needs_a_source() {
    assert!(matches!(load_all(&[]), Err(Error::NoInput)));
}

#[test]
fn load_all_stops_at_first_failure() {
    let result = load_all(&[
        Source::Raw("a".to_string()),
        Source::File(PathBuf::from("definitely/not/here.md")),
    ]);
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
fn messages() {
    assert_eq!(
        Error::NoInput.to_string(),
        "no file or content has been provided"
    );
    assert_eq!(
        Error::NotFound(PathBuf::from("x.md")).to_string(),
        "the file x.md was not found"
    );
}
