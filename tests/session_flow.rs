use std::fs;
use std::io::Cursor;
use std::path::Path;

use labelsheet::rendering::text::embedded_font;
use labelsheet::{Error, Session, SheetConfig, Step};

fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
    Session::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        embedded_font().expect("bundled font"),
        SheetConfig::default(),
    )
}

fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read output dir")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn quitting_first_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path().join("sheets");

    let mut s = session("q\n");
    let saved = s.run(&out_dir).expect("session");

    assert!(saved.is_empty());
    assert!(out_dir.is_dir());
    assert!(files_in(&out_dir).is_empty());
}

#[test]
fn end_of_input_quits() {
    let tmp = tempfile::tempdir().unwrap();
    let mut s = session("");
    assert_eq!(s.step(tmp.path()).unwrap(), Step::Quit);
}

#[test]
fn label_is_saved_as_full_page_png() {
    let tmp = tempfile::tempdir().unwrap();

    let mut s = session("red apple\n\nq\n");
    let saved = s.run(tmp.path()).expect("session");

    assert_eq!(saved, vec![tmp.path().join("redapple_image.png")]);
    assert_eq!(files_in(tmp.path()), vec!["redapple_image.png"]);

    let img = image::open(&saved[0]).expect("decode png");
    assert_eq!(img.width(), 2551);
    assert_eq!(img.height(), 3301);

    let out = String::from_utf8(s.into_output()).unwrap();
    assert!(out.contains(&format!("Saved {}", saved[0].display())));
    assert!(out.ends_with("Enter Word(or q to quit): "));
}

#[test]
fn invalid_font_size_stops_without_output() {
    let tmp = tempfile::tempdir().unwrap();

    let mut s = session("pear\ntwelve\nplum\n\nq\n");
    let err = s.run(tmp.path()).unwrap_err();

    assert!(matches!(err, Error::InvalidFontSize(ref v) if v == "twelve"));
    assert!(files_in(tmp.path()).is_empty());
}

#[test]
fn huge_font_size_is_rejected_before_rendering() {
    let tmp = tempfile::tempdir().unwrap();

    let mut s = session("a\n4000000000\nq\n");
    let err = s.run(tmp.path()).unwrap_err();

    assert!(matches!(err, Error::InvalidFontSize(ref v) if v == "4000000000"));
    assert!(files_in(tmp.path()).is_empty());
}

#[test]
fn unwritable_directory_ends_the_session() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("not_a_dir");
    fs::write(&blocker, b"occupied").unwrap();

    let mut s = session("pear\n\nq\n");
    let err = s.run(&blocker).unwrap_err();
    assert!(matches!(err, Error::IoError(_)));
}
