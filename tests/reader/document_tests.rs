//! Document reader tests.

use std::fs;

use versescope_foundation::{ErrorKind, VerseRecord};
use versescope_reader::{XmlCorpusReader, load_corpus};

const PSALM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!-- excerpt -->
<bible>
  <b n="Psalms">
    <c n="23">
      <v n="1">The LORD is my shepherd; I shall not want.</v>
      <v n="2">He maketh me to lie down in green pastures: he leadeth me beside the still waters.</v>
    </c>
    <c n=" 24 ">
      <v n="1"><![CDATA[The earth is the LORD's, & the fulness thereof;]]></v>
    </c>
  </b>
</bible>
"#;

#[test]
fn reads_books_chapters_and_verses() {
    let verses = XmlCorpusReader::new().read_str(PSALM).unwrap();

    assert_eq!(verses.len(), 3);
    assert_eq!(
        verses[0],
        VerseRecord::new("Psalms", 23, 1, "The LORD is my shepherd; I shall not want.")
    );
    assert_eq!(verses[1].verse, 2);
    assert_eq!(verses[2].chapter, 24);
    assert_eq!(verses[2].text, "The earth is the LORD's, & the fulness thereof;");
}

#[test]
fn element_names_are_not_significant() {
    let xml = r#"<scripture><book n="Jude"><chapter n="1"><verse n="25">To the only wise God</verse></chapter></book></scripture>"#;

    let verses = XmlCorpusReader::new().read_str(xml).unwrap();
    assert_eq!(verses, vec![VerseRecord::new("Jude", 1, 25, "To the only wise God")]);
}

#[test]
fn empty_root_yields_no_verses() {
    let verses = XmlCorpusReader::new().read_str("<bible/>").unwrap();
    assert!(verses.is_empty());
}

#[test]
fn missing_book_name_is_fatal() {
    let xml = r#"<bible><b><c n="1"><v n="1">text</v></c></b></bible>"#;

    let err = XmlCorpusReader::new().read_str(xml).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::MissingAttribute { ref element, ref attribute } if element == "book" && attribute == "n"
    ));
}

#[test]
fn negative_verse_number_is_fatal() {
    let xml = r#"<bible><b n="Mark"><c n="16"><v n="-9">text</v></c></b></bible>"#;

    let err = XmlCorpusReader::new().read_str(xml).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidNumber { ref field, .. } if field == "verse"
    ));
    let ctx = err.context.expect("reader attaches context");
    assert_eq!(ctx.stack, vec!["book Mark", "chapter 16"]);
    assert_eq!(ctx.line, Some(1));
}

#[test]
fn error_position_points_at_failing_line() {
    let xml = "<bible>\n<b n=\"Ruth\">\n<c n=\"1\">\n<v n=\"x\">text</v>\n</c>\n</b>\n</bible>";

    let err = XmlCorpusReader::new().read_str(xml).unwrap_err();
    assert_eq!(err.context.and_then(|ctx| ctx.line), Some(4));
}

#[test]
fn truncated_document_is_malformed() {
    let xml = r#"<bible><b n="Ruth"><c n="1"><v n="1">Intreat me not"#;

    let err = XmlCorpusReader::new().read_str(xml).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedDocument(_)));
}

#[test]
fn load_corpus_from_file() {
    let dir = std::env::temp_dir().join(format!("versescope-reader-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("psalm.xml");
    fs::write(&path, PSALM).unwrap();

    let verses = load_corpus(&path).unwrap();
    assert_eq!(verses.len(), 3);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn load_corpus_missing_file_reports_path() {
    let err = load_corpus("/nonexistent/versescope/NIV.xml").unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(err.report().contains("/nonexistent/versescope/NIV.xml"));
}
