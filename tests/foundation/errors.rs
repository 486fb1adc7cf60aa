//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use versescope_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_missing_attribute() {
    let err = Error::missing_attribute("chapter", "n");
    assert!(matches!(err.kind, ErrorKind::MissingAttribute { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("chapter"));
}

#[test]
fn error_invalid_number() {
    let err = Error::invalid_number("verse", "1a");
    if let ErrorKind::InvalidNumber { field, value } = &err.kind {
        assert_eq!(field, "verse");
        assert_eq!(value, "1a");
    } else {
        panic!("expected InvalidNumber");
    }
    assert!(format!("{err}").contains("\"1a\""));
}

#[test]
fn error_malformed() {
    let err = Error::malformed("ill-formed end tag");
    assert!(matches!(err.kind, ErrorKind::MalformedDocument(_)));
    assert!(format!("{err}").contains("ill-formed end tag"));
}

#[test]
fn error_from_io() {
    let err: Error = std::io::Error::other("disk on fire").into();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(err.context.is_none());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_display_with_frames() {
    let ctx = ErrorContext::new()
        .with_source("NIV.xml")
        .with_position(3, 14)
        .with_frame("book Exodus")
        .with_frame("chapter 20");
    let display = format!("{ctx}");
    assert!(display.starts_with("at NIV.xml:3:14\n"));
    assert!(display.contains("  in book Exodus\n"));
    assert!(display.contains("  in chapter 20\n"));
}

#[test]
fn context_display_without_source() {
    let ctx = ErrorContext::new().with_position(1, 2);
    assert_eq!(format!("{ctx}"), "at 1:2");
}

#[test]
fn report_includes_context() {
    let err = Error::new(ErrorKind::MissingRoot)
        .with_context(ErrorContext::default().with_source("empty.xml"));
    assert_eq!(err.report(), "document has no root element at empty.xml");
}
