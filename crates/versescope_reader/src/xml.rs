//! Streaming XML reader for book/chapter/verse documents.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, info, warn};
use versescope_foundation::{Error, ErrorContext, ErrorKind, Result, VerseRecord};

/// Attribute carrying the book name, chapter number, or verse number.
const ID_ATTRIBUTE: &str = "n";

/// Nesting depth of each structural level (the root element is depth 1).
const BOOK_DEPTH: usize = 2;
const CHAPTER_DEPTH: usize = 3;
const VERSE_DEPTH: usize = 4;

/// Reads book → chapter → verse XML into [`VerseRecord`]s.
#[derive(Clone, Debug, Default)]
pub struct XmlCorpusReader {
    /// File name reported in error context.
    source_name: Option<String>,
}

impl XmlCorpusReader {
    /// Creates a reader with no source name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name reported in error context.
    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Reads every verse of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the document is malformed.
    pub fn read_file(path: &Path) -> Result<Vec<VerseRecord>> {
        let name = path.display().to_string();
        let source = fs::read_to_string(path)
            .map_err(|e| Error::from(e).with_context(ErrorContext::new().with_source(&name)))?;

        Self::new().with_source_name(name).read_str(&source)
    }

    /// Reads every verse of an in-memory document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not well-formed XML, has no root
    /// element, lacks an `n` attribute on a book, chapter or verse, or has a
    /// chapter or verse identifier that is not a positive integer.
    pub fn read_str(&self, source: &str) -> Result<Vec<VerseRecord>> {
        let mut parser = DocumentParser::new(source);

        let result = parser.run();
        let verses = result.map_err(|err| {
            let mut context = ErrorContext::new();
            if let Some(name) = &self.source_name {
                context = context.with_source(name);
            }
            let (line, column) = line_and_column(source, parser.position());
            context = context.with_position(line, column);
            for frame in parser.frames() {
                context = context.with_frame(frame);
            }
            err.with_context(context)
        })?;

        if verses.is_empty() {
            warn!(source = ?self.source_name, "document contains no verses");
        }
        info!(
            source = ?self.source_name,
            books = parser.books_read,
            verses = verses.len(),
            "read corpus document"
        );

        Ok(verses)
    }
}

/// The verse currently being collected.
struct OpenVerse {
    number: u32,
    text: String,
}

/// Parse state for one document.
struct DocumentParser<'s> {
    reader: Reader<&'s [u8]>,
    depth: usize,
    saw_root: bool,
    book: Option<String>,
    chapter: Option<u32>,
    verse: Option<OpenVerse>,
    verses: Vec<VerseRecord>,
    book_verses: usize,
    books_read: usize,
}

impl<'s> DocumentParser<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            reader: Reader::from_str(source),
            depth: 0,
            saw_root: false,
            book: None,
            chapter: None,
            verse: None,
            verses: Vec::new(),
            book_verses: 0,
            books_read: 0,
        }
    }

    /// Byte offset the reader has reached.
    fn position(&self) -> usize {
        usize::try_from(self.reader.buffer_position()).unwrap_or(usize::MAX)
    }

    /// Describes the enclosing elements, outermost first.
    fn frames(&self) -> Vec<String> {
        let mut frames = Vec::new();
        if let Some(book) = &self.book {
            frames.push(format!("book {book}"));
        }
        if let Some(chapter) = self.chapter {
            frames.push(format!("chapter {chapter}"));
        }
        if let Some(verse) = &self.verse {
            frames.push(format!("verse {}", verse.number));
        }
        frames
    }

    fn run(&mut self) -> Result<Vec<VerseRecord>> {
        loop {
            let event = self
                .reader
                .read_event()
                .map_err(|e| Error::malformed(e.to_string()))?;

            match event {
                Event::Start(element) => self.open(&element)?,
                Event::Empty(element) => {
                    self.open(&element)?;
                    self.close();
                }
                Event::End(_) => self.close(),
                Event::Text(text) => {
                    if let Some(verse) = self.verse.as_mut() {
                        let unescaped = text.unescape().map_err(|e| Error::malformed(e.to_string()))?;
                        verse.text.push_str(&unescaped);
                    }
                }
                Event::CData(data) => {
                    if let Some(verse) = self.verse.as_mut() {
                        verse.text.push_str(&String::from_utf8_lossy(&data));
                    }
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctypes
                _ => {}
            }
        }

        if !self.saw_root {
            return Err(Error::new(ErrorKind::MissingRoot));
        }
        if self.depth > 0 {
            return Err(Error::malformed("unexpected end of document"));
        }

        Ok(std::mem::take(&mut self.verses))
    }

    /// Handles an opening tag at the next nesting level.
    fn open(&mut self, element: &BytesStart<'_>) -> Result<()> {
        self.depth += 1;

        match self.depth {
            1 => self.saw_root = true,
            BOOK_DEPTH => {
                let name = required_attribute(element, "book")?;
                self.book = Some(name);
                self.book_verses = 0;
            }
            CHAPTER_DEPTH => {
                let raw = required_attribute(element, "chapter")?;
                self.chapter = Some(parse_number("chapter", &raw)?);
            }
            VERSE_DEPTH => {
                let raw = required_attribute(element, "verse")?;
                self.verse = Some(OpenVerse {
                    number: parse_number("verse", &raw)?,
                    text: String::new(),
                });
            }
            // Markup nested inside a verse contributes only its text.
            _ => {}
        }

        Ok(())
    }

    /// Handles a closing tag, emitting the verse or leaving the level.
    fn close(&mut self) {
        match self.depth {
            BOOK_DEPTH => {
                if let Some(book) = self.book.take() {
                    debug!(book = %book, verses = self.book_verses, "read book");
                }
                self.books_read += 1;
            }
            CHAPTER_DEPTH => self.chapter = None,
            VERSE_DEPTH => {
                if let (Some(book), Some(chapter), Some(verse)) =
                    (&self.book, self.chapter, self.verse.take())
                {
                    self.verses
                        .push(VerseRecord::new(book.clone(), chapter, verse.number, verse.text));
                    self.book_verses += 1;
                }
            }
            _ => {}
        }

        self.depth = self.depth.saturating_sub(1);
    }
}

/// Returns the unescaped `n` attribute of a structural element.
fn required_attribute(element: &BytesStart<'_>, level: &str) -> Result<String> {
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|e| Error::malformed(e.to_string()))?;
        if attribute.key.as_ref() == ID_ATTRIBUTE.as_bytes() {
            let value = attribute
                .unescape_value()
                .map_err(|e| Error::malformed(e.to_string()))?;
            return Ok(value.into_owned());
        }
    }

    Err(Error::missing_attribute(level, ID_ATTRIBUTE))
}

/// Parses a chapter or verse identifier as a positive integer.
fn parse_number(field: &str, raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::invalid_number(field, raw)),
    }
}

/// Converts a byte offset into a 1-based line and character column.
fn line_and_column(source: &str, offset: usize) -> (usize, usize) {
    let mut end = offset.min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }

    let before = &source[..end];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    (line, before[line_start..].chars().count() + 1)
}
