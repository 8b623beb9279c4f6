//! Indented XML output for SVG documents.
//!
//! [`SvgWriter`] is a small facade over [`quick_xml::Writer`] exposing the
//! handful of primitives the drawing serializer needs: the XML prologue, a
//! DOCTYPE declaration, and tags with ordered attributes, either empty or
//! wrapping nested content. Each nesting level is indented by a configurable
//! number of spaces.
//!
//! Output goes to an in-memory buffer, so none of the calls can fail.
//!
//! # Example
//!
//! ```
//! # use vellum_core::markup::SvgWriter;
//! let mut writer = SvgWriter::new(2);
//! writer.start("svg", [("version", "1.1")]);
//! writer.empty("line", [("x1", "0"), ("y1", "0")]);
//! writer.end("svg");
//!
//! assert_eq!(
//!     writer.finish(),
//!     "<svg version=\"1.1\">\n  <line x1=\"0\" y1=\"0\"/>\n</svg>\n"
//! );
//! ```

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

/// Indentation width used when none is configured.
pub const DEFAULT_INDENT: usize = 2;

const INFALLIBLE: &str = "Writing to an in-memory buffer is infallible";

/// Streaming writer for indented XML markup.
pub struct SvgWriter {
    writer: Writer<Vec<u8>>,
}

impl SvgWriter {
    /// Creates a writer indenting each nesting level by `indent` spaces.
    pub fn new(indent: usize) -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', indent),
        }
    }

    /// Writes the `<?xml version="1.0" encoding="UTF-8"?>` prologue.
    pub fn declaration(&mut self) {
        self.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)));
    }

    /// Writes `<!DOCTYPE {declaration}>`. The declaration is written verbatim.
    pub fn doctype(&mut self, declaration: &str) {
        self.write(Event::DocType(BytesText::from_escaped(declaration)));
    }

    /// Opens a tag that will wrap nested content. Attribute values are escaped.
    pub fn start<'a>(&mut self, name: &str, attributes: impl IntoIterator<Item = (&'a str, &'a str)>) {
        let mut tag = BytesStart::new(name);
        tag.extend_attributes(attributes);
        self.write(Event::Start(tag));
    }

    /// Writes a self-closing tag. Attribute values are escaped.
    pub fn empty<'a>(&mut self, name: &str, attributes: impl IntoIterator<Item = (&'a str, &'a str)>) {
        let mut tag = BytesStart::new(name);
        tag.extend_attributes(attributes);
        self.write(Event::Empty(tag));
    }

    /// Closes a tag opened with [`start`](Self::start).
    pub fn end(&mut self, name: &str) {
        self.write(Event::End(BytesEnd::new(name)));
    }

    /// Consumes the writer, returning the newline-terminated document.
    pub fn finish(self) -> String {
        let mut buffer = self.writer.into_inner();
        buffer.push(b'\n');
        String::from_utf8(buffer).expect("Markup is assembled from UTF-8 strings")
    }

    fn write(&mut self, event: Event<'_>) {
        self.writer.write_event(event).expect(INFALLIBLE);
    }
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}
