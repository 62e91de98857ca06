//! Buffered output in a single-byte legacy codepage

use std::io::{self, BufWriter, Write};

use encoding_rs::Encoding;

/// Output sink that encodes text before buffering it
///
/// Characters the codepage cannot represent are written as numeric
/// character references. That is only correct in attribute values and
/// markup; CDATA text must be checked with
/// [`is_representable`](Self::is_representable) before it is written.
pub struct EncodedSink<W: Write> {
    inner: BufWriter<W>,
    encoding: &'static Encoding,
}

impl<W: Write> EncodedSink<W> {
    /// Wrap a writer
    pub fn new(writer: W, encoding: &'static Encoding, capacity: usize) -> Self {
        Self {
            inner: BufWriter::with_capacity(capacity, writer),
            encoding,
        }
    }

    /// Output codepage
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Check if every character of `text` exists in the codepage
    pub fn is_representable(&self, text: &str) -> bool {
        text.is_ascii() || !self.encoding.encode(text).2
    }

    /// Encode and write `text`
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        if text.is_ascii() {
            return self.inner.write_all(text.as_bytes());
        }
        let (bytes, _, unmappable) = self.encoding.encode(text);
        if unmappable {
            log::warn!(
                "text contains characters not representable in {}, writing character references",
                self.encoding.name()
            );
        }
        self.inner.write_all(&bytes)
    }

    /// Encode and write `text` followed by a newline
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write_str(text)?;
        self.inner.write_all(b"\n")
    }

    /// Flush buffered bytes to the underlying writer
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> io::Result<W> {
        self.inner.into_inner().map_err(|e| e.into_error())
    }
}

impl<W: Write> std::fmt::Debug for EncodedSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedSink")
            .field("encoding", &self.encoding.name())
            .finish_non_exhaustive()
    }
}
