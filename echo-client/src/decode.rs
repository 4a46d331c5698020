//! Frame decoding for the chat response stream.
//!
//! Turns arbitrarily chunked bytes into complete blank-line-delimited text
//! frames. Chunk boundaries carry no meaning: a frame, a line, or a single
//! multi-byte character may be split across any number of reads.

/// Incremental decoder from raw byte chunks to complete frames.
///
/// Holds two pieces of state between reads: an incomplete trailing UTF-8
/// sequence (at most three bytes) and the decoded text of the current
/// partial frame.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    /// Bytes of an incomplete UTF-8 sequence from the previous chunk.
    carry: Vec<u8>,
    /// Decoded text not yet terminated by a frame delimiter.
    buf: String,
}

impl FrameDecoder {
    /// Create a decoder with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk and return every frame it completes, in order.
    ///
    /// An empty chunk completes nothing and leaves all buffered state
    /// untouched. A chunk ending mid-sequence keeps the trailing bytes for
    /// the next call; definitively invalid bytes decode to U+FFFD and
    /// decoding continues.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        if chunk.is_empty() {
            return Vec::new();
        }

        let mut bytes = std::mem::take(&mut self.carry);
        bytes.extend_from_slice(chunk);
        self.decode(&bytes);

        let mut frames = Vec::new();
        while let Some(pos) = self.buf.find("\n\n") {
            let frame = self.buf[..pos].to_string();
            self.buf.drain(..pos + 2);
            frames.push(frame);
        }
        frames
    }

    /// Decode `bytes` into the frame buffer, saving an incomplete trailing
    /// sequence into the carry.
    fn decode(&mut self, bytes: &[u8]) {
        let mut input = bytes;
        while !input.is_empty() {
            match std::str::from_utf8(input) {
                Ok(text) => {
                    self.buf.push_str(text);
                    break;
                }
                Err(err) => {
                    let (valid, rest) = input.split_at(err.valid_up_to());
                    if let Ok(text) = std::str::from_utf8(valid) {
                        self.buf.push_str(text);
                    }
                    match err.error_len() {
                        // Invalid sequence: replace and keep decoding.
                        Some(len) => {
                            self.buf.push(char::REPLACEMENT_CHARACTER);
                            input = &rest[len..];
                        }
                        // Incomplete trailing sequence: wait for more bytes.
                        None => {
                            self.carry = rest.to_vec();
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Consume the decoder at end of stream, returning any residual partial
    /// frame.
    ///
    /// The stream ending mid-frame is not an error; callers log the residue
    /// and discard it.
    #[must_use]
    pub fn finish(self) -> Option<String> {
        let mut rest = self.buf;
        if !self.carry.is_empty() {
            // A sequence still incomplete at end of stream is invalid.
            rest.push_str(&String::from_utf8_lossy(&self.carry));
        }
        if rest.is_empty() { None } else { Some(rest) }
    }
}
