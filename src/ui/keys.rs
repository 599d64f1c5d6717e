//! Keystroke sources for the single-character prompt.
//!
//! A keystroke is whatever one read of the input delivers in single-character
//! mode: usually one character, sometimes an escape sequence or a paste.

use async_trait::async_trait;
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Bytes requested per read; comfortably larger than one key's encoding.
const READ_CHUNK: usize = 64;

/// Incremental source of decoded keystrokes.
#[async_trait]
pub trait KeySource: Send {
    /// Wait for the next keystroke. `Ok(None)` means the input ended.
    async fn next_key(&mut self) -> io::Result<Option<String>>;
}

/// Permissive UTF-8 decoder for byte chunks.
///
/// Invalid bytes decode to U+FFFD instead of failing. A multi-byte sequence
/// split across chunks is carried over to the next chunk.
#[derive(Debug, Default)]
pub struct Utf8ChunkDecoder {
    pending: Vec<u8>,
}

impl Utf8ChunkDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode as much of `pending + bytes` as is complete.
    pub fn decode(&mut self, bytes: &[u8]) -> String {
        self.pending.extend_from_slice(bytes);
        let mut out = String::new();
        let mut rest: &[u8] = &self.pending;

        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    out.push_str(valid);
                    rest = &[];
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                    match e.error_len() {
                        Some(bad) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[bad..];
                        }
                        // Truncated sequence: keep it for the next chunk.
                        None => {
                            rest = after;
                            break;
                        }
                    }
                }
            }
        }

        self.pending = rest.to_vec();
        out
    }

    /// Flush a dangling partial sequence at end of input.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            return String::new();
        }
        self.pending.clear();
        char::REPLACEMENT_CHARACTER.to_string()
    }
}

/// Keystrokes read from an async byte stream, stdin by default.
pub struct ReaderKeys<R> {
    reader: R,
    decoder: Utf8ChunkDecoder,
}

/// Keystrokes from the process's stdin.
pub type StdinKeys = ReaderKeys<tokio::io::Stdin>;

impl StdinKeys {
    pub fn stdin() -> Self {
        Self::new(tokio::io::stdin())
    }
}

impl<R> ReaderKeys<R>
where
    R: AsyncRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            decoder: Utf8ChunkDecoder::new(),
        }
    }
}

#[async_trait]
impl<R> KeySource for ReaderKeys<R>
where
    R: AsyncRead + Unpin + Send,
{
    async fn next_key(&mut self) -> io::Result<Option<String>> {
        let mut buf = [0u8; READ_CHUNK];
        loop {
            let n = self.reader.read(&mut buf).await?;
            if n == 0 {
                let tail = self.decoder.finish();
                return Ok((!tail.is_empty()).then_some(tail));
            }
            let decoded = self.decoder.decode(&buf[..n]);
            if decoded.is_empty() {
                // Only part of a multi-byte character so far.
                continue;
            }
            return Ok(Some(normalize_enter(decoded)));
        }
    }
}

/// Terminals without CR-to-NL translation send a bare `\r` for Enter.
fn normalize_enter(key: String) -> String {
    if key == "\r" {
        "\n".to_string()
    } else {
        key
    }
}
