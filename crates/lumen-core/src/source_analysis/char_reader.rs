// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! A peek/consume reader for bytes from an arbitrary input stream.
//!
//! [`CharReader`] normalises newlines (`\r` and `\r\n` become `\n`) and tags
//! every byte with the [`SourcePosition`] at which it was read. Input is
//! treated as raw character data; it is not validated as UTF-8.
//!
//! Lookahead past the end of input never fails: `peek`/`consume` return
//! `None` once the stream is drained. The only error this component can
//! produce is [`ReadError`], raised when the underlying stream itself fails,
//! and that error is fatal for the compilation unit being read.

use std::collections::VecDeque;
use std::io::{BufReader, Bytes, Read};

use miette::Diagnostic;
use thiserror::Error;

use super::SourcePosition;

/// A failure of the underlying byte stream.
///
/// This is the only fatal error in the front end: it aborts lexing of the
/// current compilation unit and propagates to the caller.
#[derive(Debug, Error, Diagnostic)]
#[error("failed to read from the source byte stream")]
pub struct ReadError {
    #[from]
    source: std::io::Error,
}

/// A buffered, lookahead-capable byte cursor over a single input stream.
///
/// The reader maintains an internal buffer of not-yet-consumed bytes, each
/// tagged with its source position at read time. The buffer must be owned
/// exclusively by the lexer processing the stream; it is not safe to share.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use lumen_core::source_analysis::CharReader;
///
/// let mut reader = CharReader::new(Cursor::new("ab"));
/// assert_eq!(reader.peek(1).unwrap(), Some(b'b'));
/// assert_eq!(reader.consume(0).unwrap(), Some(b'a'));
/// ```
#[derive(Debug)]
pub struct CharReader<R: Read> {
    input: Bytes<BufReader<R>>,
    /// One byte of pushback used during `\r\n` normalisation.
    pushback: Option<u8>,
    /// Not-yet-consumed bytes with the positions they were read at.
    buffer: VecDeque<(u8, SourcePosition)>,
    // Stream position of the next byte to be read from `input`.
    offset_in_file: u32,
    newlines_count: u32,
    offset_in_line: u32,
}

impl<R: Read> CharReader<R> {
    /// Creates a new reader over the given input stream.
    pub fn new(input: R) -> Self {
        Self {
            input: BufReader::new(input).bytes(),
            pushback: None,
            buffer: VecDeque::new(),
            offset_in_file: 0,
            newlines_count: 0,
            offset_in_line: 0,
        }
    }

    /// Peeks at the byte `offset` positions ahead without consuming it.
    ///
    /// Returns `None` when the requested position is past the end of input.
    pub fn peek(&mut self, offset: usize) -> Result<Option<u8>, ReadError> {
        self.fill(offset + 1)?;
        Ok(self.buffer.get(offset).map(|&(byte, _)| byte))
    }

    /// Consumes `offset + 1` bytes and returns the last one.
    ///
    /// `consume(0)` consumes and returns the next byte; `consume(2)` skips
    /// two bytes and consumes and returns the third. Returns `None` when the
    /// requested position is past the end of input.
    pub fn consume(&mut self, offset: usize) -> Result<Option<u8>, ReadError> {
        let result = self.peek(offset)?;
        for _ in 0..=offset {
            self.buffer.pop_front();
        }
        Ok(result)
    }

    /// Consumes the next byte only if it matches.
    pub fn consume_if_matches(&mut self, expected: u8) -> Result<bool, ReadError> {
        if self.peek(0)? == Some(expected) {
            self.consume(0)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Atomically consumes a multi-byte literal only if the lookahead fully
    /// matches it. Nothing is consumed on a partial match.
    pub fn consume_all_if_next(&mut self, literal: &[u8]) -> Result<bool, ReadError> {
        self.fill(literal.len())?;
        if self.buffer.len() < literal.len() {
            return Ok(false);
        }
        let matches = literal
            .iter()
            .zip(self.buffer.iter())
            .all(|(expected, &(byte, _))| *expected == byte);
        if matches {
            for _ in 0..literal.len() {
                self.buffer.pop_front();
            }
        }
        Ok(matches)
    }

    /// Returns `true` once the buffer is empty and the stream is drained.
    pub fn end_of_file_reached(&mut self) -> Result<bool, ReadError> {
        Ok(self.peek(0)?.is_none())
    }

    /// Returns the position of the next unconsumed byte.
    ///
    /// At end of input this is the position one past the last byte, which is
    /// where the synthetic end-of-file token is placed.
    #[must_use]
    pub fn source_position(&self) -> SourcePosition {
        if let Some(&(_, position)) = self.buffer.front() {
            return position;
        }
        SourcePosition::new(self.offset_in_file, self.newlines_count, self.offset_in_line)
    }

    /// Fills the lookahead buffer with up to `len` bytes.
    fn fill(&mut self, len: usize) -> Result<(), ReadError> {
        while self.buffer.len() < len {
            match self.read_next()? {
                Some(tagged) => self.buffer.push_back(tagged),
                None => break,
            }
        }
        Ok(())
    }

    /// Reads the next byte from the stream, normalising newlines and tagging
    /// it with its source position.
    fn read_next(&mut self) -> Result<Option<(u8, SourcePosition)>, ReadError> {
        let Some(mut byte) = self.next_byte()? else {
            return Ok(None);
        };

        // `\r\n` collapses into a single `\n` that spans two source bytes;
        // a lone `\r` becomes `\n` as well.
        let mut consumed: u32 = 1;
        if byte == b'\r' {
            match self.next_byte()? {
                Some(b'\n') => consumed = 2,
                Some(other) => self.pushback = Some(other),
                None => {}
            }
            byte = b'\n';
        }

        let position =
            SourcePosition::new(self.offset_in_file, self.newlines_count, self.offset_in_line);
        self.offset_in_file += consumed;
        if byte == b'\n' {
            self.newlines_count += 1;
            self.offset_in_line = 0;
        } else {
            self.offset_in_line += consumed;
        }
        Ok(Some((byte, position)))
    }

    fn next_byte(&mut self) -> Result<Option<u8>, ReadError> {
        if let Some(byte) = self.pushback.take() {
            return Ok(Some(byte));
        }
        Ok(self.input.next().transpose()?)
    }
}
