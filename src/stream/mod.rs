// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which exposes an encoder's chunks as a pull-style, read-only byte stream.
//!
//! # Example
//! ```no_run
//! # use zipstream::{Archive, ArchiveStream, EmptyDirectory, StringContent};
//! # use zipstream::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let archive = Archive::new()
//!     .with_content(EmptyDirectory::new("directory"))
//!     .with_content(StringContent::new("other/file.txt", "data"));
//!
//! let mut stream = ArchiveStream::new(archive);
//! let mut output = Vec::new();
//!
//! while !stream.eof() {
//!     output.extend(stream.read(8192)?);
//! }
//! #   Ok(())
//! # }
//! ```
//!
//! # Blocking sources
//! Entry sources are read synchronously, including within [`AsyncRead::poll_read()`]. When polling from an async
//! runtime, archives containing file or network backed sources should be driven from a blocking context (such as
//! `tokio::task::spawn_blocking`).

use std::io::SeekFrom;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_lite::io::AsyncRead;

use crate::archive::Archive;
use crate::error::{Result, ZipError};
use crate::write::ZipEncoder;

/// A read-only, non-seekable stream over an archive's encoded bytes.
///
/// Bytes are pulled from the underlying [`ZipEncoder`] one chunk at a time; a single read never spans two chunks.
#[derive(Debug)]
pub struct ArchiveStream {
    encoder: ZipEncoder,
    chunk: Vec<u8>,
    cursor: usize,
    started: bool,
    position: u64,
}

impl ArchiveStream {
    /// Constructs a new stream over an archive with the default block size.
    pub fn new(archive: Archive) -> Self {
        ZipEncoder::new(archive).into()
    }

    /// Constructs a new stream over an archive, pulling entry data `block_size` bytes at a time.
    pub fn with_block_size(archive: Archive, block_size: usize) -> Self {
        ZipEncoder::new(archive).with_block_size(block_size).into()
    }

    /// Reads up to `max` bytes.
    ///
    /// An empty result is only returned once the archive has been fully read (or when `max` is zero).
    pub fn read(&mut self, max: usize) -> Result<Vec<u8>> {
        let available = self.fill_chunk()?;
        let bytes = available[..max.min(available.len())].to_vec();

        self.consume(bytes.len());
        Ok(bytes)
    }

    /// Reads the remainder of the archive into memory.
    ///
    /// Only the bytes not yet read are returned. See [`ArchiveStream::into_contents()`] for the whole archive.
    pub fn contents(&mut self) -> Result<Vec<u8>> {
        let mut contents = Vec::new();

        while !self.eof() {
            contents.extend(self.read(self.encoder.block_size())?);
        }

        Ok(contents)
    }

    /// Reads the whole archive into memory, from its first byte.
    ///
    /// Fails with [`ZipError::UnsupportedRewind`] if this stream has already been read from.
    pub fn into_contents(mut self) -> Result<Vec<u8>> {
        self.rewind()?;
        self.contents()
    }

    /// Returns whether every byte of the archive has been read.
    ///
    /// Always false before the first read.
    pub fn eof(&self) -> bool {
        self.started && self.encoder.is_done() && self.cursor == self.chunk.len()
    }

    /// Returns the number of bytes read so far.
    pub fn tell(&self) -> u64 {
        self.position
    }

    /// Returns the stream's total size, which is never known ahead of time.
    pub fn size(&self) -> Option<u64> {
        None
    }

    /// Restarts the stream from its first byte.
    ///
    /// Fails with [`ZipError::UnsupportedRewind`] once the stream has been read from, as entry sources can't be
    /// assumed to be readable a second time. This includes reads which returned no bytes or failed.
    pub fn rewind(&mut self) -> Result<()> {
        if self.started {
            return Err(ZipError::UnsupportedRewind);
        }

        self.encoder.reset();
        self.chunk.clear();
        self.cursor = 0;
        self.started = false;
        Ok(())
    }

    pub fn seek(&mut self, _: SeekFrom) -> Result<u64> {
        Err(ZipError::UnsupportedSeek)
    }

    pub fn write(&mut self, _: &[u8]) -> Result<usize> {
        Err(ZipError::UnsupportedWrite)
    }

    pub fn is_seekable(&self) -> bool {
        false
    }

    pub fn is_writable(&self) -> bool {
        false
    }

    pub fn is_readable(&self) -> bool {
        true
    }

    /// Returns the unread remainder of the current chunk, pulling the next chunk if it's been exhausted.
    fn fill_chunk(&mut self) -> Result<&[u8]> {
        self.started = true;

        while self.cursor == self.chunk.len() {
            match self.encoder.next() {
                Some(chunk) => {
                    self.chunk = chunk?;
                    self.cursor = 0;
                }
                None => break,
            }
        }

        Ok(&self.chunk[self.cursor..])
    }

    fn consume(&mut self, amount: usize) {
        self.cursor += amount;
        self.position += amount as u64;
    }
}

impl From<ZipEncoder> for ArchiveStream {
    fn from(encoder: ZipEncoder) -> Self {
        Self { encoder, chunk: Vec::new(), cursor: 0, started: false, position: 0 }
    }
}

impl std::io::Read for ArchiveStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let available = self.fill_chunk()?;
        let read = buf.len().min(available.len());

        buf[..read].copy_from_slice(&available[..read]);
        self.consume(read);
        Ok(read)
    }
}

impl AsyncRead for ArchiveStream {
    fn poll_read(self: Pin<&mut Self>, _: &mut Context<'_>, buf: &mut [u8]) -> Poll<std::io::Result<usize>> {
        Poll::Ready(std::io::Read::read(self.get_mut(), buf))
    }
}
