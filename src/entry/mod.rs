// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Sources of entry data and metadata.
//!
//! The encoder only ever sees entries through the [`EntrySource`] trait, so new kinds of sources (eg. network-backed
//! ones) can be added without touching it. A handful of common sources are provided:
//! - [`StringContent`] for in-memory data.
//! - [`FileContent`] for files on disk, opened lazily.
//! - [`CallbackContent`] for data produced by a closure when the entry is reached.
//! - [`ReaderContent`] for an arbitrary, already-open reader.
//! - [`EmptyDirectory`] for directories without any data.

pub mod content;

pub use content::{CallbackContent, EmptyDirectory, FileContent, ReaderContent, StringContent};

use std::fmt;
use std::io::Read;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::spec::compression::Compression;
use crate::string::StringEncoding;

/// The kind of an entry, which determines its naming, attributes, and whether it carries data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    #[default]
    File,
    Directory,
}

/// The result of opening an entry's data.
pub enum EntryData {
    /// A finite byte source which is read to exhaustion exactly once.
    Data(Box<dyn Read + Send>),
    /// The entry has no data phase at all (eg. a directory).
    NoData,
}

impl EntryData {
    /// Wraps a reader as entry data.
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        EntryData::Data(Box::new(reader))
    }
}

impl fmt::Debug for EntryData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryData::Data(_) => f.write_str("Data(..)"),
            EntryData::NoData => f.write_str("NoData"),
        }
    }
}

/// Describes data a source has already compressed.
///
/// The encoder streams such data unchanged. Its compressed length is whatever was streamed, whilst the CRC and the
/// uncompressed length can't be derived from compressed bytes and so are taken from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precompressed {
    pub compression: Compression,
    pub crc32: u32,
    pub uncompressed_size: u64,
}

/// A single logical entry of an archive.
pub trait EntrySource: Send + Sync {
    /// Returns the entry's name as provided, before any normalisation.
    fn name(&self) -> &str;

    /// Returns the entry's kind.
    fn kind(&self) -> EntryKind {
        EntryKind::File
    }

    /// Returns the entry's last modification date & time.
    fn modified_at(&self) -> DateTime<Utc>;

    /// Returns the encoding the entry's name is declared in.
    fn encoding(&self) -> StringEncoding {
        StringEncoding::Utf8
    }

    /// Returns a description of already-compressed data, if this source produces any.
    fn precompressed(&self) -> Option<Precompressed> {
        None
    }

    /// Opens the entry's data.
    ///
    /// Directories return [`EntryData::NoData`]. Any other source must return a reader, or fail with
    /// [`crate::error::ZipError::SourceOpenFailure`] if it cannot.
    fn open_data(&self) -> Result<EntryData>;
}

impl fmt::Debug for dyn EntrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntrySource").field("name", &self.name()).field("kind", &self.kind()).finish()
    }
}
