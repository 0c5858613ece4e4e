// Copyright (c) 2021-2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports encoding ZIP archives as a pull-based sequence of chunks.
//!
//! The encoder never seeks and never holds more than a single block of entry data in memory. Every entry is written
//! with a data descriptor, so its CRC and lengths are only emitted once its data has been streamed.
//!
//! # Example
//! ```no_run
//! # use zipstream::{Archive, StringContent, ZipEncoder};
//! # use zipstream::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let archive = Archive::new().with_content(StringContent::new("foo.txt", "This is an example file."));
//! let mut output = Vec::new();
//!
//! for chunk in ZipEncoder::new(archive) {
//!     output.extend_from_slice(&chunk?);
//! }
//! #   Ok(())
//! # }
//! ```
//!
//! The [`Stream`] implementation pulls entry data synchronously within `poll_next()`, so file or network backed
//! sources will block the polling task. Drive such archives from a blocking context (such as
//! `tokio::task::spawn_blocking`) when running within an async runtime.

pub(crate) mod entry;

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_lite::Stream;

use crate::archive::Archive;
use crate::error::Result;
use crate::spec::compression::Compression;
use crate::spec::consts::{DEFAULT_BLOCK_SIZE, NON_ZIP64_MAX_NUM_FILES, NON_ZIP64_MAX_SIZE, VERSION, ZIP64_EOCDR_RECORD_SIZE};
use crate::spec::header::{
    CentralDirectoryRecord, EndOfCentralDirectoryRecord, GeneralPurposeFlag, Zip64EndOfCentralDirectoryLocator,
    Zip64EndOfCentralDirectoryRecord, Zip64ExtendedInformationExtraField,
};
use entry::EntryState;

/// Everything the central directory needs to know about an entry which has been fully emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CentralDirectoryEntry {
    pub(crate) name: String,
    pub(crate) compression: Compression,
    pub(crate) flags: GeneralPurposeFlag,
    pub(crate) mod_time: u32,
    pub(crate) crc: u32,
    pub(crate) compressed_size: u64,
    pub(crate) uncompressed_size: u64,
    pub(crate) lh_offset: u64,
    pub(crate) external_attributes: u32,
}

impl CentralDirectoryEntry {
    /// Builds this entry's central directory record, followed by its name and ZIP64 extra field.
    ///
    /// The 32-bit sizes and offset are always saturated, with their true values carried by the extra field.
    pub(crate) fn as_bytes(&self) -> Result<Vec<u8>> {
        let extra_field = Zip64ExtendedInformationExtraField::Central {
            uncompressed_size: self.uncompressed_size,
            compressed_size: self.compressed_size,
            relative_header_offset: self.lh_offset,
        }
        .as_bytes()?;

        let header = CentralDirectoryRecord {
            v_made_by: VERSION,
            v_needed: VERSION,
            flags: self.flags.as_u16(),
            compression: self.compression.into(),
            mod_time: self.mod_time,
            crc: self.crc,
            compressed_size: NON_ZIP64_MAX_SIZE,
            uncompressed_size: NON_ZIP64_MAX_SIZE,
            file_name_length: self.name.len() as u64,
            extra_field_length: extra_field.len() as u64,
            file_comment_length: 0,
            disk_start: 0,
            inter_attr: 0,
            exter_attr: self.external_attributes,
            lh_offset: NON_ZIP64_MAX_SIZE,
        };

        let mut bytes = header.as_bytes()?;
        bytes.extend_from_slice(self.name.as_bytes());
        bytes.extend_from_slice(&extra_field);
        Ok(bytes)
    }
}

enum State {
    Entries { next: usize },
    Streaming(Box<EntryState>),
    CentralDirectory { next: usize },
    Zip64EndOfCentralDirectory,
    Zip64Locator,
    EndOfCentralDirectory,
    Done,
}

/// A forward-only ZIP encoder over an [`Archive`].
///
/// Each pull yields the next non-empty chunk of the archive, in order. Concatenating every chunk of a pass produces a
/// complete ZIP file. Once a pass has finished (or failed), the encoder yields nothing further until [`reset()`] is
/// called.
///
/// [`reset()`]: ZipEncoder::reset
pub struct ZipEncoder {
    archive: Archive,
    block_size: usize,
    state: State,
    offset: u64,
    cd_offset: u64,
    cd_length: u64,
    cd_entries: Vec<CentralDirectoryEntry>,
}

impl ZipEncoder {
    /// Constructs a new encoder over an archive snapshot.
    pub fn new(archive: Archive) -> Self {
        Self {
            archive,
            block_size: DEFAULT_BLOCK_SIZE,
            state: State::Entries { next: 0 },
            offset: 0,
            cd_offset: 0,
            cd_length: 0,
            cd_entries: Vec::new(),
        }
    }

    /// Sets the maximum number of bytes pulled from an entry's data at once.
    ///
    /// A block size of zero is treated as one.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size.max(1);
        self
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    /// Returns whether the current pass has completed or failed.
    pub fn is_done(&self) -> bool {
        matches!(self.state, State::Done)
    }

    /// Abandons any pass in progress and re-arms the encoder to emit the archive again from its first byte.
    pub fn reset(&mut self) {
        self.clear();
        self.state = State::Entries { next: 0 };
    }

    fn clear(&mut self) {
        self.offset = 0;
        self.cd_offset = 0;
        self.cd_length = 0;
        self.cd_entries.clear();
    }

    fn requires_zip64(&self) -> bool {
        requires_zip64(self.cd_entries.len() as u64, self.cd_offset, self.cd_length)
    }

    fn step(&mut self) -> Result<Option<Vec<u8>>> {
        loop {
            // Any error below propagates with the encoder left in `State::Done`.
            match std::mem::replace(&mut self.state, State::Done) {
                State::Entries { next } => {
                    let Some(source) = self.archive.contents().get(next).cloned() else {
                        self.cd_offset = self.offset;
                        self.state = State::CentralDirectory { next: 0 };
                        continue;
                    };

                    let (entry, header) = EntryState::begin(next, source.as_ref(), self.offset)?;
                    self.state = State::Streaming(Box::new(entry));
                    return Ok(Some(header));
                }
                State::Streaming(mut entry) => {
                    if let Some(block) = entry.next_block(self.block_size)? {
                        self.state = State::Streaming(entry);
                        return Ok(Some(block));
                    }

                    let next = entry.index + 1;
                    let (cd_entry, descriptor, record_length) = entry.finish()?;

                    self.offset += record_length;
                    self.cd_entries.push(cd_entry);
                    self.state = State::Entries { next };
                    return Ok(Some(descriptor));
                }
                State::CentralDirectory { next } => {
                    let Some(cd_entry) = self.cd_entries.get(next) else {
                        self.state = match self.requires_zip64() {
                            true => State::Zip64EndOfCentralDirectory,
                            false => State::EndOfCentralDirectory,
                        };
                        continue;
                    };

                    let record = cd_entry.as_bytes()?;
                    self.cd_length += record.len() as u64;
                    self.state = State::CentralDirectory { next: next + 1 };
                    return Ok(Some(record));
                }
                State::Zip64EndOfCentralDirectory => {
                    tracing::debug!(
                        num_entries = self.cd_entries.len(),
                        cd_offset = self.cd_offset,
                        cd_length = self.cd_length,
                        "archive requires ZIP64 end of central directory records"
                    );

                    let num_entries = self.cd_entries.len() as u64;
                    let eocdr = Zip64EndOfCentralDirectoryRecord {
                        size_of_record: ZIP64_EOCDR_RECORD_SIZE,
                        version_made_by: VERSION,
                        version_needed: VERSION,
                        number_of_this_disk: 0,
                        disk_with_start_of_cd: 0,
                        total_entries_in_cd_on_this_disk: num_entries,
                        total_entries_in_cd: num_entries,
                        size_of_cd: self.cd_length,
                        offset_start_of_cd: self.cd_offset,
                    };

                    self.state = State::Zip64Locator;
                    return eocdr.as_bytes().map(Some);
                }
                State::Zip64Locator => {
                    let locator = Zip64EndOfCentralDirectoryLocator {
                        disk_with_start_eocdr: 0,
                        relative_offset_eocdr: self.cd_offset + self.cd_length,
                        total_disks: 1,
                    };

                    self.state = State::EndOfCentralDirectory;
                    return locator.as_bytes().map(Some);
                }
                State::EndOfCentralDirectory => {
                    let num_entries = saturate_u16(self.cd_entries.len() as u64);
                    let comment = self.archive.comment();

                    let eocdr = EndOfCentralDirectoryRecord {
                        disk_num: 0,
                        start_cent_dir_disk: 0,
                        num_of_entries_disk: num_entries,
                        num_of_entries: num_entries,
                        size_cent_dir: saturate_u32(self.cd_length),
                        cent_dir_offset: saturate_u32(self.cd_offset),
                        file_comm_length: comment.len() as u64,
                    };

                    let mut bytes = eocdr.as_bytes()?;
                    bytes.extend_from_slice(comment.as_bytes());

                    tracing::debug!(num_entries = self.cd_entries.len(), "finished archive");
                    self.clear();
                    return Ok(Some(bytes));
                }
                State::Done => return Ok(None),
            }
        }
    }
}

impl std::fmt::Debug for ZipEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipEncoder")
            .field("archive", &self.archive)
            .field("block_size", &self.block_size)
            .field("offset", &self.offset)
            .field("is_done", &self.is_done())
            .finish_non_exhaustive()
    }
}

impl Iterator for ZipEncoder {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Ok(chunk) => chunk.map(Ok),
            Err(err) => {
                tracing::error!(%err, "failed to encode archive");
                self.clear();
                self.state = State::Done;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for ZipEncoder {}

impl Stream for ZipEncoder {
    type Item = Result<Vec<u8>>;

    fn poll_next(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.get_mut().next())
    }
}

/// Returns whether any of the classic end of central directory record's fields would saturate.
pub(crate) fn requires_zip64(num_entries: u64, cd_offset: u64, cd_length: u64) -> bool {
    saturate_u16(num_entries) == NON_ZIP64_MAX_NUM_FILES
        || saturate_u32(cd_length) == NON_ZIP64_MAX_SIZE
        || saturate_u32(cd_offset) == NON_ZIP64_MAX_SIZE
}

fn saturate_u16(value: u64) -> u16 {
    value.min(u64::from(NON_ZIP64_MAX_NUM_FILES)) as u16
}

fn saturate_u32(value: u64) -> u32 {
    value.min(u64::from(NON_ZIP64_MAX_SIZE)) as u32
}
