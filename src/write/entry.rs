// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::Read;

use crc32fast::Hasher;

use crate::entry::{EntryData, EntryKind, EntrySource, Precompressed};
use crate::error::{Result, ZipError};
use crate::spec::compression::Compression;
use crate::spec::consts::{DIRECTORY_ATTRIBUTE, FILE_ATTRIBUTE, NON_ZIP64_MAX_SIZE, VERSION};
use crate::spec::header::{DataDescriptor, GeneralPurposeFlag, LocalFileHeader, Zip64ExtendedInformationExtraField};
use crate::spec::pack::dos_timestamp;
use crate::write::CentralDirectoryEntry;

/// Normalises an entry name as it will appear within the archive.
///
/// Directories always end with a slash and leading slashes are stripped from every name (Windows' built-in archive
/// viewer refuses absolute names). Names left empty by this, such as a lone `/`, are rejected.
pub(crate) fn normalize_name(name: &str, kind: EntryKind) -> Result<String> {
    let trimmed = name.trim_start_matches('/');

    match kind {
        _ if trimmed.is_empty() => Err(ZipError::EmptyEntryName(name.to_owned())),
        EntryKind::Directory if !trimmed.ends_with('/') => Ok(format!("{trimmed}/")),
        _ => Ok(trimmed.to_owned()),
    }
}

/// The state of the entry currently being emitted.
///
/// Lives from its local file header until its data descriptor, and is dropped (along with any open reader) as soon
/// as the entry completes or the pass is abandoned.
pub(crate) struct EntryState {
    pub(crate) index: usize,
    reader: Option<Box<dyn Read + Send>>,
    hasher: Hasher,
    compressed_size: u64,
    uncompressed_size: u64,
    pending: PendingRecord,
}

/// The central directory fields known once the local file header has been emitted.
struct PendingRecord {
    name: String,
    compression: Compression,
    flags: GeneralPurposeFlag,
    mod_time: u32,
    external_attributes: u32,
    precompressed: Option<Precompressed>,
    lh_offset: u64,
    record_length: u64,
}

impl EntryState {
    /// Opens an entry's data and builds its local file header.
    ///
    /// The header, filename and ZIP64 placeholder are returned as a single chunk. Nothing is returned if the source
    /// can't be opened, so a failed entry never leaves a dangling header behind.
    #[tracing::instrument(skip(source), fields(name = source.name()))]
    pub(crate) fn begin(index: usize, source: &dyn EntrySource, lh_offset: u64) -> Result<(Self, Vec<u8>)> {
        let kind = source.kind();
        let name = normalize_name(source.name(), kind)?;

        let reader = match (kind, source.open_data()) {
            (EntryKind::File, Ok(EntryData::Data(reader))) => Some(reader),
            (EntryKind::File, Ok(EntryData::NoData)) => return Err(ZipError::MissingEntryData(name)),
            (EntryKind::File, Err(err)) => return Err(err),
            (EntryKind::Directory, Ok(EntryData::Data(_))) => {
                tracing::warn!("ignoring data provided by a directory entry");
                None
            }
            (EntryKind::Directory, Ok(EntryData::NoData)) => None,
            (EntryKind::Directory, Err(err)) => {
                tracing::debug!(%err, "directory entry failed to open, treating it as having no data");
                None
            }
        };

        let (precompressed, external_attributes) = match kind {
            EntryKind::File => (source.precompressed(), FILE_ATTRIBUTE),
            EntryKind::Directory => (None, DIRECTORY_ATTRIBUTE),
        };
        let compression = precompressed.map(|precompressed| precompressed.compression).unwrap_or_default();
        let flags = GeneralPurposeFlag { data_descriptor: true, filename_unicode: source.encoding().is_utf8() };
        let mod_time = dos_timestamp(&source.modified_at());
        let extra_field = Zip64ExtendedInformationExtraField::LocalPlaceholder.as_bytes()?;

        let lfh = LocalFileHeader {
            version: VERSION,
            flags: flags.as_u16(),
            compression: compression.into(),
            mod_time,
            // Unknown until the data has been streamed, so deferred to the data descriptor.
            crc: 0,
            compressed_size: NON_ZIP64_MAX_SIZE,
            uncompressed_size: NON_ZIP64_MAX_SIZE,
            file_name_length: name.len() as u64,
            extra_field_length: extra_field.len() as u64,
        };

        let mut header = lfh.as_bytes()?;
        header.extend_from_slice(name.as_bytes());
        header.extend_from_slice(&extra_field);

        tracing::debug!(%name, lh_offset, ?compression, "started entry");

        let pending = PendingRecord {
            name,
            compression,
            flags,
            mod_time,
            external_attributes,
            precompressed,
            lh_offset,
            record_length: header.len() as u64,
        };
        let state = EntryState {
            index,
            reader,
            hasher: Hasher::new(),
            compressed_size: 0,
            uncompressed_size: 0,
            pending,
        };

        Ok((state, header))
    }

    /// Pulls the next block of at most `block_size` bytes from the entry's data.
    ///
    /// Returns `None` once the data is exhausted, at which point the reader is released.
    pub(crate) fn next_block(&mut self, block_size: usize) -> Result<Option<Vec<u8>>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        let mut block = Vec::new();
        let read = reader
            .by_ref()
            .take(block_size as u64)
            .read_to_end(&mut block)
            .map_err(|source| ZipError::SourceReadFailure { name: self.pending.name.clone(), source })?;

        if read == 0 {
            self.reader = None;
            return Ok(None);
        }

        self.hasher.update(&block);
        self.compressed_size += read as u64;
        self.uncompressed_size += read as u64;
        tracing::trace!(read, "streamed block");

        Ok(Some(block))
    }

    /// Consumes this state and builds the entry's data descriptor.
    ///
    /// Also returns the entry's central directory record and the total length of everything emitted for the entry.
    pub(crate) fn finish(self) -> Result<(CentralDirectoryEntry, Vec<u8>, u64)> {
        let (crc, uncompressed_size) = match self.pending.precompressed {
            Some(precompressed) => (precompressed.crc32, precompressed.uncompressed_size),
            None => (self.hasher.finalize(), self.uncompressed_size),
        };

        let descriptor = DataDescriptor { crc, compressed_size: self.compressed_size, uncompressed_size }.as_bytes()?;
        let record_length = self.pending.record_length + self.compressed_size + descriptor.len() as u64;

        tracing::debug!(
            name = %self.pending.name,
            crc,
            compressed_size = self.compressed_size,
            uncompressed_size,
            "finished entry"
        );

        let entry = CentralDirectoryEntry {
            name: self.pending.name,
            compression: self.pending.compression,
            flags: self.pending.flags,
            mod_time: self.pending.mod_time,
            crc,
            compressed_size: self.compressed_size,
            uncompressed_size,
            lh_offset: self.pending.lh_offset,
            external_attributes: self.pending.external_attributes,
        };

        Ok((entry, descriptor, record_length))
    }
}
