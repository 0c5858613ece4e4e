// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::fmt;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};

use crate::entry::{EntryData, EntryKind, EntrySource};
use crate::error::{Result, ZipError};
use crate::string::StringEncoding;

/// An entry whose data is held in memory.
#[derive(Debug, Clone)]
pub struct StringContent {
    name: String,
    data: Arc<[u8]>,
    modified_at: DateTime<Utc>,
    encoding: StringEncoding,
}

impl StringContent {
    pub fn new(name: impl Into<String>, data: impl AsRef<[u8]>) -> Self {
        Self {
            name: name.into(),
            data: Arc::from(data.as_ref()),
            modified_at: Utc::now(),
            encoding: StringEncoding::Utf8,
        }
    }

    pub fn with_modified_at(mut self, modified_at: DateTime<Utc>) -> Self {
        self.modified_at = modified_at;
        self
    }

    pub fn with_encoding(mut self, encoding: StringEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl EntrySource for StringContent {
    fn name(&self) -> &str {
        &self.name
    }

    fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    fn encoding(&self) -> StringEncoding {
        self.encoding
    }

    fn open_data(&self) -> Result<EntryData> {
        Ok(EntryData::from_reader(Cursor::new(self.data.clone())))
    }
}

/// An entry backed by a file on disk.
///
/// The file is only opened once the encoder reaches this entry, and is closed as soon as its data is exhausted.
#[derive(Debug, Clone)]
pub struct FileContent {
    name: String,
    path: PathBuf,
    modified_at: Option<DateTime<Utc>>,
    encoding: StringEncoding,
}

impl FileContent {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self { name: name.into(), path: path.into(), modified_at: None, encoding: StringEncoding::Utf8 }
    }

    /// Overrides the modification date & time which would otherwise be read from the file's metadata.
    pub fn with_modified_at(mut self, modified_at: DateTime<Utc>) -> Self {
        self.modified_at = Some(modified_at);
        self
    }

    pub fn with_encoding(mut self, encoding: StringEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl EntrySource for FileContent {
    fn name(&self) -> &str {
        &self.name
    }

    fn modified_at(&self) -> DateTime<Utc> {
        if let Some(modified_at) = self.modified_at {
            return modified_at;
        }

        match std::fs::metadata(&self.path).and_then(|metadata| metadata.modified()) {
            Ok(modified) => modified.into(),
            Err(err) => {
                tracing::debug!(path = %self.path.display(), %err, "unable to read modification time");
                Utc::now()
            }
        }
    }

    fn encoding(&self) -> StringEncoding {
        self.encoding
    }

    fn open_data(&self) -> Result<EntryData> {
        let file = File::open(&self.path)
            .map_err(|source| ZipError::SourceOpenFailure { name: self.name.clone(), source })?;

        Ok(EntryData::from_reader(file))
    }
}

/// An entry whose data is produced by a callback once the encoder reaches it.
pub struct CallbackContent {
    name: String,
    callback: Box<dyn Fn() -> Vec<u8> + Send + Sync>,
    modified_at: DateTime<Utc>,
    encoding: StringEncoding,
}

impl CallbackContent {
    pub fn new<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: Fn() -> Vec<u8> + Send + Sync + 'static,
    {
        Self { name: name.into(), callback: Box::new(callback), modified_at: Utc::now(), encoding: StringEncoding::Utf8 }
    }

    pub fn with_modified_at(mut self, modified_at: DateTime<Utc>) -> Self {
        self.modified_at = modified_at;
        self
    }

    pub fn with_encoding(mut self, encoding: StringEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl fmt::Debug for CallbackContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackContent")
            .field("name", &self.name)
            .field("modified_at", &self.modified_at)
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

impl EntrySource for CallbackContent {
    fn name(&self) -> &str {
        &self.name
    }

    fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    fn encoding(&self) -> StringEncoding {
        self.encoding
    }

    fn open_data(&self) -> Result<EntryData> {
        Ok(EntryData::from_reader(Cursor::new((self.callback)())))
    }
}

/// An entry wrapping an already-open reader.
///
/// A reader can only be consumed once, so an archive holding this source can only be encoded once; any further
/// attempt fails with [`ZipError::SourceOpenFailure`].
pub struct ReaderContent {
    name: String,
    reader: Mutex<Option<Box<dyn Read + Send>>>,
    modified_at: DateTime<Utc>,
    encoding: StringEncoding,
}

impl ReaderContent {
    pub fn new(name: impl Into<String>, reader: impl Read + Send + 'static) -> Self {
        Self {
            name: name.into(),
            reader: Mutex::new(Some(Box::new(reader))),
            modified_at: Utc::now(),
            encoding: StringEncoding::Utf8,
        }
    }

    pub fn with_modified_at(mut self, modified_at: DateTime<Utc>) -> Self {
        self.modified_at = modified_at;
        self
    }

    pub fn with_encoding(mut self, encoding: StringEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl fmt::Debug for ReaderContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderContent")
            .field("name", &self.name)
            .field("modified_at", &self.modified_at)
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

impl EntrySource for ReaderContent {
    fn name(&self) -> &str {
        &self.name
    }

    fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    fn encoding(&self) -> StringEncoding {
        self.encoding
    }

    fn open_data(&self) -> Result<EntryData> {
        let reader = self.reader.lock().unwrap_or_else(PoisonError::into_inner).take();

        match reader {
            Some(reader) => Ok(EntryData::Data(reader)),
            None => Err(ZipError::SourceOpenFailure {
                name: self.name.clone(),
                source: std::io::Error::other("reader has already been consumed"),
            }),
        }
    }
}

/// A directory entry without any data.
#[derive(Debug, Clone)]
pub struct EmptyDirectory {
    name: String,
    modified_at: DateTime<Utc>,
}

impl EmptyDirectory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), modified_at: Utc::now() }
    }

    pub fn with_modified_at(mut self, modified_at: DateTime<Utc>) -> Self {
        self.modified_at = modified_at;
        self
    }
}

impl EntrySource for EmptyDirectory {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> EntryKind {
        EntryKind::Directory
    }

    fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    fn encoding(&self) -> StringEncoding {
        StringEncoding::Ascii
    }

    fn open_data(&self) -> Result<EntryData> {
        Ok(EntryData::NoData)
    }
}
