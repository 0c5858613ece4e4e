// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! # zipstream
//!
//! A ZIP archive generator which emits its output as a forward-only sequence of chunks, without ever holding the
//! archive in memory or requiring a seekable destination.
//!
//! ## Features
//! - Pull-based design; nothing is read from an entry's source until the consumer asks for more bytes.
//! - Entries from files, in-memory data, callbacks, arbitrary readers, and empty directories.
//! - Transparent ZIP64 support for archives with large entries, large offsets, or many entries.
//! - [`std::io::Read`] and `futures` `AsyncRead` implementations, plus `tokio` support behind the `tokio` feature.
//! - Aims for resonable [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT) compliance.
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! zipstream = { version = "0.1.0", features = ["tokio"] }
//! ```
//!
//! ### Feature Flags
//! - `tokio` - Enables support for the `tokio` implementation module.
//!
//! ## Example
//! ```no_run
//! # use zipstream::{Archive, ArchiveStream, FileContent, StringContent};
//! # use zipstream::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let archive = Archive::new()
//!     .with_content(StringContent::new("readme.txt", "Hello, world!"))
//!     .with_content(FileContent::new("data/report.csv", "/tmp/report.csv"))
//!     .with_comment("generated on the fly");
//!
//! let mut stream = ArchiveStream::new(archive);
//! let mut file = std::fs::File::create("out.zip")?;
//! std::io::copy(&mut stream, &mut file)?;
//! #   Ok(())
//! # }
//! ```

pub mod archive;
pub mod entry;
pub mod error;
pub mod spec;
pub mod stream;
pub mod write;

pub(crate) mod string;

#[cfg(feature = "tokio")]
pub mod tokio;

pub use crate::archive::Archive;
pub use crate::entry::{
    CallbackContent, EmptyDirectory, EntryData, EntryKind, EntrySource, FileContent, Precompressed, ReaderContent,
    StringContent,
};
pub use crate::spec::{compression::Compression, date::ZipDateTime};
pub use crate::stream::ArchiveStream;
pub use crate::string::StringEncoding;
pub use crate::write::ZipEncoder;

#[cfg(test)]
pub(crate) mod tests;
