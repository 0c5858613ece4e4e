// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A set of [`tokio`]-specific type aliases and features.
//!
//! # Usage
//! [`ArchiveStream`] implements the `futures` flavour of `AsyncRead`. With the `tokio` feature enabled, it can be
//! wrapped via [`ArchiveStream::into_tokio()`] (or constructed directly via [`ArchiveStream::with_tokio()`]) so that
//! it implements [`tokio::io::AsyncRead`] instead.
//!
//! The returned type contains a wrapping compatibility type provided by [`tokio_util`], which cannot be named unless
//! you also pull in that dependency manually. The [`TokioArchiveStream`] alias exists so that it can be named without
//! doing so.
//!
//! Entry sources are still read synchronously whenever the stream is polled. Archives containing [`FileContent`] or
//! other I/O backed sources should be read from within `tokio::task::spawn_blocking` rather than directly on a
//! runtime worker.
//!
//! [`FileContent`]: crate::FileContent

use tokio_util::compat::{Compat, FuturesAsyncReadCompatExt};

use crate::archive::Archive;
use crate::stream::ArchiveStream;

/// A [`tokio`]-specific type alias for [`ArchiveStream`].
pub type TokioArchiveStream = Compat<ArchiveStream>;

impl ArchiveStream {
    /// Constructs a new stream over an archive which implements [`tokio::io::AsyncRead`].
    pub fn with_tokio(archive: Archive) -> TokioArchiveStream {
        Self::new(archive).into_tokio()
    }

    /// Wraps this stream so that it implements [`tokio::io::AsyncRead`].
    pub fn into_tokio(self) -> TokioArchiveStream {
        self.compat()
    }
}
