// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("value {value:#x} does not fit within a {width}-bit field")]
    FieldOverflow { value: u64, width: u8 },

    #[error("unable to open the data of entry '{name}': {source}")]
    SourceOpenFailure {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to read the data of entry '{name}': {source}")]
    SourceReadFailure {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("entry '{0}' is not a directory but provided no data")]
    MissingEntryData(String),
    #[error("entry name '{0}' is empty once leading slashes are stripped")]
    EmptyEntryName(String),

    #[error("archive streams cannot be seeked")]
    UnsupportedSeek,
    #[error("archive streams cannot be written to")]
    UnsupportedWrite,
    #[error("archive streams can only be rewound before the first read")]
    UnsupportedRewind,

    #[error("an upstream reader returned an error: {0}")]
    UpstreamReadError(#[from] std::io::Error),
}

impl From<ZipError> for std::io::Error {
    fn from(err: ZipError) -> Self {
        match err {
            ZipError::UpstreamReadError(inner) => inner,
            ZipError::UnsupportedSeek | ZipError::UnsupportedWrite | ZipError::UnsupportedRewind => {
                std::io::Error::new(std::io::ErrorKind::Unsupported, err)
            }
            other => std::io::Error::other(other),
        }
    }
}
