// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub(crate) mod spec;

use chrono::{DateTime, TimeZone, Utc};

use crate::archive::Archive;
use crate::error::Result;
use crate::write::ZipEncoder;

/// Routes `tracing` events through `env_logger`, eg. `RUST_LOG=trace cargo test`.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A fixed modification time so that separate encodings of the same archive are byte-identical.
pub(crate) fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 9, 8, 7, 5, 4).unwrap()
}

/// Drains a fresh encoder over the archive into a single buffer.
pub(crate) fn encode(archive: Archive) -> Vec<u8> {
    ZipEncoder::new(archive).collect::<Result<Vec<_>>>().expect("failed to encode archive").concat()
}
