// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Little-endian field packing used by every record this crate emits.

use chrono::{DateTime, Utc};

use crate::error::{Result, ZipError};
use crate::spec::date::ZipDateTime;

/// A single value tagged with the binary width it is packed into.
///
/// Values are carried as `u64` so that a value too wide for its declared field is reported rather than truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// A 16-bit unsigned little-endian field.
    U16(u64),
    /// A 32-bit unsigned little-endian field.
    U32(u64),
    /// A 64-bit unsigned value, packed as its low and then high 32-bit words.
    U64(u64),
}

impl Field {
    /// Returns the number of bytes this field occupies once packed.
    pub fn width(&self) -> usize {
        match self {
            Field::U16(_) => 2,
            Field::U32(_) => 4,
            Field::U64(_) => 8,
        }
    }
}

/// Packs an ordered list of fields into their concatenated little-endian encoding.
///
/// Fails with [`ZipError::FieldOverflow`] if any value cannot be represented in its declared width.
pub fn pack_fields(fields: &[Field]) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(fields.iter().map(Field::width).sum());

    for field in fields {
        match *field {
            Field::U16(value) => {
                let value: u16 = value.try_into().map_err(|_| ZipError::FieldOverflow { value, width: 16 })?;
                buffer.extend_from_slice(&value.to_le_bytes());
            }
            Field::U32(value) => {
                let value: u32 = value.try_into().map_err(|_| ZipError::FieldOverflow { value, width: 32 })?;
                buffer.extend_from_slice(&value.to_le_bytes());
            }
            Field::U64(value) => {
                let (low, high) = split64(value);
                buffer.extend_from_slice(&low.to_le_bytes());
                buffer.extend_from_slice(&high.to_le_bytes());
            }
        }
    }

    Ok(buffer)
}

/// Splits a 64-bit value into its `(low, high)` 32-bit words.
pub fn split64(value: u64) -> (u32, u32) {
    ((value & 0xFFFF_FFFF) as u32, (value >> 32) as u32)
}

/// Converts a date & time into the packed 32-bit MS-DOS representation.
///
/// Anything before 1980-01-01T00:00:00 is clamped to that instant.
pub fn dos_timestamp(dt: &DateTime<Utc>) -> u32 {
    ZipDateTime::from(dt).as_u32()
}
