// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod compression;
pub mod consts;
pub mod date;
pub(crate) mod header;
pub mod pack;

/// Defines a fixed-layout record whose fields are packed in declaration order after its signature.
///
/// Each field declares the wire width it is packed into, which may be narrower than its Rust type; such values are
/// range-checked at packing time rather than truncated.
macro_rules! packed {
    ($(#[$meta:meta])* $name:ident, $signature:expr, { $($field:ident: $type:ty => $tag:ident),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name {
            $(pub $field: $type),*
        }

        impl $name {
            pub const SIGNATURE: u32 = $signature;

            /// Packs this record, prefixed by its signature, into its little-endian wire form.
            pub fn as_bytes(&self) -> $crate::error::Result<Vec<u8>> {
                $crate::spec::pack::pack_fields(&[
                    $crate::spec::pack::Field::U32(u64::from(Self::SIGNATURE)),
                    $($crate::spec::pack::Field::$tag(u64::from(self.$field))),*
                ])
            }
        }
    };
}

pub(crate) use packed;
