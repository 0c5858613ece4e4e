// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// The version needed to extract (and the version made by) every record this crate emits: 4.5, ZIP64.
pub const VERSION: u16 = 45;

/// The maximum value of a 32-bit size or offset field before ZIP64 is required.
pub const NON_ZIP64_MAX_SIZE: u32 = 0xFFFFFFFF;
/// The maximum value of a 16-bit entry count field before ZIP64 is required.
pub const NON_ZIP64_MAX_NUM_FILES: u16 = 0xFFFF;

/// The block size used when pulling data from entry sources.
pub const DEFAULT_BLOCK_SIZE: usize = 1024 * 1024;

// Local file header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#437
pub const LFH_SIGNATURE: u32 = 0x04034b50;
pub const LFH_LENGTH: usize = 30;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#439
pub const DATA_DESCRIPTOR_SIGNATURE: u32 = 0x08074b50;
pub const DATA_DESCRIPTOR_LENGTH: usize = 24;

// Central directory header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4312
pub const CDH_SIGNATURE: u32 = 0x02014b50;
pub const CDH_LENGTH: usize = 46;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4314
pub const ZIP64_EOCDR_SIGNATURE: u32 = 0x06064b50;
pub const ZIP64_EOCDR_LENGTH: usize = 56;
/// The "size of zip64 end of central directory record" field, which excludes the leading 12 bytes.
pub const ZIP64_EOCDR_RECORD_SIZE: u64 = 44;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4315
pub const ZIP64_EOCDL_SIGNATURE: u32 = 0x07064b50;
pub const ZIP64_EOCDL_LENGTH: usize = 20;

// End of central directory record constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316
pub const EOCDR_SIGNATURE: u32 = 0x06054b50;
pub const EOCDR_LENGTH: usize = 22;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#453
pub const ZIP64_EXTRA_FIELD_ID: u16 = 0x0001;
/// The local header placeholder: header id, data size and four zeroed 32-bit slots.
pub const ZIP64_LOCAL_EXTRA_FIELD_LENGTH: usize = 20;
/// The central directory variant: header id, data size, uncompressed size, compressed size and offset.
pub const ZIP64_CENTRAL_EXTRA_FIELD_LENGTH: usize = 28;

// External file attributes (MS-DOS directory & archive bits).
pub const DIRECTORY_ATTRIBUTE: u32 = 0x10;
pub const FILE_ATTRIBUTE: u32 = 0x20;
