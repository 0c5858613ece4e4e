// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::Result;
use crate::spec::consts::{
    CDH_SIGNATURE, DATA_DESCRIPTOR_SIGNATURE, EOCDR_SIGNATURE, LFH_SIGNATURE, ZIP64_EOCDL_SIGNATURE,
    ZIP64_EOCDR_SIGNATURE, ZIP64_EXTRA_FIELD_ID,
};
use crate::spec::pack::{pack_fields, Field};
use crate::spec::packed;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#444
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GeneralPurposeFlag {
    pub data_descriptor: bool,
    pub filename_unicode: bool,
}

impl GeneralPurposeFlag {
    pub fn as_u16(&self) -> u16 {
        let data_descriptor: u16 = match self.data_descriptor {
            false => 0x0,
            true => 0x8,
        };
        let filename_unicode: u16 = match self.filename_unicode {
            false => 0x0,
            true => 0x800,
        };

        data_descriptor | filename_unicode
    }
}

packed! {
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#437
    LocalFileHeader, LFH_SIGNATURE, {
        version: u16 => U16,
        flags: u16 => U16,
        compression: u16 => U16,
        // last mod file time & date, packed together as a single MS-DOS timestamp
        mod_time: u32 => U32,
        crc: u32 => U32,
        compressed_size: u32 => U32,
        uncompressed_size: u32 => U32,
        file_name_length: u64 => U16,
        extra_field_length: u64 => U16,
    }
}

packed! {
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#439
    //
    // Always the ZIP64 form so that the record shape doesn't depend upon the entry's size.
    DataDescriptor, DATA_DESCRIPTOR_SIGNATURE, {
        crc: u32 => U32,
        compressed_size: u64 => U64,
        uncompressed_size: u64 => U64,
    }
}

packed! {
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4312
    CentralDirectoryRecord, CDH_SIGNATURE, {
        v_made_by: u16 => U16,
        v_needed: u16 => U16,
        flags: u16 => U16,
        compression: u16 => U16,
        mod_time: u32 => U32,
        crc: u32 => U32,
        compressed_size: u32 => U32,
        uncompressed_size: u32 => U32,
        file_name_length: u64 => U16,
        extra_field_length: u64 => U16,
        file_comment_length: u64 => U16,
        disk_start: u16 => U16,
        inter_attr: u16 => U16,
        exter_attr: u32 => U32,
        lh_offset: u32 => U32,
    }
}

packed! {
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4314
    Zip64EndOfCentralDirectoryRecord, ZIP64_EOCDR_SIGNATURE, {
        // size of zip64 end of central directory record, minus the leading 12 bytes
        size_of_record: u64 => U64,
        version_made_by: u16 => U16,
        version_needed: u16 => U16,
        number_of_this_disk: u32 => U32,
        disk_with_start_of_cd: u32 => U32,
        total_entries_in_cd_on_this_disk: u64 => U64,
        total_entries_in_cd: u64 => U64,
        size_of_cd: u64 => U64,
        offset_start_of_cd: u64 => U64,
    }
}

packed! {
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4315
    Zip64EndOfCentralDirectoryLocator, ZIP64_EOCDL_SIGNATURE, {
        disk_with_start_eocdr: u32 => U32,
        relative_offset_eocdr: u64 => U64,
        total_disks: u32 => U32,
    }
}

packed! {
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316
    EndOfCentralDirectoryRecord, EOCDR_SIGNATURE, {
        disk_num: u16 => U16,
        start_cent_dir_disk: u16 => U16,
        num_of_entries_disk: u16 => U16,
        num_of_entries: u16 => U16,
        size_cent_dir: u32 => U32,
        cent_dir_offset: u32 => U32,
        file_comm_length: u64 => U16,
    }
}

/// An extended information extra field for ZIP64.
/// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#453
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zip64ExtendedInformationExtraField {
    /// Reserves room in a local file header; the real values follow in the data descriptor.
    LocalPlaceholder,
    /// Carries the true 64-bit values a central directory record saturates.
    Central { uncompressed_size: u64, compressed_size: u64, relative_header_offset: u64 },
}

impl Zip64ExtendedInformationExtraField {
    pub fn as_bytes(&self) -> Result<Vec<u8>> {
        match *self {
            Self::LocalPlaceholder => pack_fields(&[
                Field::U16(ZIP64_EXTRA_FIELD_ID.into()),
                Field::U16(16),
                Field::U32(0),
                Field::U32(0),
                Field::U32(0),
                Field::U32(0),
            ]),
            Self::Central { uncompressed_size, compressed_size, relative_header_offset } => pack_fields(&[
                Field::U16(ZIP64_EXTRA_FIELD_ID.into()),
                Field::U16(24),
                Field::U64(uncompressed_size),
                Field::U64(compressed_size),
                Field::U64(relative_header_offset),
            ]),
        }
    }
}
