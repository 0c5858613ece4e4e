// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::ZipError;
use crate::spec::compression::Compression;
use crate::spec::consts::*;
use crate::spec::header::{
    CentralDirectoryRecord, DataDescriptor, EndOfCentralDirectoryRecord, GeneralPurposeFlag, LocalFileHeader,
    Zip64EndOfCentralDirectoryLocator, Zip64EndOfCentralDirectoryRecord, Zip64ExtendedInformationExtraField,
};
use crate::spec::pack::{pack_fields, split64, Field};
use crate::string::StringEncoding;

#[test]
fn fields_are_little_endian() {
    let packed = pack_fields(&[Field::U16(0x1234), Field::U32(0xDEADBEEF), Field::U64(0x1_0000_0002)]).unwrap();

    assert_eq!(packed, [0x34u8, 0x12, 0xEF, 0xBE, 0xAD, 0xDE, 0x02, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]);
}

#[test]
fn overflowing_fields_are_rejected() {
    let err = pack_fields(&[Field::U16(0x1_0000)]).unwrap_err();
    assert!(matches!(err, ZipError::FieldOverflow { value: 0x1_0000, width: 16 }));

    let err = pack_fields(&[Field::U32(0), Field::U32(0x1_0000_0000)]).unwrap_err();
    assert!(matches!(err, ZipError::FieldOverflow { value: 0x1_0000_0000, width: 32 }));

    assert!(pack_fields(&[Field::U16(0xFFFF), Field::U32(0xFFFF_FFFF), Field::U64(u64::MAX)]).is_ok());
}

#[test]
fn split64_words() {
    assert_eq!(split64(0), (0, 0));
    assert_eq!(split64(0xFFFF_FFFF), (0xFFFF_FFFF, 0));
    assert_eq!(split64(0x1_0000_0000), (0, 1));
    assert_eq!(split64(0x0123_4567_89AB_CDEF), (0x89AB_CDEF, 0x0123_4567));
}

#[test]
fn record_lengths() {
    let lfh = LocalFileHeader {
        version: VERSION,
        flags: 0,
        compression: 0,
        mod_time: 0,
        crc: 0,
        compressed_size: NON_ZIP64_MAX_SIZE,
        uncompressed_size: NON_ZIP64_MAX_SIZE,
        file_name_length: 0,
        extra_field_length: 0,
    };
    let descriptor = DataDescriptor { crc: 0, compressed_size: 0, uncompressed_size: 0 };
    let cdr = CentralDirectoryRecord {
        v_made_by: VERSION,
        v_needed: VERSION,
        flags: 0,
        compression: 0,
        mod_time: 0,
        crc: 0,
        compressed_size: 0,
        uncompressed_size: 0,
        file_name_length: 0,
        extra_field_length: 0,
        file_comment_length: 0,
        disk_start: 0,
        inter_attr: 0,
        exter_attr: 0,
        lh_offset: 0,
    };
    let zip64_eocdr = Zip64EndOfCentralDirectoryRecord {
        size_of_record: ZIP64_EOCDR_RECORD_SIZE,
        version_made_by: VERSION,
        version_needed: VERSION,
        number_of_this_disk: 0,
        disk_with_start_of_cd: 0,
        total_entries_in_cd_on_this_disk: 0,
        total_entries_in_cd: 0,
        size_of_cd: 0,
        offset_start_of_cd: 0,
    };
    let locator = Zip64EndOfCentralDirectoryLocator { disk_with_start_eocdr: 0, relative_offset_eocdr: 0, total_disks: 1 };
    let eocdr = EndOfCentralDirectoryRecord {
        disk_num: 0,
        start_cent_dir_disk: 0,
        num_of_entries_disk: 0,
        num_of_entries: 0,
        size_cent_dir: 0,
        cent_dir_offset: 0,
        file_comm_length: 0,
    };

    assert_eq!(LFH_LENGTH, lfh.as_bytes().unwrap().len());
    assert_eq!(DATA_DESCRIPTOR_LENGTH, descriptor.as_bytes().unwrap().len());
    assert_eq!(CDH_LENGTH, cdr.as_bytes().unwrap().len());
    assert_eq!(ZIP64_EOCDR_LENGTH, zip64_eocdr.as_bytes().unwrap().len());
    assert_eq!(ZIP64_EOCDL_LENGTH, locator.as_bytes().unwrap().len());
    assert_eq!(EOCDR_LENGTH, eocdr.as_bytes().unwrap().len());

    // The record size excludes the signature and the size field itself.
    assert_eq!(ZIP64_EOCDR_RECORD_SIZE as usize, ZIP64_EOCDR_LENGTH - 12);
}

#[test]
fn records_start_with_their_signature() {
    let eocdr = EndOfCentralDirectoryRecord {
        disk_num: 0,
        start_cent_dir_disk: 0,
        num_of_entries_disk: 0,
        num_of_entries: 0,
        size_cent_dir: 0,
        cent_dir_offset: 0,
        file_comm_length: 0,
    };
    let descriptor = DataDescriptor { crc: 0xAABBCCDD, compressed_size: 1, uncompressed_size: 0x1_0000_0000 };

    assert_eq!(eocdr.as_bytes().unwrap()[..4], EOCDR_SIGNATURE.to_le_bytes());
    assert_eq!(
        descriptor.as_bytes().unwrap(),
        [
            0x50u8, 0x4B, 0x07, 0x08, // signature
            0xDD, 0xCC, 0xBB, 0xAA, // crc
            0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // compressed size
            0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, // uncompressed size
        ]
    );
}

#[test]
fn oversized_comment_is_rejected() {
    let eocdr = EndOfCentralDirectoryRecord {
        disk_num: 0,
        start_cent_dir_disk: 0,
        num_of_entries_disk: 0,
        num_of_entries: 0,
        size_cent_dir: 0,
        cent_dir_offset: 0,
        file_comm_length: u64::from(u16::MAX) + 1,
    };

    assert!(matches!(eocdr.as_bytes(), Err(ZipError::FieldOverflow { width: 16, .. })));
}

#[test]
fn zip64_extra_fields() {
    let local = Zip64ExtendedInformationExtraField::LocalPlaceholder.as_bytes().unwrap();
    assert_eq!(ZIP64_LOCAL_EXTRA_FIELD_LENGTH, local.len());
    assert_eq!(local[..4], [0x01u8, 0x00, 0x10, 0x00]);
    assert!(local[4..].iter().all(|byte| *byte == 0));

    let central = Zip64ExtendedInformationExtraField::Central {
        uncompressed_size: 7,
        compressed_size: 5,
        relative_header_offset: 0x1_0000_0000,
    }
    .as_bytes()
    .unwrap();
    assert_eq!(ZIP64_CENTRAL_EXTRA_FIELD_LENGTH, central.len());
    assert_eq!(central[..4], [0x01u8, 0x00, 0x18, 0x00]);
    assert_eq!(central[4..12], 7u64.to_le_bytes());
    assert_eq!(central[12..20], 5u64.to_le_bytes());
    assert_eq!(central[20..28], 0x1_0000_0000u64.to_le_bytes());
}

#[test]
fn general_purpose_flags() {
    let flag = |data_descriptor, filename_unicode| GeneralPurposeFlag { data_descriptor, filename_unicode }.as_u16();

    assert_eq!(0x0000, flag(false, false));
    assert_eq!(0x0008, flag(true, false));
    assert_eq!(0x0800, flag(false, true));
    assert_eq!(0x0808, flag(true, true));
}

#[test]
fn compression_methods() {
    assert_eq!(0, u16::from(Compression::Stored));
    assert_eq!(8, u16::from(Compression::Deflate));
    assert_eq!(Compression::Stored, Compression::default());
}

#[test]
fn encoding_labels() {
    assert_eq!(StringEncoding::Utf8, StringEncoding::from_label("UTF-8"));
    assert_eq!(StringEncoding::Utf8, StringEncoding::from_label("utf8"));
    assert_eq!(StringEncoding::Ascii, StringEncoding::from_label("ASCII"));
    assert_eq!(StringEncoding::Ascii, StringEncoding::from_label("ISO-8859-1"));
    assert_eq!("UTF-8", StringEncoding::Utf8.to_string());
}
