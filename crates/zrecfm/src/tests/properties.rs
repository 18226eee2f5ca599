use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{DescriptorView, SegmentationCode, bdw, rdw};

/// Property: every length the RDW admits survives an encode/decode
/// round-trip. The range is small enough to sweep exhaustively.
#[test]
fn rdw_length_roundtrip_exhaustive() {
    let mut bytes = [0u8; 4];
    let mut view = DescriptorView::bound(&mut bytes, 0).unwrap();
    for length in rdw::MIN_SEGMENT_LENGTH..=rdw::MAX_SEGMENT_LENGTH {
        rdw::encode_length(&mut view, length).unwrap();
        assert_eq!(rdw::decode_length(&view).unwrap(), length);
    }
}

#[test]
fn bdw_nonextended_length_roundtrip_exhaustive() {
    let mut bytes = [0u8; 4];
    let mut view = DescriptorView::bound(&mut bytes, 0).unwrap();
    for length in bdw::MIN_BLOCK_LENGTH..=bdw::MAX_NONEXTENDED_LENGTH {
        bdw::encode_length(&mut view, length, false).unwrap();
        assert!(!bdw::decode_extension_flag(&view).unwrap());
        assert_eq!(bdw::decode_length(&view).unwrap(), length);
    }
}

#[test]
fn segmentation_code_roundtrip_all_variants() {
    let mut bytes = [0u8; 4];
    let mut view = DescriptorView::bound(&mut bytes, 0).unwrap();
    for code in [
        SegmentationCode::CompleteRecord,
        SegmentationCode::FirstSegment,
        SegmentationCode::LastSegment,
        SegmentationCode::OtherSegment,
    ] {
        rdw::encode_segmentation_code(&mut view, code).unwrap();
        assert_eq!(rdw::decode_segmentation_code(&view).unwrap(), code);
        assert_eq!(SegmentationCode::from_byte(code.as_byte()).unwrap(), code);
    }
}

/// Property: an arbitrary in-range extended length survives a BDW
/// round-trip with the flag intact.
#[test]
fn bdw_extended_roundtrip_quickcheck() {
    fn prop(raw: u32) -> bool {
        let length = (raw & 0x7FFF_FFFF).max(bdw::MIN_BLOCK_LENGTH);
        let mut bytes = [0u8; 4];
        let mut view = DescriptorView::bound(&mut bytes, 0).unwrap();
        bdw::encode_length(&mut view, length, true).unwrap();
        bdw::decode_extension_flag(&view).unwrap()
            && bdw::decode_length(&view).unwrap() == length
    }

    let tests = if is_ci::cached() { 100_000 } else { 10_000 };

    QuickCheck::new().tests(tests).quickcheck(prop as fn(u32) -> bool);
}

/// Property: a byte maps to a segmentation code exactly when it is one of
/// the four legal values, and mapping back returns the same byte.
#[quickcheck]
fn segmentation_code_byte_mapping_is_partial_inverse(byte: u8) -> bool {
    match SegmentationCode::from_byte(byte) {
        Ok(code) => byte <= 0x03 && code.as_byte() == byte,
        Err(_) => byte > 0x03,
    }
}

/// Property: an arbitrary offset/slack pair binds exactly when four bytes
/// fit, regardless of what surrounds the window.
#[quickcheck]
fn view_binds_iff_four_bytes_fit(offset: u8, slack: u8) -> bool {
    let offset = usize::from(offset);
    let len = usize::from(slack);
    let mut buffer = vec![0u8; len];
    let bound = DescriptorView::bound(&mut buffer, offset).is_ok();
    bound == (offset + 4 <= len)
}
