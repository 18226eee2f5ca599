use rstest::rstest;

use crate::{DescriptorView, DescriptorWordError, SegmentationCode, rdw};

fn view_over(bytes: &mut [u8; 4]) -> DescriptorView<'_> {
    DescriptorView::bound(bytes, 0).unwrap()
}

#[test]
fn decodes_length_255() {
    let mut bytes = [0x00, 0xFF, 0x00, 0x00];
    let view = view_over(&mut bytes);
    assert_eq!(rdw::decode_length(&view).unwrap(), 255);
}

#[test]
fn decodes_maximum_length() {
    let mut bytes = [0x7F, 0xF8, 0x00, 0x00];
    let view = view_over(&mut bytes);
    assert_eq!(rdw::decode_length(&view).unwrap(), 32_760);
}

#[rstest]
#[case::all_ones([0xFF, 0xFF], 65_535)]
#[case::one_past_max([0x7F, 0xF9], 32_761)]
#[case::zero([0x00, 0x00], 0)]
#[case::three([0x00, 0x03], 3)]
fn rejects_length_outside_range(#[case] raw: [u8; 2], #[case] decoded: u32) {
    let mut bytes = [raw[0], raw[1], 0x00, 0x00];
    let view = view_over(&mut bytes);
    assert_eq!(
        rdw::decode_length(&view),
        Err(DescriptorWordError::LengthOutOfRange {
            length: decoded,
            min: 4,
            max: 32_760,
        })
    );
}

#[rstest]
#[case::min(4)]
#[case::small(255)]
#[case::max(32_760)]
fn encodes_length_in_range(#[case] length: u16) {
    let mut bytes = [0u8; 4];
    let mut view = view_over(&mut bytes);
    rdw::encode_length(&mut view, length).unwrap();
    assert_eq!(rdw::decode_length(&view).unwrap(), length);
}

#[test]
fn encoded_length_255_has_the_expected_wire_form() {
    let mut bytes = [0u8; 4];
    let mut view = view_over(&mut bytes);
    rdw::encode_length(&mut view, 255).unwrap();
    assert_eq!(bytes, [0x00, 0xFF, 0x00, 0x00]);
}

#[rstest]
#[case::below_min(3)]
#[case::zero(0)]
#[case::above_max(32_761)]
fn refuses_to_encode_length_outside_range(#[case] length: u16) {
    let mut bytes = [0u8; 4];
    let mut view = view_over(&mut bytes);
    let err = rdw::encode_length(&mut view, length).unwrap_err();
    assert!(matches!(err, DescriptorWordError::LengthOutOfRange { .. }));
    // A refused encode must not have touched the buffer.
    assert_eq!(bytes, [0u8; 4]);
}

#[rstest]
#[case(0x00, SegmentationCode::CompleteRecord)]
#[case(0x01, SegmentationCode::FirstSegment)]
#[case(0x02, SegmentationCode::LastSegment)]
#[case(0x03, SegmentationCode::OtherSegment)]
fn decodes_each_segmentation_code(#[case] raw: u8, #[case] expected: SegmentationCode) {
    let mut bytes = [0x00, 0xFF, raw, 0x00];
    let view = view_over(&mut bytes);
    assert_eq!(rdw::decode_segmentation_code(&view).unwrap(), expected);
}

#[test]
fn rejects_segmentation_code_0x04() {
    let mut bytes = [0x00, 0xFF, 0x04, 0x00];
    let view = view_over(&mut bytes);
    assert_eq!(
        rdw::decode_segmentation_code(&view),
        Err(DescriptorWordError::InvalidCode { code: 0x04 })
    );
}

#[test]
fn invalid_code_error_names_byte_and_legal_values() {
    let err = SegmentationCode::from_byte(0xC4).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("0xc4"), "message was: {text}");
    assert!(text.contains("[0x00, 0x01, 0x02, 0x03]"), "message was: {text}");
}

#[test]
fn encodes_segmentation_code_into_byte_2() {
    let mut bytes = [0u8; 4];
    let mut view = view_over(&mut bytes);
    rdw::encode_segmentation_code(&mut view, SegmentationCode::OtherSegment).unwrap();
    assert_eq!(bytes, [0x00, 0x00, 0x03, 0x00]);
}

#[test]
fn reserved_byte_zero_is_valid() {
    let mut bytes = [0x00, 0xFF, 0x00, 0x00];
    let view = view_over(&mut bytes);
    assert!(rdw::is_reserved_byte_valid(&view).unwrap());
}

#[rstest]
#[case(0x01)]
#[case(0x80)]
#[case(0xFF)]
fn nonzero_reserved_byte_is_flagged_not_failed(#[case] reserved: u8) {
    let mut bytes = [0x00, 0xFF, 0x00, reserved];
    let view = view_over(&mut bytes);
    assert!(!rdw::is_reserved_byte_valid(&view).unwrap());
}

#[test]
fn write_reserved_zero_clears_byte_3() {
    let mut bytes = [0x00, 0xFF, 0x00, 0x5A];
    let mut view = view_over(&mut bytes);
    rdw::write_reserved_zero(&mut view).unwrap();
    assert!(rdw::is_reserved_byte_valid(&view).unwrap());
    assert_eq!(bytes[3], 0x00);
}

#[test]
fn codec_fails_cleanly_on_an_unbound_view() {
    let view = DescriptorView::new();
    assert_eq!(
        rdw::decode_length(&view),
        Err(DescriptorWordError::UnboundBuffer)
    );
    assert_eq!(
        rdw::decode_segmentation_code(&view),
        Err(DescriptorWordError::UnboundBuffer)
    );
    assert_eq!(
        rdw::is_reserved_byte_valid(&view),
        Err(DescriptorWordError::UnboundBuffer)
    );
}
