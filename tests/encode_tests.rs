use ch423::encode;
use proptest::prelude::*;

#[test]
fn hex_digits_match_board_wiring() {
    let expected = [
        (0x0, 0x3f),
        (0x1, 0x06),
        (0x2, 0x5b),
        (0x3, 0x4f),
        (0x4, 0x66),
        (0x5, 0x6d),
        (0x6, 0x7d),
        (0x7, 0x07),
        (0x8, 0x7f),
        (0x9, 0x6f),
        (0xA, 0x77),
        (0xB, 0x7c),
        (0xC, 0x58),
        (0xD, 0x5e),
        (0xE, 0x79),
        (0xF, 0x71),
    ];
    for (value, pattern) in expected {
        assert_eq!(encode(value), pattern, "digit {:x}", value);
    }
}

#[test]
fn decimal_point_never_lit() {
    for value in 0..16 {
        assert_eq!(encode(value) & 0x80, 0);
    }
}

#[test]
#[should_panic]
fn out_of_range_digit_panics() {
    encode(std::hint::black_box(16));
}

proptest! {
    #[test]
    fn encode_is_pure(value in 0u8..16) {
        prop_assert_eq!(encode(value), encode(value));
        prop_assert_eq!(encode(value), ch423::HEX_TO_SEGMENTS[value as usize]);
    }
}
