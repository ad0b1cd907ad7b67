use chartjs_rs::core::Color;
use proptest::prelude::*;

proptest! {
    #[test]
    fn wrong_length_strings_yield_default_color(input in "\\PC{0,12}") {
        prop_assume!(input.len() != 6);

        let color = Color::from_hex(&input);

        prop_assert!(!color.is_valid());
        prop_assert_eq!(color, Color::default());
    }

    #[test]
    fn six_digit_hex_parses_each_pair(red in any::<u8>(), green in any::<u8>(), blue in any::<u8>()) {
        let hex_code = format!("{red:02X}{green:02x}{blue:02X}");

        let color = Color::from_hex(&hex_code);

        prop_assert!(color.is_valid());
        prop_assert_eq!(color.red_channel(), red);
        prop_assert_eq!(color.green_channel(), green);
        prop_assert_eq!(color.blue_channel(), blue);
        prop_assert_eq!(color.alpha_channel(), 255);
    }

    #[test]
    fn standard_color_is_periodic(idx in 0usize..1_000_000) {
        let palette = Color::standard_palette();

        prop_assert_eq!(Color::standard(idx), palette[idx % 16]);
        prop_assert_eq!(Color::standard(idx), Color::standard(idx + 16));
    }

    #[test]
    fn rgba_string_alpha_stays_in_unit_range(alpha in any::<u8>()) {
        let text = Color::black().with_alpha(alpha).to_string();
        let alpha_text = text
            .trim_start_matches("rgba(0,0,0,")
            .trim_end_matches(')');
        let parsed: f64 = alpha_text.parse().expect("alpha should be numeric");

        prop_assert!((0.0..=1.0).contains(&parsed));
        prop_assert_eq!(alpha_text.split('.').nth(1).map(str::len), Some(2));
    }
}
