//! Tests for hex color parsing and palette slot lookup

#[cfg(test)]
mod tests {
    use mosaictile::MosaicError;
    use mosaictile::style::{Color, Palette};

    #[test]
    fn test_parse_all_hex_forms() {
        let cases = [
            ("#123", [0x11, 0x22, 0x33, 0xff]),
            ("#1234", [0x11, 0x22, 0x33, 0x44]),
            ("#a1b2c3", [0xa1, 0xb2, 0xc3, 0xff]),
            ("#A1B2C3D4", [0xa1, 0xb2, 0xc3, 0xd4]),
            ("  #fff  ", [0xff, 0xff, 0xff, 0xff]),
        ];
        for (input, expected) in cases {
            let color: Color = input.parse().expect("valid color");
            assert_eq!(color.to_rgba(), expected, "parsing {input}");
        }
    }

    #[test]
    fn test_parse_rejects_malformed_colors() {
        for input in ["123456", "#12", "#12345", "#gggggg", "#+1+2+3", "", "#"] {
            let result = input.parse::<Color>();
            assert!(
                matches!(result, Err(MosaicError::InvalidColor { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_round_trips_through_text() {
        let opaque = Color::from_rgba([0x26, 0x46, 0x53, 0xff]);
        assert_eq!(opaque.to_string(), "#264653");

        let translucent = Color::from_rgba([0x26, 0x46, 0x53, 0x80]);
        assert_eq!(translucent.to_string(), "#26465380");
    }

    #[test]
    fn test_palette_parse_keeps_order_and_skips_blanks() {
        let palette = Palette::parse(" #111 , ,#222,").expect("valid list");
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.colors()[0].to_string(), "#111111");
        assert_eq!(palette.colors()[1].to_string(), "#222222");

        assert!(Palette::parse("").expect("empty list").is_empty());
        assert!(Palette::parse("#111,nope").is_err());
    }

    #[test]
    fn test_slot_cycles_by_id() {
        let palette = Palette::parse("#111,#222,#333").expect("valid list");
        let slots: Vec<usize> = (0..7).map(|id| palette.slot_for(id).0).collect();
        assert_eq!(slots, vec![0, 1, 2, 0, 1, 2, 0]);
        assert_eq!(palette.slot_for(4).1.to_string(), "#222222");
    }

    #[test]
    fn test_empty_palette_uses_fallback() {
        let palette = Palette::default();
        for id in [0, 1, 99] {
            assert_eq!(palette.slot_for(id), (0, Color::FALLBACK));
        }
        assert_ne!(Color::FALLBACK, Color::NEUTRAL);
    }
}
