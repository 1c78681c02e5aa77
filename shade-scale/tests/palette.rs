use proptest::prelude::*;
use shade_scale::{FALLBACK_SHADES, Palette, Rgb, Step, generate_palette, parse_hex};

#[ctor::ctor]
unsafe fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|ch| ch.is_ascii_hexdigit())
}

fn brightness(color: &str) -> u32 {
    let rgb = parse_hex(color).expect("palette entry parses");
    rgb.channels().iter().map(|&channel| u32::from(channel)).sum()
}

fn arb_hex() -> impl Strategy<Value = String> {
    (any::<[u8; 3]>(), any::<bool>(), any::<bool>()).prop_map(|([r, g, b], hash, upper)| {
        let digits = format!("{r:02x}{g:02x}{b:02x}");
        let digits = if upper {
            digits.to_ascii_uppercase()
        } else {
            digits
        };
        if hash { format!("#{digits}") } else { digits }
    })
}

#[test]
fn blue_scale_matches_mixing_formula() {
    let palette = generate_palette("#3b82f6");

    assert_eq!(palette.base(), "#3b82f6");
    assert_eq!(&palette[Step::S50], "#f5f9ff");
    assert_eq!(
        &palette[Step::S50],
        shade_scale::mix(Rgb::new(59, 130, 246), Rgb::WHITE, 0.05).to_hex()
    );
}

#[test]
fn empty_input_returns_literal_fallback() {
    let palette = generate_palette("");
    let expected: Vec<(u16, &str)> = vec![
        (50, "#f8fafc"),
        (100, "#f1f5f9"),
        (200, "#e2e8f0"),
        (300, "#cbd5e1"),
        (400, "#94a3b8"),
        (500, "#64748b"),
        (600, "#475569"),
        (700, "#334155"),
        (800, "#1e293b"),
        (900, "#0f172a"),
        (950, "#020617"),
    ];

    let actual: Vec<(u16, &str)> = palette
        .iter()
        .map(|(step, color)| (step.value(), color))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn listed_invalid_inputs_all_fall_back() {
    for input in ["", "red", "#abc", "#gggggg", "1234567"] {
        let palette = generate_palette(input);
        assert_eq!(palette, Palette::fallback(), "input {input:?}");
        assert!(palette.iter().map(|(_, color)| color).eq(FALLBACK_SHADES));
    }
}

#[test]
fn extreme_bases_saturate_cleanly() {
    let white = generate_palette("#ffffff");
    assert_eq!(&white[Step::S400], "#ffffff");
    assert_eq!(&white[Step::S600], "#e6e6e6");
    assert_eq!(&white[Step::S950], "#262626");

    let black = generate_palette("#000000");
    assert_eq!(&black[Step::S50], "#f2f2f2");
    assert_eq!(&black[Step::S100], "#e6e6e6");
    assert_eq!(&black[Step::S600], "#000000");
}

#[test]
fn half_channel_ties_round_up() {
    let palette = generate_palette("#010101");
    assert_eq!(&palette[Step::S800], "#010101");
}

#[test]
fn serialized_json_is_a_flat_object() {
    let value = serde_json::to_value(generate_palette("#0f766e")).expect("serialize palette");
    let object = value.as_object().expect("palette is an object");

    assert_eq!(object.len(), 11);
    assert_eq!(object["500"], "#0f766e");
    assert_eq!(object["950"], "#021211");
}

proptest! {
    #[test]
    fn base_step_is_passed_through(hex in arb_hex()) {
        let palette = generate_palette(&hex);
        prop_assert_eq!(palette.base(), hex.as_str());
    }

    #[test]
    fn every_generated_shade_is_a_hex_color(hex in arb_hex()) {
        let palette = generate_palette(&hex);
        for (step, color) in palette.iter() {
            // A bare base color comes back verbatim at step 500.
            if step == Step::S500 && !hex.starts_with('#') {
                prop_assert_eq!(color, hex.as_str());
                continue;
            }
            prop_assert!(is_hex_color(color), "step {} produced {}", step, color);
        }
    }

    #[test]
    fn shades_darken_monotonically(hex in arb_hex()) {
        let palette = generate_palette(&hex);
        let levels: Vec<u32> = palette.iter().map(|(_, color)| brightness(color)).collect();
        for pair in levels.windows(2) {
            prop_assert!(pair[0] >= pair[1], "levels {:?}", levels);
        }
    }

    #[test]
    fn generation_is_deterministic(input in ".{0,10}") {
        prop_assert_eq!(generate_palette(&input), generate_palette(&input));
    }

    #[test]
    fn arbitrary_strings_never_panic(input in "\\PC{0,12}") {
        let palette = generate_palette(&input);
        if parse_hex(&input).is_err() {
            prop_assert!(palette.is_fallback());
        }
    }
}
