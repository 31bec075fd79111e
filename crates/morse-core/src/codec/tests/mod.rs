mod decode;

use super::*;

/// Four-letter table used by the worked examples.
pub(super) fn example_table() -> MorseTable {
    MorseTable::from_toml(
        r#"
[letters]
"ا" = ".-"
"ب" = "-..."
"ج" = ".-."
"د" = "-.."
"#,
    )
    .unwrap()
}

pub(super) fn builtin() -> &'static MorseTable {
    MorseTable::builtin()
}

#[test]
fn test_every_letter_round_trips() {
    let table = builtin();
    for (c, _) in table.letters() {
        let text = c.to_string();
        let morse = encode(table, &text, &EncodeOptions::default());
        let back = decode(table, &morse, &DecodeOptions::default());
        assert_eq!(back, crate::normalize(table, &text), "round trip failed for {c:?}");
    }
}

#[test]
fn test_sentence_round_trip() {
    let table = builtin();
    let text = "مرحبا بالعالم ٢٠٢٤";
    let morse = encode(table, text, &EncodeOptions::default());
    assert_eq!(
        decode(table, &morse, &DecodeOptions::default()),
        "مرحبا بالعالم 2024"
    );
}

#[test]
fn test_round_trip_normalizes() {
    let table = builtin();
    let morse = encode(table, "أَهْلاً بِكُمْ", &EncodeOptions::default());
    assert_eq!(decode(table, &morse, &DecodeOptions::default()), "اهلا بكم");
}

#[test]
fn test_round_trip_custom_separators() {
    let table = builtin();
    let opts = DecodeOptions {
        letter_separator: Some(" ".into()),
        word_separator: Some(" | ".into()),
        ..Default::default()
    };
    let morse = transcode(table, Mode::Encode, "سلام عليكم", &opts);
    assert_eq!(morse, "... .-.. .- -- | .-.- .-.. .. -.- --");
    assert_eq!(transcode(table, Mode::Decode, &morse, &opts), "سلام عليكم");
}

#[test]
fn test_mode_opposite() {
    assert_eq!(Mode::Encode.opposite(), Mode::Decode);
    assert_eq!(Mode::Decode.opposite(), Mode::Encode);
}

#[test]
fn test_mode_from_str() {
    assert_eq!("encode".parse::<Mode>(), Ok(Mode::Encode));
    assert_eq!("decode".parse::<Mode>(), Ok(Mode::Decode));
    let err = "swap".parse::<Mode>().unwrap_err();
    assert!(err.to_string().contains("\"swap\""));
    assert_eq!(Mode::Decode.to_string(), "decode");
}

#[test]
fn test_swap_feeds_output_back() {
    let table = builtin();
    let opts = DecodeOptions::default();
    let morse = transcode(table, Mode::Encode, "شمس", &opts);
    assert_eq!(morse, "----/--/...");

    let (mode, text) = swap(table, Mode::Encode, &morse, &opts);
    assert_eq!(mode, Mode::Decode);
    assert_eq!(text, "شمس");

    let (mode, again) = swap(table, mode, &text, &opts);
    assert_eq!(mode, Mode::Encode);
    assert_eq!(again, morse);
}

#[test]
fn test_swap_keeps_unknown_visible() {
    let table = builtin();
    let opts = DecodeOptions::default();
    let (_, text) = swap(table, Mode::Encode, ".-/......../-...", &opts);
    assert_eq!(text, "ا?ب");
    // The placeholder has no code of its own, so it survives the way back.
    let (_, morse) = swap(table, Mode::Decode, &text, &opts);
    assert_eq!(morse, ".-/?/-...");
}

#[test]
fn test_table_shared_across_threads() {
    let table = builtin();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                let morse = encode(table, "قمر", &EncodeOptions::default());
                decode(table, &morse, &DecodeOptions::default())
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "قمر");
    }
}
