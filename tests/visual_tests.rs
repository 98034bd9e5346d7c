// tests/visual_tests.rs
mod common;

use caesar_shift::consts::ALPHABET;
use caesar_shift::core::alphabet_pairs;
use caesar_shift::{
    character_mappings, shifted_alphabet, to_json, transform, visualize, AlphabetBand, Mode,
};

#[test]
fn test_shifted_alphabet_encrypt_and_decrypt() {
    assert_eq!(
        shifted_alphabet(3, Mode::Encrypt),
        "DEFGHIJKLMNOPQRSTUVWXYZABC"
    );
    assert_eq!(
        shifted_alphabet(3, Mode::Decrypt),
        "XYZABCDEFGHIJKLMNOPQRSTUVW"
    );
    assert_eq!(shifted_alphabet(0, Mode::Encrypt), ALPHABET);
    assert_eq!(shifted_alphabet(26, Mode::Decrypt), ALPHABET);
}

#[test]
fn test_alphabet_pairs_agree_with_transform() {
    for shift in 1..26 {
        for (plain, substituted) in alphabet_pairs(shift, Mode::Encrypt) {
            assert_eq!(
                transform(&plain.to_string(), shift, Mode::Encrypt),
                substituted.to_string()
            );
        }
    }
}

#[test]
fn test_character_mappings_one_per_char() {
    common::setup();

    let text = "Hi, Zed!";
    let mappings = character_mappings(text, 1, Mode::Encrypt);

    assert_eq!(mappings.len(), text.chars().count());
    let out: String = mappings.iter().map(|m| m.transformed).collect();
    assert_eq!(out, "Ij, Afe!");

    let z = &mappings[4];
    assert_eq!(z.original, 'Z');
    assert_eq!(z.transformed, 'A');
    assert_eq!(z.original_band, AlphabetBand::Late);
    assert_eq!(z.transformed_band, AlphabetBand::Early);

    let comma = &mappings[2];
    assert_eq!(comma.original, ',');
    assert_eq!(comma.transformed, ',');
    assert_eq!(comma.original_band, AlphabetBand::NonLetter);
}

#[test]
fn test_visualize_bundles_everything() {
    let report = visualize("HELLO", -23, Mode::Encrypt);

    assert_eq!(report.mode, Mode::Encrypt);
    assert_eq!(report.shift, 3);
    assert_eq!(report.effective_shift, 3);
    assert_eq!(report.alphabet, ALPHABET);
    assert_eq!(report.shifted_alphabet, "DEFGHIJKLMNOPQRSTUVWXYZABC");
    assert_eq!(report.output, "KHOOR");
    assert_eq!(report.mappings.len(), 5);
}

#[test]
fn test_visualize_decrypt_reports_inverse_shift() {
    let report = visualize("KHOOR", 3, Mode::Decrypt);
    assert_eq!(report.shift, 3);
    assert_eq!(report.effective_shift, 23);
    assert_eq!(report.output, "HELLO");
}

#[test]
fn test_visualize_serialises_to_json() {
    let report = visualize("Ab", 1, Mode::Encrypt);
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["mode"], "encrypt");
    assert_eq!(value["output"], "Bc");
    assert_eq!(value["mappings"][0]["original"], "A");
    assert_eq!(value["mappings"][0]["transformed"], "B");
    assert_eq!(value["mappings"][1]["original_band"], "early");
}

#[test]
fn test_visualize_empty_text() {
    let report = visualize("", 7, Mode::Encrypt);
    assert!(report.mappings.is_empty());
    assert_eq!(report.output, "");
}

#[test]
fn test_to_json_is_pretty_and_parses_back() {
    let report = visualize("KHOOR", 3, Mode::Decrypt);
    let json = to_json(&report).unwrap();

    assert!(json.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["mode"], "decrypt");
    assert_eq!(value["effective_shift"], 23);
    assert_eq!(value["output"], "HELLO");
}
