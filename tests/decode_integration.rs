//! Integration tests against playlist files on disk
//!
//! Exercises the public API end to end: file → XML → DecodeResult

use pretty_assertions::assert_eq;
use smartplaylist::{
    DecodeResult, DecoderConfig, Limit, LimitType, Rule, SmartPlaylist, SmartPlaylistDecoder,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Success Path
// ============================================================================

#[test]
fn test_decode_full_playlist() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "Recently Added.dspl",
        r#"<?xml version="1.0" encoding="utf-8"?>
<smartplaylist>
  <name>Recently Added</name>
  <match>any</match>
  <order>dateadded desc</order>
  <limit type="100"/>
  <rule field="dateadded" operator="inthelast">14</rule>
  <rule field="playcount" operator="is">0</rule>
  <rule field="album" operator="contains">Live</rule>
</smartplaylist>"#,
    );

    let result = SmartPlaylistDecoder::new().decode(&path);

    assert_eq!(
        result,
        DecodeResult {
            success: true,
            playlist_name: "Recently Added".to_string(),
            match_mode: "any".to_string(),
            order: "dateadded desc".to_string(),
            limit: Limit::new(LimitType::Songs, 100),
            rules: vec![
                Rule::new("dateadded", "inthelast", "14"),
                Rule::new("playcount", "is", "0"),
                Rule::new("album", "contains", "Live"),
            ],
            error: None,
        }
    );
}

#[test]
fn test_try_decode_matches_decode() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "mix.dspl",
        r#"<smartplaylist><name>Mix</name><rule field="bpm" operator="greaterthan">120</rule></smartplaylist>"#,
    );
    let decoder = SmartPlaylistDecoder::new();

    let playlist = decoder.try_decode(&path).unwrap();
    assert_eq!(
        playlist,
        SmartPlaylist {
            name: "Mix".to_string(),
            match_mode: String::new(),
            order: String::new(),
            limit: Limit::default(),
            rules: vec![Rule::new("bpm", "greaterthan", "120")],
        }
    );
    assert_eq!(DecodeResult::from(playlist), decoder.decode(&path));
}

#[test]
fn test_decode_with_byte_order_mark() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "bom.dspl",
        "\u{feff}<?xml version=\"1.0\" encoding=\"utf-8\"?><smartplaylist><rule field=\"a\" operator=\"is\">b</rule></smartplaylist>",
    );

    let result = SmartPlaylistDecoder::new().decode(&path);
    assert!(result.success, "{:?}", result.error);
}

#[test]
fn test_custom_extension_decoder() {
    let dir = TempDir::new().unwrap();
    let content = r#"<smartplaylist><rule field="a" operator="is">b</rule></smartplaylist>"#;
    let custom = fixture(&dir, "list.XSPL", content);
    let dspl = fixture(&dir, "list.dspl", content);

    let decoder = SmartPlaylistDecoder::with_config(DecoderConfig::new().with_extension("xspl"));

    assert!(decoder.decode(&custom).success);
    assert_eq!(decoder.decode(&dspl), DecodeResult::default());
}

// ============================================================================
// Failure Path
// ============================================================================

#[test]
fn test_wrong_extension_on_valid_content() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "valid.xml",
        r#"<smartplaylist><rule field="a" operator="is">b</rule></smartplaylist>"#,
    );

    assert_eq!(SmartPlaylistDecoder::new().decode(&path), DecodeResult::default());
}

#[test]
fn test_failures_collapse_to_defaults() {
    let dir = TempDir::new().unwrap();
    let cases = [
        ("malformed.dspl", "<smartplaylist><rule"),
        ("empty.dspl", ""),
        ("root.dspl", r#"<playlist><rule field="a" operator="b"/></playlist>"#),
        (
            "norules.dspl",
            "<smartplaylist><name>N</name><match>all</match><order>o</order></smartplaylist>",
        ),
        (
            "noop.dspl",
            r#"<smartplaylist><name>N</name><rule field="a">b</rule></smartplaylist>"#,
        ),
    ];

    let decoder = SmartPlaylistDecoder::new();
    for (name, content) in cases {
        let result = decoder.decode(fixture(&dir, name, content));

        assert!(!result.success, "{name} should fail");
        assert!(result.error.is_some(), "{name} should carry a diagnostic");
        assert_eq!(
            DecodeResult {
                error: None,
                ..result
            },
            DecodeResult::default(),
            "{name} should have default fields"
        );
    }
}
