//! End-to-end editor scenarios: load from a link, edit, share.

use rpgme_core::{
    BufferClipboard, CharacterConfig, CharacterEditor, EditorConfig, Field, FieldValue,
    LatestView, Location, MemoryHistory, SeedCodec, SeedProfile, WidgetEvent,
};

type Editor = CharacterEditor<MemoryHistory, LatestView, BufferClipboard>;

fn open(href: &str) -> Editor {
    let mut editor = CharacterEditor::new(
        EditorConfig::default(),
        MemoryHistory::parse(href).unwrap(),
        LatestView::default(),
        BufferClipboard::default(),
    );
    editor.connect();
    editor
}

fn scenario_record() -> CharacterConfig {
    CharacterConfig {
        base: FieldValue::Int(1),
        face: FieldValue::Int(2),
        faceitem: FieldValue::Int(3),
        pants: FieldValue::Int(4),
        shirt: FieldValue::Int(5),
        skin: FieldValue::Int(6),
        accessories: FieldValue::Int(7),
        hatcolor: FieldValue::Int(8),
        hair: FieldValue::Int(9),
        ..CharacterConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

#[test]
fn scenario_record_encodes_in_classic_order() {
    let seed = SeedCodec::new(SeedProfile::Classic).encode(&scenario_record());
    assert_eq!(seed.as_str(), "123456789");
}

#[test]
fn value_ten_saturates_and_keeps_width() {
    let mut cfg = CharacterConfig::default();
    cfg.hair = FieldValue::Int(10);
    let seed = SeedCodec::default().encode(&cfg);
    assert_eq!(seed.char_len(), SeedProfile::Classic.width());
    assert_eq!(seed.as_str(), "000000009");
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn loading_seed_hydrates_record() {
    let editor = open("https://example.com/rpgme/?seed=123456789");
    assert_eq!(editor.store().snapshot(), scenario_record());
    assert_eq!(editor.seed().as_str(), "123456789");
}

#[test]
fn loading_short_seed_keeps_defaults() {
    let editor = open("https://example.com/rpgme/?seed=12");
    assert_eq!(editor.store().snapshot(), CharacterConfig::default());
    assert_eq!(editor.seed().as_str(), "000000000");
    // a rejected seed is not rewritten on load
    assert_eq!(
        editor.location().current().as_str(),
        "https://example.com/rpgme/?seed=12"
    );
}

#[test]
fn loading_compact_seed() {
    let mut editor = CharacterEditor::new(
        EditorConfig::default().with_profile(SeedProfile::Compact),
        MemoryHistory::parse("https://example.com/?seed=12394567").unwrap(),
        LatestView::default(),
        BufferClipboard::default(),
    );
    assert!(editor.connect());
    assert_eq!(editor.store().get().hair, FieldValue::Int(9));
    assert_eq!(editor.store().get().hatcolor, FieldValue::Int(0));
}

// ---------------------------------------------------------------------------
// Editing
// ---------------------------------------------------------------------------

#[test]
fn toggling_base_changes_one_digit_without_history_entry() {
    let mut editor = open("https://example.com/rpgme/?seed=023456789");
    let before = editor.seed().clone();
    let entries_before = editor.location().len();

    editor.handle(WidgetEvent::Checkbox {
        field: Field::Base,
        checked: true,
    });

    let after = editor.seed().clone();
    let changed: Vec<usize> = before
        .as_str()
        .chars()
        .zip(after.as_str().chars())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(changed, vec![0]);
    assert_eq!(after.as_str(), "123456789");
    assert_eq!(
        editor.location().current().as_str(),
        "https://example.com/rpgme/?seed=123456789"
    );
    assert_eq!(editor.location().len(), entries_before);
}

#[test]
fn malformed_slider_input_is_kept_as_sentinel() {
    let mut editor = open("https://example.com/");
    editor.handle(WidgetEvent::slider(Field::Pants, "lots"));
    assert!(editor.store().get().pants.is_nan());
    assert_eq!(editor.seed().as_str(), "000000000");
    let view = editor.renderer().view().unwrap();
    let pants = view
        .attributes
        .pairs()
        .find(|(name, _)| *name == "pants")
        .map(|(_, v)| v.to_string());
    assert_eq!(pants.as_deref(), Some("NaN"));
}

#[test]
fn every_edit_rewrites_location_in_place() {
    let mut editor = open("https://example.com/?ref=mail");
    for (i, field) in [Field::Face, Field::Shirt, Field::Hair].into_iter().enumerate() {
        editor.handle(WidgetEvent::slider(field, i + 1));
    }
    assert_eq!(editor.location().len(), 1);
    assert_eq!(
        editor.location().current().as_str(),
        "https://example.com/?ref=mail&seed=010020003"
    );
}

#[test]
fn back_navigation_unaffected_by_edits() {
    let mut history = MemoryHistory::parse("https://example.com/start").unwrap();
    history.push(url::Url::parse("https://example.com/rpgme/").unwrap());
    let mut editor = CharacterEditor::new(
        EditorConfig::default(),
        history,
        LatestView::default(),
        BufferClipboard::default(),
    );
    editor.connect();
    editor.handle(WidgetEvent::slider(Field::Skin, 3));

    let (mut history, _, _) = editor.into_parts();
    assert_eq!(history.len(), 2);
    assert!(history.back());
    assert_eq!(history.current().as_str(), "https://example.com/start");
}

// ---------------------------------------------------------------------------
// Sharing
// ---------------------------------------------------------------------------

#[test]
fn share_link_round_trips_through_a_new_editor() {
    let mut first = open("https://example.com/rpgme/index.html?theme=dark");
    first.handle(WidgetEvent::slider(Field::Face, 4));
    first.handle(WidgetEvent::slider(Field::HatColor, 6));
    first.share();
    let link = first.clipboard().contents().unwrap().to_string();
    assert_eq!(link, "https://example.com/rpgme/index.html?seed=040000060");

    let second = open(&link);
    assert_eq!(second.store().get().face, FieldValue::Int(4));
    assert_eq!(second.store().get().hatcolor, FieldValue::Int(6));
    assert_eq!(second.seed(), first.seed());
}
