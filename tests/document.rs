//! Editing surface and stats tests through the update loop

mod common;

use common::test_model;
use teny::messages::{DocumentMsg, Msg};
use teny::model::{DocumentStats, EditingSurface, Selection};
use teny::update::update;

#[test]
fn test_empty_editor_counts_one_char_two_lines() {
    let model = test_model("");
    assert_eq!(
        model.stats,
        DocumentStats {
            words: 0,
            chars: 1,
            lines: 2
        }
    );
}

#[test]
fn test_stats_follow_every_edit() {
    let mut model = test_model("");

    update(&mut model, Msg::append("Salama e!"));
    assert_eq!(model.stats.words, 2);

    update(&mut model, Msg::append("\nMalagasy aho"));
    assert_eq!(model.stats.words, 4);
    assert_eq!(model.stats.lines, 3);

    update(
        &mut model,
        Msg::Document(DocumentMsg::Delete { index: 0, len: 10 }),
    );
    assert_eq!(model.text(), "Malagasy aho\n");
    assert_eq!(model.stats.words, 2);
    assert_eq!(model.stats.chars, 13);
}

#[test]
fn test_insert_in_the_middle() {
    let mut model = test_model("Salama!");
    update(
        &mut model,
        Msg::Document(DocumentMsg::Insert {
            index: 6,
            text: " e".to_string(),
        }),
    );
    assert_eq!(model.text(), "Salama e!\n");
}

#[test]
fn test_set_text_resets_selection() {
    let mut model = test_model("Salama tompoko");
    update(&mut model, Msg::select(7, 7));
    assert_eq!(model.document.selection(), Selection::new(7, 7));

    update(&mut model, Msg::set_text("aho"));
    assert_eq!(model.document.selection(), Selection::caret(0));
    assert_eq!(model.stats.words, 1);
}

#[test]
fn test_selection_is_clamped_to_text() {
    let mut model = test_model("aho");
    update(&mut model, Msg::select(1, 50));
    assert_eq!(model.document.selection(), Selection::new(1, 2));
    assert_eq!(model.document.selected_text(), "ho");
}

#[test]
fn test_selection_does_not_touch_revision() {
    let mut model = test_model("aho");
    let before = model.document.revision;
    update(&mut model, Msg::select(0, 2));
    assert_eq!(model.document.revision, before);
}

#[test]
fn test_noop_delete_sends_no_text_change() {
    let mut model = test_model("aho");
    let cmd = update(
        &mut model,
        Msg::Document(DocumentMsg::Delete { index: 3, len: 5 }),
    );
    assert_eq!(cmd, None);
}
