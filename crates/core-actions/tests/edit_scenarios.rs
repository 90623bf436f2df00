mod common;

use common::*;
use core_events::KeyCode;
use core_text::Position;

#[test]
fn typing_into_empty_document() {
    let store = MemStore::default();
    let mut m = model_from("");
    type_str(&mut m, &store, "hi there");
    assert_eq!(text(&m), "hi there");
    assert_eq!(m.cursor(), Position::new(0, 8));
    assert!(m.state().dirty);
}

#[test]
fn enter_splits_line_at_cursor() {
    let store = MemStore::default();
    let mut m = model_at("hello", 0, 2);
    press(&mut m, &store, key(KeyCode::Enter));
    assert_eq!(text(&m), "he\nllo");
    assert_eq!(m.cursor(), Position::new(1, 0));
}

#[test]
fn enter_then_backspace_restores_document() {
    let store = MemStore::default();
    let mut m = model_at("abc\ndef", 1, 1);
    press(&mut m, &store, key(KeyCode::Enter));
    press(&mut m, &store, key(KeyCode::Backspace));
    assert_eq!(text(&m), "abc\ndef");
    assert_eq!(m.cursor(), Position::new(1, 1));
}

#[test]
fn backspace_at_line_start_joins_previous_line() {
    let store = MemStore::default();
    let mut m = model_at("ab\ncd", 1, 0);
    press(&mut m, &store, key(KeyCode::Backspace));
    assert_eq!(text(&m), "abcd");
    assert_eq!(m.cursor(), Position::new(0, 2));
}

#[test]
fn backspace_at_origin_changes_nothing() {
    let store = MemStore::default();
    let mut m = model_from("ab");
    let r = press(&mut m, &store, key(KeyCode::Backspace));
    assert!(!r.dirty);
    assert!(!m.state().dirty);
    assert_eq!(text(&m), "ab");
}

#[test]
fn down_clamps_column_to_shorter_line() {
    let store = MemStore::default();
    let mut m = model_at("long line\nab", 0, 7);
    press(&mut m, &store, key(KeyCode::Down));
    assert_eq!(m.cursor(), Position::new(1, 2));
    press(&mut m, &store, key(KeyCode::Down));
    assert_eq!(m.cursor(), Position::new(1, 2));
}

#[test]
fn horizontal_motion_does_not_wrap() {
    let store = MemStore::default();
    let mut m = model_at("ab\ncd", 1, 0);
    press(&mut m, &store, key(KeyCode::Left));
    assert_eq!(m.cursor(), Position::new(1, 0));
    press(&mut m, &store, key(KeyCode::Up));
    press(&mut m, &store, key(KeyCode::Right));
    press(&mut m, &store, key(KeyCode::Right));
    press(&mut m, &store, key(KeyCode::Right));
    assert_eq!(m.cursor(), Position::new(0, 2));
}

#[test]
fn ignored_keys_leave_document_untouched() {
    let store = MemStore::default();
    let mut m = model_at("abc", 0, 1);
    for code in [KeyCode::Tab, KeyCode::Esc, KeyCode::Delete, KeyCode::F(5)] {
        let r = press(&mut m, &store, key(code));
        assert!(!r.dirty && !r.quit);
    }
    press(&mut m, &store, ctrl('x'));
    assert_eq!(text(&m), "abc");
    assert!(!m.state().dirty);
}
