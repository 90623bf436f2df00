use core_model::EditorModel;
use core_render::{RenderOptions, build_frame, paint};
use core_state::EditorState;
use core_text::{Buffer, Position};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn model(text: &str, line: usize, col: usize) -> EditorModel {
    let mut m = EditorModel::new(EditorState::new(Buffer::from_str(text), "notes.txt"));
    m.view_mut().cursor = Position::new(line, col);
    m
}

fn rows(frame: &core_render::Frame) -> Vec<String> {
    (0..frame.height).map(|y| frame.row_text(y)).collect()
}

#[test]
fn short_document_fills_from_top() {
    let m = model("alpha\nbeta\ngamma", 2, 5);
    let f = build_frame(&m, &RenderOptions::default(), 30, 6);
    assert_eq!(
        rows(&f),
        vec![
            "  1 alpha",
            "  2 beta",
            "  3 gamma",
            "",
            "",
            "notes.txt  Ln 3, Col 6",
        ]
    );
    assert_eq!(f.cursor, (9, 2));
}

#[test]
fn long_document_centers_cursor() {
    let text: Vec<String> = (1..=20).map(|i| format!("line {i}")).collect();
    let m = model(&text.join("\n"), 10, 0);
    // 5 text rows + status: first line = 10 - 5/2 = 8
    let f = build_frame(&m, &RenderOptions::default(), 30, 6);
    assert_eq!(f.row_text(0), "  9 line 9");
    assert_eq!(f.row_text(2), " 11 line 11");
    assert_eq!(f.cursor, (4, 2));
}

#[test]
fn last_page_is_not_overscrolled() {
    let text: Vec<String> = (1..=20).map(|i| format!("l{i}")).collect();
    let m = model(&text.join("\n"), 19, 0);
    let f = build_frame(&m, &RenderOptions::default(), 30, 6);
    assert_eq!(f.row_text(0), " 16 l16");
    assert_eq!(f.row_text(4), " 20 l20");
    assert_eq!(f.cursor, (4, 4));
}

#[test]
fn gutter_widens_past_999_lines() {
    let text = vec!["x"; 1000].join("\n");
    let m = model(&text, 999, 1);
    let f = build_frame(&m, &RenderOptions::default(), 30, 3);
    assert_eq!(f.row_text(1), "1000 x");
    assert_eq!(f.cursor, (6, 1));
}

#[test]
fn long_line_scrolls_horizontally_to_keep_cursor_visible() {
    let m = model("abcdefghijklmnop", 0, 14);
    // 14 columns - 4 gutter = 10 text cells; offset = 14 - 10 + 1 = 5
    let f = build_frame(&m, &RenderOptions::default(), 14, 3);
    assert_eq!(f.row_text(0), "  1 fghijklmno");
    assert_eq!(f.cursor, (13, 0));
}

#[test]
fn wide_characters_shift_the_cursor() {
    let m = model("中文ab", 0, 2);
    let f = build_frame(&m, &RenderOptions::default(), 20, 3);
    assert_eq!(f.row_text(0), "  1 中文ab");
    assert_eq!(f.cursor, (8, 0));
}

#[test]
fn odd_offset_over_wide_characters_keeps_cursor_aligned() {
    // Cursor cell 12, 10 text cells: offset 3 cuts through the second glyph.
    let m = model("一二三四五六七", 0, 6);
    let f = build_frame(&m, &RenderOptions::default(), 14, 3);
    assert_eq!(f.row_text(0), "  1  三四五六");
    assert_eq!(f.cursor, (13, 0));
    let under_cursor = &f.cells[13];
    assert!(under_cursor.is_leader());
    assert_eq!(under_cursor.text, " ");
    // Glyph left of the cursor is the one just before the cursor character.
    assert_eq!(f.cells[11].text, "六");
}

#[test]
fn modified_marker_and_message_in_status() {
    let mut m = model("a", 0, 1);
    m.state_mut().mark_modified();
    m.state_mut()
        .set_ephemeral("Error saving: denied", Duration::from_secs(60));
    let f = build_frame(&m, &RenderOptions::default(), 60, 3);
    assert_eq!(
        f.row_text(2),
        "notes.txt [+]  Ln 1, Col 2  Error saving: denied"
    );
}

#[test]
fn paint_emits_rows_and_final_cursor_position() {
    let m = model("hello", 0, 3);
    let f = build_frame(&m, &RenderOptions::default(), 20, 3);
    let mut out = Vec::new();
    paint(&f, &mut out).unwrap();
    let s = String::from_utf8(out).unwrap();
    assert!(s.contains("hello"));
    // cursor at column 4 + 3 = 7, row 0 => 1-based "1;8H", emitted last before show.
    let last_move = s.rfind("\x1b[1;8H").unwrap();
    assert!(s[last_move..].contains("\x1b[?25h"));
}
