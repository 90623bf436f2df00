//! Property: after any key sequence the cursor stays inside the document.

mod common;

use common::*;
use core_events::{InputEvent, KeyCode};
use proptest::prelude::*;

fn event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        4 => prop::sample::select(vec!['a', 'z', ' ', '0', 'é', '中']).prop_map(|c| key(KeyCode::Char(c))),
        2 => Just(key(KeyCode::Enter)),
        3 => Just(key(KeyCode::Backspace)),
        2 => Just(key(KeyCode::Left)),
        2 => Just(key(KeyCode::Right)),
        2 => Just(key(KeyCode::Up)),
        2 => Just(key(KeyCode::Down)),
    ]
}

proptest! {
    #[test]
    fn cursor_always_in_bounds(
        start in "[a-c\n]{0,20}",
        events in prop::collection::vec(event_strategy(), 0..80),
    ) {
        let store = MemStore::default();
        let mut m = model_from(&start);
        for ev in events {
            press(&mut m, &store, ev);
            let buf = m.state().buffer();
            let cur = m.cursor();
            prop_assert!(buf.line_count() >= 1);
            prop_assert!(cur.line < buf.line_count());
            prop_assert!(cur.col <= buf.line_len(cur.line));
        }
    }
}
