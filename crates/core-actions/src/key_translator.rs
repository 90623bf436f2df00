//! Key translation: normalized key events to `Action`s, per mode.
//!
//! Editing:
//! * printable character (with or without Shift) -> insert
//! * Enter / Backspace -> newline / backspace
//! * arrows -> motion
//! * Ctrl-S -> save, Ctrl-Q -> quit
//!
//! ConfirmQuit: printable characters, Backspace, Enter and Esc edit, submit or
//! cancel the y/n response. Everything else is ignored so a stray arrow key
//! can never resolve the prompt.

use crate::{Action, EditKind, MotionKind, PromptKind};
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::Mode;

pub fn translate_key(mode: &Mode, key: &KeyEvent) -> Option<Action> {
    match mode {
        Mode::Editing => translate_editing(key),
        Mode::ConfirmQuit(_) => translate_prompt(key),
    }
}

fn translate_editing(key: &KeyEvent) -> Option<Action> {
    if key.mods.contains(KeyModifiers::CTRL) {
        return match key.code {
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'s') => Some(Action::Save),
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'q') => Some(Action::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char(c) => printable(key, c).map(|c| Action::Edit(EditKind::InsertChar(c))),
        KeyCode::Enter => Some(Action::Edit(EditKind::InsertNewline)),
        KeyCode::Backspace => Some(Action::Edit(EditKind::Backspace)),
        KeyCode::Left => Some(Action::Motion(MotionKind::Left)),
        KeyCode::Right => Some(Action::Motion(MotionKind::Right)),
        KeyCode::Up => Some(Action::Motion(MotionKind::Up)),
        KeyCode::Down => Some(Action::Motion(MotionKind::Down)),
        _ => None,
    }
}

fn translate_prompt(key: &KeyEvent) -> Option<Action> {
    if key.mods.contains(KeyModifiers::CTRL) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => printable(key, c).map(|c| Action::Prompt(PromptKind::Push(c))),
        KeyCode::Backspace => Some(Action::Prompt(PromptKind::Pop)),
        KeyCode::Enter => Some(Action::Prompt(PromptKind::Submit)),
        KeyCode::Esc => Some(Action::Prompt(PromptKind::Cancel)),
        _ => None,
    }
}

/// Characters that may enter the buffer: no Alt chords, no control codes.
fn printable(key: &KeyEvent, c: char) -> Option<char> {
    if key.mods.contains(KeyModifiers::ALT) || c.is_control() {
        return None;
    }
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_state::QuitPrompt;

    fn editing(key: KeyEvent) -> Option<Action> {
        translate_key(&Mode::Editing, &key)
    }

    fn prompting(key: KeyEvent) -> Option<Action> {
        translate_key(&Mode::ConfirmQuit(QuitPrompt::new()), &key)
    }

    #[test]
    fn printable_and_space_insert() {
        assert_eq!(
            editing(KeyEvent::plain(KeyCode::Char('a'))),
            Some(Action::Edit(EditKind::InsertChar('a')))
        );
        assert_eq!(
            editing(KeyEvent::plain(KeyCode::Char(' '))),
            Some(Action::Edit(EditKind::InsertChar(' ')))
        );
        assert_eq!(
            editing(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Action::Edit(EditKind::InsertChar('A')))
        );
    }

    #[test]
    fn control_chords_map_to_commands() {
        assert_eq!(editing(KeyEvent::ctrl('s')), Some(Action::Save));
        assert_eq!(editing(KeyEvent::ctrl('q')), Some(Action::Quit));
        assert_eq!(editing(KeyEvent::ctrl('x')), None);
    }

    #[test]
    fn named_keys_in_editing() {
        assert_eq!(
            editing(KeyEvent::plain(KeyCode::Enter)),
            Some(Action::Edit(EditKind::InsertNewline))
        );
        assert_eq!(
            editing(KeyEvent::plain(KeyCode::Backspace)),
            Some(Action::Edit(EditKind::Backspace))
        );
        assert_eq!(
            editing(KeyEvent::plain(KeyCode::Up)),
            Some(Action::Motion(MotionKind::Up))
        );
        assert_eq!(editing(KeyEvent::plain(KeyCode::Tab)), None);
        assert_eq!(editing(KeyEvent::plain(KeyCode::Esc)), None);
        assert_eq!(editing(KeyEvent::plain(KeyCode::F(1))), None);
    }

    #[test]
    fn alt_chords_and_control_chars_are_ignored() {
        assert_eq!(
            editing(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
            None
        );
        assert_eq!(editing(KeyEvent::plain(KeyCode::Char('\u{7}'))), None);
    }

    #[test]
    fn prompt_keys() {
        assert_eq!(
            prompting(KeyEvent::plain(KeyCode::Char('y'))),
            Some(Action::Prompt(PromptKind::Push('y')))
        );
        assert_eq!(
            prompting(KeyEvent::plain(KeyCode::Backspace)),
            Some(Action::Prompt(PromptKind::Pop))
        );
        assert_eq!(
            prompting(KeyEvent::plain(KeyCode::Enter)),
            Some(Action::Prompt(PromptKind::Submit))
        );
        assert_eq!(
            prompting(KeyEvent::plain(KeyCode::Esc)),
            Some(Action::Prompt(PromptKind::Cancel))
        );
        assert_eq!(prompting(KeyEvent::plain(KeyCode::Left)), None);
        assert_eq!(prompting(KeyEvent::ctrl('q')), None);
    }
}
