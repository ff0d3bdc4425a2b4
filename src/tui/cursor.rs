//! Cursor-based point selection

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::board::{Pos, CENTER};
use crate::engine::{Move, Renju};

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Step(i8, i8),
    Confirm,
    Quit,
}

impl Action {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
        }
        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Action::Step(-1, 0),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Action::Step(1, 0),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Action::Step(0, -1),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Action::Step(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => Action::Confirm,
            KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
            _ => return None,
        };
        Some(action)
    }
}

/// The hovered point, always on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Pos,
}

impl Cursor {
    pub fn new() -> Self {
        Self { pos: CENTER }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Move one step; stays put at the edge.
    pub fn step(&mut self, dr: i8, dc: i8) {
        if let Some(next) = self.pos.offset(dr, dc, 1) {
            self.pos = next;
        }
    }

    /// The hovered point if the putter may play it.
    pub fn confirm(&self, renju: &Renju) -> Option<Pos> {
        (!renju.finished() && renju.is_legal(Move::at(self.pos))).then_some(self.pos)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Action::from_key(key(KeyCode::Up)), Some(Action::Step(-1, 0)));
        assert_eq!(Action::from_key(key(KeyCode::Char('l'))), Some(Action::Step(0, 1)));
        assert_eq!(Action::from_key(key(KeyCode::Enter)), Some(Action::Confirm));
        assert_eq!(Action::from_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(Action::from_key(key(KeyCode::Char('z'))), None);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Action::from_key(ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_cursor_starts_at_center() {
        assert_eq!(Cursor::new().pos(), CENTER);
    }

    #[test]
    fn test_cursor_is_bounded() {
        let mut cursor = Cursor::new();
        for _ in 0..20 {
            cursor.step(-1, 0);
            cursor.step(0, 1);
        }
        assert_eq!(cursor.pos(), Pos::new(0, 14).unwrap());
        cursor.step(-1, 0);
        assert_eq!(cursor.pos(), Pos::new(0, 14).unwrap());
    }

    #[test]
    fn test_confirm_only_legal() {
        let mut renju = Renju::new();
        let mut cursor = Cursor::new();
        cursor.step(0, 1);
        assert_eq!(cursor.confirm(&renju), None);

        cursor.step(0, -1);
        assert_eq!(cursor.confirm(&renju), Some(CENTER));

        renju.add_move(Move::at(CENTER)).unwrap();
        assert_eq!(cursor.confirm(&renju), None);
    }
}
