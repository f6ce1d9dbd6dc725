//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(GameAction::Move(Direction::Forward))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameAction::Move(Direction::Backward))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameAction::Move(Direction::Right))
        }

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(GameAction::Restart),

        _ => None,
    }
}

/// Map a key to an action only if the session can take it right now.
///
/// Moves are dropped while a hop is in flight or after game over (no input
/// buffering); restart is only offered once the game is over.
pub fn gated_action(key: KeyEvent, accepts_moves: bool, game_over: bool) -> Option<GameAction> {
    match handle_key_event(key)? {
        GameAction::Move(dir) if accepts_moves => Some(GameAction::Move(dir)),
        GameAction::Restart if game_over => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::Move(Direction::Forward))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::Move(Direction::Backward))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::Move(Direction::Right))
        );
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('W'))),
            Some(GameAction::Move(Direction::Forward))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(GameAction::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(GameAction::Move(Direction::Backward))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('L'))),
            Some(GameAction::Move(Direction::Right))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_restart_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn test_gate_drops_moves_while_busy() {
        let up = KeyEvent::from(KeyCode::Up);
        assert_eq!(gated_action(up, true, false), Some(GameAction::Move(Direction::Forward)));
        assert_eq!(gated_action(up, false, false), None);
        assert_eq!(gated_action(up, false, true), None);
    }

    #[test]
    fn test_gate_offers_restart_only_after_game_over() {
        let r = KeyEvent::from(KeyCode::Char('r'));
        assert_eq!(gated_action(r, true, false), None);
        assert_eq!(gated_action(r, false, true), Some(GameAction::Restart));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
