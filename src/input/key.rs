//! Decoded keyboard events.

use std::fmt;

/// DEL, sent by the Backspace key on most terminals
const DELETE: u8 = 0x7f;

/// One decoded unit of keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// A control character: C0 codes below 0x20, and DEL.
    Control(u8),
    /// A printable character, including wide and multi-byte glyphs.
    Char(char),
}

impl KeyEvent {
    /// The control code produced by holding Ctrl with `letter`.
    ///
    /// Only the low five bits survive, so `ctrl('d')` and `ctrl('D')` are
    /// both 0x04.
    pub const fn ctrl(letter: char) -> Self {
        KeyEvent::Control((letter as u32 & 0x1f) as u8)
    }

    /// Classify a decoded character.
    pub fn from_char(ch: char) -> Self {
        match u8::try_from(ch) {
            Ok(code) if code < 0x20 || code == DELETE => KeyEvent::Control(code),
            _ => KeyEvent::Char(ch),
        }
    }

    pub fn is_control(&self) -> bool {
        matches!(self, KeyEvent::Control(_))
    }

    /// The character this event was decoded from.
    pub fn as_char(&self) -> char {
        match *self {
            KeyEvent::Control(code) => char::from(code),
            KeyEvent::Char(ch) => ch,
        }
    }
}

impl fmt::Display for KeyEvent {
    /// Control characters use caret notation (`^D`, `^?`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            KeyEvent::Control(code) => write!(f, "^{}", char::from(code ^ 0x40)),
            KeyEvent::Char(ch) => write!(f, "{}", ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_masks_letter() {
        assert_eq!(KeyEvent::ctrl('d'), KeyEvent::Control(0x04));
        assert_eq!(KeyEvent::ctrl('D'), KeyEvent::Control(0x04));
        assert_eq!(KeyEvent::ctrl('c'), KeyEvent::Control(0x03));
    }

    #[test]
    fn test_from_char_classification() {
        assert_eq!(KeyEvent::from_char('\u{4}'), KeyEvent::ctrl('d'));
        assert_eq!(KeyEvent::from_char('\r'), KeyEvent::Control(0x0d));
        assert_eq!(KeyEvent::from_char('\u{7f}'), KeyEvent::Control(0x7f));
        assert_eq!(KeyEvent::from_char('a'), KeyEvent::Char('a'));
        assert_eq!(KeyEvent::from_char(' '), KeyEvent::Char(' '));
        assert_eq!(KeyEvent::from_char('é'), KeyEvent::Char('é'));
        assert_eq!(KeyEvent::from_char('漢'), KeyEvent::Char('漢'));
    }

    #[test]
    fn test_display() {
        assert_eq!(KeyEvent::ctrl('d').to_string(), "^D");
        assert_eq!(KeyEvent::Control(0x7f).to_string(), "^?");
        assert_eq!(KeyEvent::Char('ß').to_string(), "ß");
    }

    #[test]
    fn test_as_char() {
        assert_eq!(KeyEvent::ctrl('q').as_char(), '\u{11}');
        assert_eq!(KeyEvent::Char('x').as_char(), 'x');
        assert!(KeyEvent::ctrl('q').is_control());
    }
}
