//! Key binding parsing and matching.

use crate::config::KeyBindings;
use crate::error::{Error, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::str::FromStr;

/// A single key binding such as `q`, `Enter` or `Ctrl+r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Check if a key event triggers this binding.
    ///
    /// Shift is ignored for character keys since terminals report it
    /// inconsistently for symbols like `?`.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let relevant = match self.code {
            KeyCode::Char(_) => KeyModifiers::CONTROL | KeyModifiers::ALT,
            _ => KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT,
        };
        key.code == self.code && (key.modifiers & relevant) == (self.modifiers & relevant)
    }
}

impl FromStr for KeyBinding {
    type Err = Error;

    fn from_str(binding: &str) -> Result<Self> {
        let invalid = || Error::config(format!("invalid key binding: {binding:?}"));

        let (modifier_part, key) = if binding == "+" {
            ("", "+")
        } else if let Some(prefix) = binding.strip_suffix("++") {
            (prefix, "+")
        } else {
            binding.rsplit_once('+').unwrap_or(("", binding))
        };

        if key.is_empty() {
            return Err(invalid());
        }

        let mut modifiers = KeyModifiers::NONE;
        for part in modifier_part.split('+').filter(|p| !p.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return Err(invalid()),
            }
        }

        let code = match key.to_lowercase().as_str() {
            "enter" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            s if s.len() > 1 && s.starts_with('f') => s[1..]
                .parse::<u8>()
                .map(KeyCode::F)
                .map_err(|_| invalid())?,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(invalid()),
                }
            }
        };

        Ok(Self { code, modifiers })
    }
}

/// Parsed form of the configured key bindings.
#[derive(Debug, Clone)]
pub struct Keymap {
    pub quit: KeyBinding,
    pub help: KeyBinding,
    pub up: KeyBinding,
    pub down: KeyBinding,
    pub select: KeyBinding,
    pub back: KeyBinding,
    pub refresh: KeyBinding,
    pub bets: KeyBinding,
    pub new_bet: KeyBinding,
    pub sign: KeyBinding,
}

impl Keymap {
    /// Parse every binding, failing on the first invalid one.
    pub fn from_config(bindings: &KeyBindings) -> Result<Self> {
        Ok(Self {
            quit: bindings.quit.parse()?,
            help: bindings.help.parse()?,
            up: bindings.up.parse()?,
            down: bindings.down.parse()?,
            select: bindings.select.parse()?,
            back: bindings.back.parse()?,
            refresh: bindings.refresh.parse()?,
            bets: bindings.bets.parse()?,
            new_bet: bindings.new_bet.parse()?,
            sign: bindings.sign.parse()?,
        })
    }
}

impl Default for Keymap {
    fn default() -> Self {
        let char_key = |c| KeyBinding::new(KeyCode::Char(c), KeyModifiers::NONE);
        Self {
            quit: char_key('q'),
            help: char_key('?'),
            up: char_key('k'),
            down: char_key('j'),
            select: KeyBinding::new(KeyCode::Enter, KeyModifiers::NONE),
            back: KeyBinding::new(KeyCode::Esc, KeyModifiers::NONE),
            refresh: char_key('r'),
            bets: char_key('1'),
            new_bet: char_key('2'),
            sign: char_key('s'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_parse_named_and_modified_keys() {
        let binding: KeyBinding = "Ctrl+r".parse().unwrap();
        assert!(binding.matches(&key(KeyCode::Char('r'), KeyModifiers::CONTROL)));
        assert!(!binding.matches(&key(KeyCode::Char('r'), KeyModifiers::NONE)));

        let binding: KeyBinding = "Enter".parse().unwrap();
        assert!(binding.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));

        let binding: KeyBinding = "f5".parse().unwrap();
        assert!(binding.matches(&key(KeyCode::F(5), KeyModifiers::NONE)));
    }

    #[test]
    fn test_shift_is_ignored_for_symbols() {
        let binding: KeyBinding = "?".parse().unwrap();
        assert!(binding.matches(&key(KeyCode::Char('?'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_plus_key() {
        let binding: KeyBinding = "+".parse().unwrap();
        assert!(binding.matches(&key(KeyCode::Char('+'), KeyModifiers::NONE)));

        let binding: KeyBinding = "Alt++".parse().unwrap();
        assert!(binding.matches(&key(KeyCode::Char('+'), KeyModifiers::ALT)));
    }

    #[test]
    fn test_invalid_bindings_are_config_errors() {
        assert!(matches!("Ctrl+".parse::<KeyBinding>(), Err(Error::Config(_))));
        assert!(matches!("hello".parse::<KeyBinding>(), Err(Error::Config(_))));
        assert!(matches!("a+b".parse::<KeyBinding>(), Err(Error::Config(_))));
        assert!(matches!("Ctrl".parse::<KeyBinding>(), Err(Error::Config(_))));
    }

    #[test]
    fn test_default_keymap_matches_default_config() {
        let parsed = Keymap::from_config(&KeyBindings::default()).unwrap();
        let defaults = Keymap::default();
        assert_eq!(parsed.quit, defaults.quit);
        assert_eq!(parsed.select, defaults.select);
        assert_eq!(parsed.sign, defaults.sign);
        assert_eq!(parsed.new_bet, defaults.new_bet);
    }
}
