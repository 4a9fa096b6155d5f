use super::action::Action;
use crate::error::ConfigError;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            custom: None,
        }
    }
}

/// Keys not bound here fall through to the text field.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub bindings: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(ctrl('c'), Action::Quit);
        bindings.insert(key(KeyCode::Esc), Action::CancelMode);
        bindings.insert(key(KeyCode::Tab), Action::ToggleMenu);
        bindings.insert(key(KeyCode::Enter), Action::SelectHighlighted);
        bindings.insert(key(KeyCode::Down), Action::HighlightNext);
        bindings.insert(key(KeyCode::Up), Action::HighlightPrev);
        bindings.insert(ctrl('x'), Action::ClearSelection);
        bindings.insert(key(KeyCode::F(2)), Action::CycleTheme);

        if config.profile == "emacs" {
            bindings.insert(ctrl('n'), Action::HighlightNext);
            bindings.insert(ctrl('p'), Action::HighlightPrev);
            bindings.insert(ctrl('g'), Action::CancelMode);
        } else if config.profile != "default" {
            warn!(profile = %config.profile, "unknown key profile, using default");
        }

        for (key_name, name) in config.custom.iter().flatten() {
            match parse_binding(key_name, name) {
                Ok((event, action)) => {
                    bindings.insert(event, action);
                }
                Err(err) => warn!(%err, "skipping key binding"),
            }
        }

        Self { bindings }
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .get(&KeyEvent::new(event.code, event.modifiers))
            .cloned()
    }
}

fn parse_binding(key_name: &str, name: &str) -> Result<(KeyEvent, Action), ConfigError> {
    let action =
        Action::from_name(name).ok_or_else(|| ConfigError::UnknownAction(name.to_string()))?;
    Ok((parse_key(key_name)?, action))
}

/// Parses `ctrl-x`, `alt-enter`, `f2`, `esc`, `a`...
pub fn parse_key(key_name: &str) -> Result<KeyEvent, ConfigError> {
    let unknown = || ConfigError::UnknownKey(key_name.to_string());
    let lower = key_name.to_lowercase();
    let mut parts: Vec<&str> = lower.split('-').collect();
    let code = parts.pop().filter(|c| !c.is_empty()).ok_or_else(unknown)?;

    let mut modifiers = KeyModifiers::empty();
    for part in parts {
        match part {
            "ctrl" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            _ => return Err(unknown()),
        }
    }

    let code = match code {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => {
            KeyCode::F(f[1..].parse().map_err(|_| unknown())?)
        }
        c => {
            let mut chars = c.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => return Err(unknown()),
            }
        }
    };
    Ok(KeyEvent::new(code, modifiers))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
