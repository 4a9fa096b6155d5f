use super::keymap::{KeyConfig, KeyMap};
use crate::components::Dropdown;
use crate::config::AppConfig;
use crate::domain::{demo_options, DropdownOption};
use crate::theme::{PaletteType, Theme};
use chrono::{DateTime, Local};
use std::sync::Arc;

pub const HISTORY_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRecord {
    /// Empty when the selection was cleared.
    pub value: String,
    pub at: DateTime<Local>,
}

#[derive(Debug)]
pub struct AppState {
    // --- Status ---
    pub should_quit: bool,
    pub status_message: Option<String>, // "Selected: Three"

    // --- Component ---
    pub dropdown: Dropdown,

    // --- Listener Output ---
    pub history: Vec<ChangeRecord>,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: PaletteType,
    pub theme: Theme,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            dropdown: Dropdown::new(config.options),
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            palette_type: config.theme,
            theme: Theme::from_palette_type(config.theme),
            ..Default::default()
        }
    }

    pub fn with_options(options: Vec<DropdownOption>) -> Self {
        Self {
            dropdown: Dropdown::new(options),
            ..Default::default()
        }
    }

    pub fn last_change(&self) -> Option<&ChangeRecord> {
        self.history.first()
    }

    pub fn record_change(&mut self, value: String) {
        self.status_message = Some(if value.is_empty() {
            "Selection cleared".to_string()
        } else {
            format!("Selected: {value}")
        });
        self.history.insert(
            0,
            ChangeRecord {
                value,
                at: Local::now(),
            },
        );
        self.history.truncate(HISTORY_LIMIT);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            status_message: None,
            dropdown: Dropdown::new(demo_options()),
            history: Vec::new(),
            frame_count: 0,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            palette_type: PaletteType::CatppuccinMocha,
            theme: Theme::default(),
        }
    }
}
