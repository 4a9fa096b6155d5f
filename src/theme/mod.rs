use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod layout;
pub mod palette;

pub use layout::{ElementStyle, DROPDOWN_STYLES};
pub use palette::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_item: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,
    pub status_ready: Style,
    pub status_info: Style,

    pub input: Style,
    pub input_cursor: Style,
    pub placeholder: Style,
    pub button: Style,
    pub button_active: Style,

    pub list_item: Style,
    pub highlight: Style,
    pub selected_marker: Style,
    pub timestamp: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    #[serde(rename = "catppuccin")]
    CatppuccinMocha,
    Nord,
    Gruvbox,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
            PaletteType::Gruvbox => "Gruvbox",
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[
            PaletteType::CatppuccinMocha,
            PaletteType::Nord,
            PaletteType::Gruvbox,
        ]
    }

    #[must_use]
    pub fn next(self) -> Self {
        let all = Self::all();
        let i = all.iter().position(|&p| p == self).unwrap_or(0);
        all[(i + 1) % all.len()]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&palette::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&palette::NORD),
            PaletteType::Gruvbox => Self::from_palette(&palette::GRUVBOX),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header: Style::default().bg(p.base).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext0),
            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            input: Style::default().fg(p.text),
            input_cursor: Style::default().fg(p.crust).bg(p.text),
            placeholder: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
            button: Style::default().fg(p.text).bg(p.surface1),
            button_active: Style::default()
                .fg(p.crust)
                .bg(p.mauve)
                .add_modifier(Modifier::BOLD),

            list_item: Style::default().fg(p.text),
            // "lightgray" row of the highlighted item
            highlight: Style::default()
                .bg(p.surface1)
                .fg(p.yellow)
                .add_modifier(Modifier::BOLD),
            selected_marker: Style::default().fg(p.green).add_modifier(Modifier::BOLD),
            timestamp: Style::default().fg(p.peach),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}
