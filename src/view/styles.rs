//! Screen styling.
//!
//! All colors go through [`ScreenStyles`] so `--no-color` / `NO_COLOR` can
//! strip them in one place.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether color output is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// `--no-color` wins, then any value of `NO_COLOR`, otherwise colors are on.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ScreenStyles =====

/// Styles for every element of the form.
///
/// Highlight and focus styles keep their modifiers (reverse, bold) when colors
/// are disabled so the selection stays visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenStyles {
    pub border: Style,
    pub focused_border: Style,
    pub highlight: Style,
    pub favorite_marker: Style,
    pub placeholder: Style,
    pub error: Style,
    pub hint: Style,
    pub tab_active: Style,
    pub wheel_selected: Style,
    pub wheel_active_column: Style,
}

impl ScreenStyles {
    pub fn with_color_config(config: ColorConfig) -> Self {
        let reverse = Style::default().add_modifier(Modifier::REVERSED);
        let bold = Style::default().add_modifier(Modifier::BOLD);

        if config.colors_enabled() {
            Self {
                border: Style::default().fg(Color::Gray),
                focused_border: Style::default().fg(Color::Cyan),
                highlight: Style::default()
                    .bg(Color::Cyan)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                favorite_marker: Style::default().fg(Color::Yellow),
                placeholder: Style::default().fg(Color::DarkGray),
                error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                hint: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                tab_active: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                wheel_selected: Style::default()
                    .bg(Color::Cyan)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                wheel_active_column: Style::default().fg(Color::Cyan),
            }
        } else {
            Self {
                border: Style::default(),
                focused_border: bold,
                highlight: reverse,
                favorite_marker: Style::default(),
                placeholder: Style::default(),
                error: bold,
                hint: Style::default(),
                tab_active: reverse,
                wheel_selected: reverse,
                wheel_active_column: bold,
            }
        }
    }

    /// Border style for a block that may hold focus.
    pub fn border_for(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.border
        }
    }
}

impl Default for ScreenStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}
