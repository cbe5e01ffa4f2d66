use std::path::PathBuf;
use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Get the active theme (loaded once on first call).
pub fn current() -> &'static Theme {
    THEME.get_or_init(|| Theme::load().unwrap_or_default())
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub dim: Style,
    pub border: Style,
    pub status: Style,
    pub selected: Style,
    /// Applied to entries at three days left or fewer. Red unless themed.
    pub urgent: Style,
}

/// A preset is six colors mapped onto the style set.
struct Palette {
    text: Color,
    muted: Color,
    frame: Color,
    bar: Color,
    accent: Color,
    alert: Color,
}

impl Palette {
    fn theme(self) -> Theme {
        Theme {
            header: Style::default().fg(self.text).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(self.muted),
            border: Style::default().fg(self.frame),
            status: Style::default().fg(self.text).bg(self.bar),
            selected: Style::default().fg(Color::Black).bg(self.accent),
            urgent: Style::default().fg(self.alert),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Palette {
            text: Color::White,
            muted: Color::DarkGray,
            frame: Color::Gray,
            bar: Color::DarkGray,
            accent: Color::Cyan,
            alert: Color::Red,
        }
        .theme()
    }
}

impl Theme {
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(&path).ok()?;
        let config: ThemeConfig = toml::from_str(&content).ok()?;
        Some(config.into_theme())
    }

    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Self {
        match name {
            "dracula" => Palette {
                text: Color::Rgb(248, 248, 242),
                muted: Color::Rgb(98, 114, 164),
                frame: Color::Rgb(68, 71, 90),
                bar: Color::Rgb(68, 71, 90),
                accent: Color::Rgb(139, 233, 253),
                alert: Color::Rgb(255, 85, 85),
            }
            .theme(),
            "gruvbox" => Palette {
                text: Color::Rgb(235, 219, 178),
                muted: Color::Rgb(146, 131, 116),
                frame: Color::Rgb(102, 92, 84),
                bar: Color::Rgb(80, 73, 69),
                accent: Color::Rgb(131, 165, 152),
                alert: Color::Rgb(251, 73, 52),
            }
            .theme(),
            "nord" => Palette {
                text: Color::Rgb(229, 233, 240),
                muted: Color::Rgb(76, 86, 106),
                frame: Color::Rgb(67, 76, 94),
                bar: Color::Rgb(67, 76, 94),
                accent: Color::Rgb(136, 192, 208),
                alert: Color::Rgb(191, 97, 106),
            }
            .theme(),
            _ => Self::default(),
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("expiry-tui").join("theme.toml"))
}

// ── TOML config types ──

#[derive(Debug, Deserialize, Default)]
struct ThemeConfig {
    preset: Option<String>,
    header_fg: Option<String>,
    dim_fg: Option<String>,
    border_fg: Option<String>,
    status_fg: Option<String>,
    status_bg: Option<String>,
    selected_fg: Option<String>,
    selected_bg: Option<String>,
    urgent_fg: Option<String>,
}

impl ThemeConfig {
    fn into_theme(self) -> Theme {
        let base = self
            .preset
            .as_deref()
            .map(Theme::preset)
            .unwrap_or_default();

        Theme {
            header: with_fg(base.header, self.header_fg.as_deref()),
            dim: with_fg(base.dim, self.dim_fg.as_deref()),
            border: with_fg(base.border, self.border_fg.as_deref()),
            status: with_bg(
                with_fg(base.status, self.status_fg.as_deref()),
                self.status_bg.as_deref(),
            ),
            selected: with_bg(
                with_fg(base.selected, self.selected_fg.as_deref()),
                self.selected_bg.as_deref(),
            ),
            urgent: with_fg(base.urgent, self.urgent_fg.as_deref()),
        }
    }
}

/// Overlay a configured foreground, keeping `style` when the color is absent
/// or does not parse.
fn with_fg(style: Style, color: Option<&str>) -> Style {
    match color.and_then(parse_color) {
        Some(c) => style.fg(c),
        None => style,
    }
}

fn with_bg(style: Style, color: Option<&str>) -> Style {
    match color.and_then(parse_color) {
        Some(c) => style.bg(c),
        None => style,
    }
}

/// Parse a color string: `#rrggbb` hex, a named color, or an ANSI index.
/// ratatui's `FromStr` for `Color` covers all three.
fn parse_color(s: &str) -> Option<Color> {
    s.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color_reads_hex() {
        assert_eq!(parse_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color(" #00ff7f "), Some(Color::Rgb(0, 255, 127)));
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color("#fff"), None);
    }

    #[test]
    fn parse_color_reads_names() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("DarkGrey"), Some(Color::DarkGray));
        assert_eq!(parse_color("mauve"), None);
    }

    #[test]
    fn default_theme_flags_urgent_in_red() {
        assert_eq!(Theme::default().urgent.fg, Some(Color::Red));
    }

    #[test]
    fn config_starts_from_the_preset_and_overrides() {
        let config: ThemeConfig =
            toml::from_str("preset = \"gruvbox\"\nurgent_fg = \"#ff0000\"\n").unwrap();

        let theme = config.into_theme();

        assert_eq!(theme.urgent.fg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(theme.header.fg, Some(Color::Rgb(235, 219, 178)));
    }

    #[test]
    fn bad_override_colors_leave_the_preset_alone() {
        let config: ThemeConfig = toml::from_str("urgent_fg = \"definitely-not\"\n").unwrap();

        assert_eq!(config.into_theme().urgent.fg, Some(Color::Red));
    }

    #[test]
    fn unknown_preset_falls_back_to_default() {
        let theme = Theme::preset("solarized");
        assert_eq!(theme.urgent.fg, Some(Color::Red));
    }
}
