//! Light and dark palettes and ANSI escape sequence generation.
//!
//! The palettes mirror the directory's mobile client so terminal output and the
//! app look alike. Colors are hex strings converted to 24-bit ANSI sequences on
//! demand.
//!
//! # Example
//!
//! ```rust
//! use employee_directory::ui::Theme;
//!
//! let theme = Theme::dark();
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! println!("{}primary{}", Theme::fg(theme.colors.primary), Theme::reset());
//! ```

use crate::storage::ThemePreference;

/// Named palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub colors: ThemeColors,
}

/// Color definitions, as `#rrggbb` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// Accent for titles and counts.
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    /// Dimmed text (subtitles, labels).
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

impl Theme {
    #[must_use]
    pub const fn light() -> Self {
        Self {
            name: "light",
            colors: ThemeColors {
                primary: "#3b82f6",
                secondary: "#64748b",
                background: "#ffffff",
                surface: "#f8fafc",
                text: "#1e293b",
                text_secondary: "#64748b",
                border: "#e2e8f0",
                error: "#ef4444",
                success: "#10b981",
            },
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self {
            name: "dark",
            colors: ThemeColors {
                primary: "#60a5fa",
                secondary: "#94a3b8",
                background: "#0f172a",
                surface: "#1e293b",
                text: "#f1f5f9",
                text_secondary: "#94a3b8",
                border: "#334155",
                error: "#f87171",
                success: "#34d399",
            },
        }
    }

    /// Palette for a saved preference.
    #[must_use]
    pub const fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
        }
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Returns white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
