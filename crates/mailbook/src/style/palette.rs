//! Color palette with light and dark theme support.

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Primary brand color.
    pub primary: Color,
    /// Lighter primary for hover states.
    pub primary_light: Color,
    /// Darker primary for pressed states.
    pub primary_dark: Color,

    /// Card and panel surface.
    pub surface: Color,
    /// Window background.
    pub background: Color,

    /// Main text color.
    pub text_primary: Color,
    /// Muted/secondary text.
    pub text_secondary: Color,
    /// Text on top of the primary color.
    pub text_on_primary: Color,

    /// Success/confirmation accent.
    pub accent_green: Color,
    /// Destructive-action accent.
    pub accent_red: Color,

    /// Subtle hover background.
    pub hover: Color,
    /// Subtle border.
    pub border_subtle: Color,
    /// Medium border for focused inputs.
    pub border_medium: Color,
}

impl Palette {
    /// Creates the light theme palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.05, 0.60, 0.56), // Teal, like the web UI brand
            primary_light: Color::from_rgb(0.20, 0.72, 0.67),
            primary_dark: Color::from_rgb(0.0, 0.47, 0.44),

            surface: Color::WHITE,
            background: Color::from_rgb(0.97, 0.98, 0.98),

            text_primary: Color::from_rgb(0.10, 0.12, 0.15),
            text_secondary: Color::from_rgb(0.42, 0.46, 0.52),
            text_on_primary: Color::WHITE,

            accent_green: Color::from_rgb(0.15, 0.65, 0.37),
            accent_red: Color::from_rgb(0.86, 0.23, 0.27),

            hover: Color::from_rgb(0.95, 0.97, 0.97),
            border_subtle: Color::from_rgb(0.90, 0.92, 0.93),
            border_medium: Color::from_rgb(0.80, 0.83, 0.85),
        }
    }

    /// Creates the dark theme palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.10, 0.78, 0.72),
            primary_light: Color::from_rgb(0.25, 0.88, 0.82),
            primary_dark: Color::from_rgb(0.05, 0.62, 0.57),

            surface: Color::from_rgb(0.12, 0.13, 0.15),
            background: Color::from_rgb(0.08, 0.09, 0.11),

            text_primary: Color::from_rgb(0.92, 0.93, 0.95),
            text_secondary: Color::from_rgb(0.62, 0.66, 0.70),
            text_on_primary: Color::from_rgb(0.05, 0.09, 0.09),

            accent_green: Color::from_rgb(0.25, 0.85, 0.50),
            accent_red: Color::from_rgb(1.0, 0.38, 0.42),

            hover: Color::from_rgb(0.15, 0.16, 0.18),
            border_subtle: Color::from_rgb(0.20, 0.21, 0.24),
            border_medium: Color::from_rgb(0.30, 0.31, 0.34),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette, swapped when the theme toggles.
static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::light()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::light(), |p| *p)
}
