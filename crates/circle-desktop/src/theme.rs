//! Colors for the desktop app

/// Environment variable selecting `light` or `dark`
pub const THEME_ENV: &str = "CIRCLE_THEME";

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Parse a theme name; anything other than `dark` is light
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Theme picked through [`THEME_ENV`], light when unset
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(THEME_ENV).map_or(Self::Light, |name| Self::from_name(&name))
    }

    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub danger: &'static str,
    pub overlay: &'static str,
}

pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f7f7f5",
    bg_tertiary: "#eeeeea",
    text_primary: "#1f2328",
    text_secondary: "#57606a",
    text_muted: "#8c959f",
    border: "#d8dee4",
    accent: "#0f766e",
    accent_text: "#ffffff",
    danger: "#cf222e",
    overlay: "rgba(15, 23, 42, 0.35)",
};

pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#161b22",
    bg_secondary: "#1c2128",
    bg_tertiary: "#262c36",
    text_primary: "#e6edf3",
    text_secondary: "#9da7b3",
    text_muted: "#6e7681",
    border: "#30363d",
    accent: "#2dd4bf",
    accent_text: "#0d1117",
    danger: "#f85149",
    overlay: "rgba(1, 4, 9, 0.6)",
};
