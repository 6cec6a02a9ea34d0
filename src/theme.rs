use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// The theme to render. Before hydration this is what the server
    /// rendered, which knows neither the stored choice nor the preference.
    pub fn resolve(choice: Option<Theme>, prefers_dark: bool, hydrated: bool) -> Self {
        if !hydrated {
            return Theme::from_preference(false);
        }
        choice.unwrap_or_else(|| Theme::from_preference(prefers_dark))
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Glyph on the toggle button: it shows where a click takes you.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub success: &'static str,
    pub text: TextColors,
}

pub static LIGHT: Palette = Palette {
    background: "#ffffff",
    surface: "#f8fafc",
    primary: "#2563eb",
    secondary: "#7c3aed",
    accent: "#0891b2",
    success: "#059669",
    text: TextColors {
        primary: "#0f172a",
        secondary: "#475569",
        accent: "#2563eb",
    },
};

pub static DARK: Palette = Palette {
    background: "#0f172a",
    surface: "#1e293b",
    primary: "#60a5fa",
    secondary: "#a78bfa",
    accent: "#22d3ee",
    success: "#34d399",
    text: TextColors {
        primary: "#f1f5f9",
        secondary: "#94a3b8",
        accent: "#60a5fa",
    },
};

impl Palette {
    fn entries(&self) -> [(&'static str, &'static str); 9] {
        [
            ("background", self.background),
            ("surface", self.surface),
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("success", self.success),
            ("text-primary", self.text.primary),
            ("text-secondary", self.text.secondary),
            ("text-accent", self.text.accent),
        ]
    }

    /// Inline style declaring the palette as `--color-*` custom properties.
    pub fn css_variables(&self) -> String {
        self.entries()
            .iter()
            .map(|(name, value)| format!("--color-{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::from_preference(true), Theme::Dark);
        assert_eq!(Theme::from_preference(false), Theme::Light);
        assert_eq!(Theme::Dark.toggle_icon(), "☀️");
    }

    #[test]
    fn test_resolve() {
        // first client render must match the server
        assert_eq!(Theme::resolve(Some(Theme::Dark), true, false), Theme::Light);
        assert_eq!(Theme::resolve(None, true, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false, true), Theme::Light);
        assert_eq!(Theme::resolve(Some(Theme::Light), true, true), Theme::Light);
        assert_eq!(Theme::resolve(Some(Theme::Dark), false, true), Theme::Dark);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
        assert_eq!(Theme::Dark.palette().background, "#0f172a");
    }

    #[test]
    fn test_css_variables() {
        let css = LIGHT.css_variables();
        assert!(css.starts_with("--color-background: #ffffff;"));
        assert!(css.contains("--color-text-secondary: #475569;"));
        assert_eq!(css.matches("--color-").count(), 9);
    }

    #[test]
    fn test_stored_form() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"dark\"").unwrap(),
            Theme::Dark
        );
    }
}
