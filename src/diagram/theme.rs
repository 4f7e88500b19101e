//! PlantUML theme catalog and per-session theme selection

use rand::seq::IndexedRandom;
use serde::Serialize;

/// Themes shipped with the PlantUML server
pub const THEMES: &[&str] = &[
    "amiga",
    "aws-orange",
    "black-knight",
    "bluegray",
    "blueprint",
    "carbon-gray",
    "cerulean-outline",
    "cerulean",
    "cloudscape-design",
    "crt-amber",
    "crt-green",
    "cyborg-outline",
    "cyborg",
    "hacker",
    "lightgray",
    "mars",
    "materia-outline",
    "materia",
    "metal",
    "mimeograph",
    "minty",
    "mono",
    "_none_",
    "plain",
    "reddress-darkblue",
    "reddress-darkgreen",
    "reddress-darkorange",
    "reddress-darkred",
    "reddress-lightblue",
    "reddress-lightgreen",
    "reddress-lightorange",
    "reddress-lightred",
    "sandstone",
    "silver",
    "sketchy-outline",
    "sketchy",
    "spacelab-white",
    "spacelab",
    "sunlust",
    "superhero-outline",
    "superhero",
    "toy",
    "united",
    "vibrant",
];

const THEME_DIRECTIVE: &str = "!theme";

pub fn is_known_theme(name: &str) -> bool {
    THEMES.contains(&name)
}

/// Whether the source already picks its own theme
pub fn has_inline_theme(code: &str) -> bool {
    code.contains(THEME_DIRECTIVE)
}

/// Insert a `!theme` directive right after the opening `@start...` line.
pub fn apply_theme(code: &str, theme: &str) -> String {
    let mut lines: Vec<&str> = code.lines().collect();
    let directive = format!("{} {}", THEME_DIRECTIVE, theme);
    let at = lines.len().min(1);
    lines.insert(at, &directive);
    lines.join("\n")
}

/// State of the lazily chosen random theme
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "theme", rename_all = "snake_case")]
pub enum RandomTheme {
    /// Nothing drawn yet
    #[default]
    Unset,
    Chosen(String),
    /// The user dismissed the random theme for this session
    Removed,
}

/// Theme choice for one session
#[derive(Debug, Clone, Default, Serialize)]
pub struct ThemeSelection {
    /// Theme picked explicitly from the selector
    pub selected: Option<String>,
    pub random: RandomTheme,
}

impl ThemeSelection {
    /// Resolve the theme to render `code` with, drawing the random theme on
    /// first use when enabled.
    ///
    /// Returns `None` when the source carries its own `!theme`.
    pub fn effective_theme(&mut self, code: &str, random_enabled: bool) -> Option<String> {
        if has_inline_theme(code) {
            return None;
        }
        if let Some(selected) = &self.selected {
            return Some(selected.clone());
        }
        if random_enabled && self.random == RandomTheme::Unset {
            if let Some(theme) = THEMES.choose(&mut rand::rng()) {
                self.random = RandomTheme::Chosen((*theme).to_string());
            }
        }
        match &self.random {
            RandomTheme::Chosen(theme) => Some(theme.clone()),
            _ => None,
        }
    }

    /// The random theme currently shown, if any
    pub fn random_theme(&self) -> Option<&str> {
        match &self.random {
            RandomTheme::Chosen(theme) => Some(theme),
            _ => None,
        }
    }

    pub fn remove_random(&mut self) {
        self.random = RandomTheme::Removed;
    }

    /// Render `code` with the effective theme applied
    pub fn themed_source(&mut self, code: &str, random_enabled: bool) -> String {
        match self.effective_theme(code, random_enabled) {
            Some(theme) => apply_theme(code, &theme),
            None => code.to_string(),
        }
    }
}
