use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME: Theme = Theme::Dark;

pub const DARK_CSS: &str = r#"
body { background: #181818; color: #eee; }
th, td { border: 1px solid #444; }
th { background: #222; }
a, input[type="submit"] { color: #8cf; }
.server-time { color: #aaa; }
.toggle-btn { background: #333; color: #eee; }
tr { border-bottom: 2px solid #222; }
"#;

pub const LIGHT_CSS: &str = r#"
body { background: #fff; color: #222; }
th, td { border: 1px solid #ccc; }
th { background: #f0f0f0; }
a, input[type="submit"] { color: #06c; }
.server-time { color: #555; }
.toggle-btn { background: #eee; color: #222; }
tr { border-bottom: 2px solid #eee; }
"#;

/// Visual variant of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Interprets a persisted value. Only the exact literal `"light"` selects
    /// the light theme; anything else, including no value, means dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => DEFAULT_THEME,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            Theme::Dark => DARK_CSS,
            Theme::Light => LIGHT_CSS,
        }
    }

    /// Label for the toggle control: it names the theme a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to Light Mode",
            Theme::Light => "Switch to Dark Mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn next_theme(current: Theme) -> Theme {
    current.toggled()
}
