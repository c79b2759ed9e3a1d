//! Theme system for mint.
//!
//! Two built-in themes are embedded at compile time; users can add their
//! own as TOML files in the themes directory.

mod colors;
mod loader;

pub use colors::Theme;
pub use loader::load_theme;

use ratatui::style::Color;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

const THEME_DEFAULT_TOML: &str = include_str!("../themes/default.toml");
const THEME_MIDNIGHT_TOML: &str = include_str!("../themes/midnight.toml");

static THEME_DEFAULT: OnceLock<Theme> = OnceLock::new();
static THEME_MIDNIGHT: OnceLock<Theme> = OnceLock::new();

// Cache for user-loaded themes
static USER_THEMES: OnceLock<Mutex<HashMap<String, &'static Theme>>> = OnceLock::new();

// Themes directory path (set by app on startup)
static THEMES_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Set the themes directory path (call this at app startup).
pub fn set_themes_dir(path: PathBuf) {
    let _ = THEMES_DIR.set(path);
}

/// Hardcoded fallback theme in case of parse errors.
fn fallback_theme(name: &'static str) -> Theme {
    Theme {
        name,
        bg: Color::Black,
        fg: Color::White,
        accented_bg: Color::DarkGray,
        accented_fg: Color::Cyan,
        selected_bg: Color::Blue,
        selected_fg: Color::White,
        disabled: Color::Gray,
        success: Color::Green,
        warning: Color::Yellow,
        error: Color::Red,
    }
}

fn builtin(cell: &'static OnceLock<Theme>, content: &str, name: &'static str) -> &'static Theme {
    cell.get_or_init(|| {
        loader::load_theme_from_str(content, name).unwrap_or_else(|_| fallback_theme(name))
    })
}

fn get_default_theme() -> &'static Theme {
    builtin(&THEME_DEFAULT, THEME_DEFAULT_TOML, "default")
}

fn get_midnight_theme() -> &'static Theme {
    builtin(&THEME_MIDNIGHT, THEME_MIDNIGHT_TOML, "midnight")
}

/// Try to load user theme from config directory.
fn try_load_user_theme(name: &str) -> Option<&'static Theme> {
    let cache = USER_THEMES.get_or_init(|| Mutex::new(HashMap::new()));

    {
        let cache_lock = cache.lock().ok()?;
        if let Some(theme) = cache_lock.get(name) {
            return Some(*theme);
        }
    }

    let theme_path = THEMES_DIR.get()?.join(format!("{}.toml", name));
    if !theme_path.exists() {
        return None;
    }

    let theme = load_theme(&theme_path).ok()?;

    // Leak the theme to get 'static reference
    let static_theme: &'static Theme = Box::leak(Box::new(theme));

    if let Ok(mut cache_lock) = cache.lock() {
        cache_lock.insert(name.to_string(), static_theme);
    }

    Some(static_theme)
}

impl Theme {
    /// Get theme by name.
    ///
    /// User themes take precedence over built-in ones.
    /// Unknown names fall back to `default`.
    pub fn get_by_name(name: &str) -> &'static Theme {
        if let Some(theme) = try_load_user_theme(name) {
            return theme;
        }

        match name {
            "midnight" => get_midnight_theme(),
            _ => get_default_theme(),
        }
    }

    /// Names of the built-in themes.
    pub fn all_theme_names() -> &'static [&'static str] {
        &["default", "midnight"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_loading() {
        let default = Theme::get_by_name("default");
        assert_eq!(default.name, "default");

        let midnight = Theme::get_by_name("midnight");
        assert_eq!(midnight.name, "midnight");
        assert_eq!(midnight.bg, Color::Black);

        // Unknown theme falls back to default
        let unknown = Theme::get_by_name("nonexistent");
        assert_eq!(unknown.name, "default");
    }

    #[test]
    fn test_builtin_themes_parse() {
        for name in Theme::all_theme_names() {
            let content = match *name {
                "midnight" => THEME_MIDNIGHT_TOML,
                _ => THEME_DEFAULT_TOML,
            };
            assert!(loader::load_theme_from_str(content, "check").is_ok(), "{}", name);
        }
    }
}
