//! Terminal styling and capability detection.
//!
//! Cell colours follow the usual maze-visualiser scheme: black walls, orange
//! start, turquoise end, green open set, red closed set and a purple route.

/// ANSI escape codes for cell backgrounds and captions.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    /// Black block for walls.
    pub const WALL: &str = "\x1b[30;40m";
    /// Orange (256-color) for the start cell.
    pub const START: &str = "\x1b[1;30;48;5;208m";
    /// Turquoise for the end cell.
    pub const END: &str = "\x1b[1;30;46m";
    /// Green for cells in the open set.
    pub const OPEN: &str = "\x1b[30;42m";
    /// Red for closed cells.
    pub const CLOSED: &str = "\x1b[30;41m";
    /// Purple for the reconstructed route.
    pub const PATH: &str = "\x1b[1;97;45m";
    /// Gray for captions and secondary text.
    pub const GRAY: &str = "\x1b[90m";
    /// Bright bold white for emphasis.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
}

/// Resolved colour codes, either ANSI sequences or empty strings.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub wall: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub open: &'static str,
    pub closed: &'static str,
    pub path: &'static str,
    pub gray: &'static str,
    pub white_bold: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            wall: colors::WALL,
            start: colors::START,
            end: colors::END,
            open: colors::OPEN,
            closed: colors::CLOSED,
            path: colors::PATH,
            gray: colors::GRAY,
            white_bold: colors::WHITE_BOLD,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            wall: "",
            start: "",
            end: "",
            open: "",
            closed: "",
            path: "",
            gray: "",
            white_bold: "",
        }
    }

    /// Palette for the current terminal, or plain when `disabled` is set.
    #[must_use]
    pub fn detect(disabled: bool) -> Self {
        if !disabled && supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn is_plain(&self) -> bool {
        self.reset.is_empty()
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect(false)
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects `NO_COLOR` (https://no-color.org/) and `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Check if the terminal advertises Unicode through `LANG` or `LC_ALL`.
#[must_use]
pub fn supports_unicode() -> bool {
    ["LC_ALL", "LANG"].iter().any(|key| {
        std::env::var(key)
            .map(|value| value.to_uppercase().contains("UTF"))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    #[test]
    fn test_color_palette_colored() {
        let p = ColorPalette::colored();
        assert!(!p.reset.is_empty());
        assert!(!p.wall.is_empty());
        assert!(!p.is_plain());
    }

    #[test]
    fn test_color_palette_plain() {
        let p = ColorPalette::plain();
        assert!(p.reset.is_empty());
        assert!(p.path.is_empty());
        assert!(p.is_plain());
    }

    #[test]
    fn test_detect_respects_disable_flag() {
        assert!(ColorPalette::detect(true).is_plain());
    }

    // Environment variables are process-global; serialize tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn with_env_vars<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let saved: Vec<_> = vars.iter().map(|(k, _)| (*k, env::var_os(k))).collect();

        for (key, value) in vars {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }

        let result = f();

        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
        result
    }

    #[test]
    fn test_supports_color_no_color_set() {
        with_env_vars(&[("NO_COLOR", Some("1")), ("TERM", None)], || {
            assert!(!supports_color(), "NO_COLOR=1 should disable colors");
        });
    }

    #[test]
    fn test_supports_color_term_dumb() {
        with_env_vars(&[("NO_COLOR", None), ("TERM", Some("dumb"))], || {
            assert!(!supports_color(), "TERM=dumb should disable colors");
        });
    }

    #[test]
    fn test_supports_color_default() {
        with_env_vars(
            &[("NO_COLOR", None), ("TERM", Some("xterm-256color"))],
            || {
                assert!(supports_color(), "Normal terminal should support colors");
            },
        );
    }

    #[test]
    fn test_supports_unicode_lang_utf8() {
        with_env_vars(&[("LANG", Some("en_US.UTF-8")), ("LC_ALL", None)], || {
            assert!(supports_unicode());
        });
    }

    #[test]
    fn test_supports_unicode_no_utf_hint() {
        with_env_vars(&[("LANG", Some("C")), ("LC_ALL", None)], || {
            assert!(!supports_unicode());
        });
    }
}
