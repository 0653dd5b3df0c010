//! Operating-system specifics: which platform we run on, how it names the
//! home directory, and how it opens a URL in the default browser.

use std::collections::HashMap;
use std::fmt;

use crate::launcher::Invocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux, the BSDs and anything else with `xdg-open`.
    Unix,
}

/// How a platform opens a URL: a program and the arguments placed before the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlOpener {
    pub program: &'static str,
    pub leading_args: &'static [&'static str],
}

const URL_OPENERS: &[(Platform, UrlOpener)] = &[
    (
        Platform::Windows,
        UrlOpener {
            program: "rundll32",
            leading_args: &["url.dll,FileProtocolHandler"],
        },
    ),
    (
        Platform::MacOs,
        UrlOpener {
            program: "open",
            leading_args: &[],
        },
    ),
    (
        Platform::Unix,
        UrlOpener {
            program: "xdg-open",
            leading_args: &[],
        },
    ),
];

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }

    /// Environment variable holding the user's home directory.
    pub fn home_var(self) -> &'static str {
        match self {
            Platform::Windows => "USERPROFILE",
            Platform::MacOs | Platform::Unix => "HOME",
        }
    }

    pub fn url_opener(self) -> UrlOpener {
        URL_OPENERS
            .iter()
            .find(|(platform, _)| *platform == self)
            .map(|(_, opener)| *opener)
            .unwrap_or(UrlOpener {
                program: "xdg-open",
                leading_args: &[],
            })
    }

    /// The invocation that opens `url` in the default browser.
    pub fn open_url_invocation(self, url: &str) -> Invocation {
        let opener = self.url_opener();
        Invocation::new(opener.program)
            .args(opener.leading_args.iter().copied())
            .arg(url)
    }

    /// Editor command used when the config does not name one.
    pub fn default_editor(self) -> &'static str {
        match self {
            // VS Code ships a batch shim on Windows, which needs its extension.
            Platform::Windows => "code.cmd",
            Platform::MacOs | Platform::Unix => "code",
        }
    }

    /// Whether the tray menu can be shown on this platform.
    pub fn supports_tray(self) -> bool {
        !matches!(self, Platform::MacOs)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "Darwin",
            Platform::Unix => "Unix",
        };
        write!(f, "{name}")
    }
}

/// Read access to environment variables.
pub trait Environment {
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment, read at every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }
}

/// A fixed set of variables.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl Environment for MapEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_var_per_platform() {
        assert_eq!(Platform::Windows.home_var(), "USERPROFILE");
        assert_eq!(Platform::MacOs.home_var(), "HOME");
        assert_eq!(Platform::Unix.home_var(), "HOME");
    }

    #[test]
    fn test_open_url_invocation_per_platform() {
        let url = "https://example.com/repo?a=1&b=2";

        let unix = Platform::Unix.open_url_invocation(url);
        assert_eq!(unix.program, "xdg-open");
        assert_eq!(unix.args, vec![url.to_string()]);

        let mac = Platform::MacOs.open_url_invocation(url);
        assert_eq!(mac.program, "open");
        assert_eq!(mac.args, vec![url.to_string()]);

        let windows = Platform::Windows.open_url_invocation(url);
        assert_eq!(windows.program, "rundll32");
        assert_eq!(
            windows.args,
            vec!["url.dll,FileProtocolHandler".to_string(), url.to_string()]
        );
    }

    #[test]
    fn test_every_platform_has_an_opener() {
        for platform in [Platform::Windows, Platform::MacOs, Platform::Unix] {
            assert!(URL_OPENERS.iter().any(|(p, _)| *p == platform));
        }
    }

    #[test]
    fn test_tray_disabled_on_macos_only() {
        assert!(!Platform::MacOs.supports_tray());
        assert!(Platform::Windows.supports_tray());
        assert!(Platform::Unix.supports_tray());
    }

    #[test]
    fn test_map_environment() {
        let env = MapEnvironment::new().with("HOME", "/home/u");
        assert_eq!(env.var("HOME").as_deref(), Some("/home/u"));
        assert!(env.var("USERPROFILE").is_none());
    }
}
