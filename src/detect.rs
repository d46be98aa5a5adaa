//! Operating-system classification from user-agent strings.

use std::fmt;

/// Platform variants the bridge distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    Unknown,
}

impl Platform {
    /// Classify a user-agent string.
    ///
    /// The `android` probe is case-insensitive and checked first, so a UA
    /// that also carries Apple-device tokens (desktop-mode spoofing, webview
    /// shells) still classifies as Android. The Apple probe matches the
    /// literal `iPad`/`iPhone`/`iPod` tokens only.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.to_ascii_lowercase().contains("android") {
            return Self::Android;
        }
        if ["iPad", "iPhone", "iPod"]
            .iter()
            .any(|token| user_agent.contains(token))
        {
            return Self::Ios;
        }
        Self::Unknown
    }

    /// True when automatic launch is supported on this platform.
    pub fn supports_launch(self) -> bool {
        self == Self::Android
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Android => "Android",
            Self::Ios => "iOS",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}
