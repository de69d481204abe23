//! Deployment configuration resolved at startup.

/// Compile-time override for the profile image base,
/// e.g. `BABBLE_PROFILE_BASE=https://cdn.example.com/users trunk build`.
const PROFILE_BASE_ENV: Option<&str> = option_env!("BABBLE_PROFILE_BASE");

const DEFAULT_PROFILE_PATH: &str = "/images/users";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub profile_image_base: String,
}

impl AppConfig {
    pub fn new(profile_image_base: impl Into<String>) -> Self {
        let base: String = profile_image_base.into();
        Self {
            profile_image_base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Build the config for the running page.
    ///
    /// Uses `BABBLE_PROFILE_BASE` when it was set at build time, otherwise
    /// serves profile images from the page origin.
    pub fn load() -> Self {
        match PROFILE_BASE_ENV {
            Some(base) if !base.is_empty() => Self::new(base),
            _ => Self::new(format!("{}{}", origin(), DEFAULT_PROFILE_PATH)),
        }
    }

    pub fn profile_image_url(&self, file_name: &str) -> String {
        format!(
            "{}/{}",
            self.profile_image_base,
            urlencoding::encode(file_name)
        )
    }
}

/// Origin of the current page, like "http://localhost:8080".
/// Empty string if window is not available.
pub fn origin() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// True when the page runs inside the Electron desktop shell.
pub fn is_desktop_platform() -> bool {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .map(|ua| ua.contains("Electron"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_trailing_slash_is_trimmed() {
        let config = AppConfig::new("https://cdn.example.com/users/");
        assert_eq!(config.profile_image_base, "https://cdn.example.com/users");
        assert_eq!(
            config.profile_image_url("a.png"),
            "https://cdn.example.com/users/a.png"
        );
    }

    #[test]
    fn test_file_name_is_encoded() {
        let config = AppConfig::new("/images/users");
        assert_eq!(
            config.profile_image_url("my photo.png"),
            "/images/users/my%20photo.png"
        );
    }
}
