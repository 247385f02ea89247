//! External links shown in the header and footer
//!
//! Values are baked in at build time from `INKFINITY_*` environment variables
//! so the server render and the hydrated client agree on every href.

/// Every configurable external link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKey {
    App,
    Whitepaper,
    Discord,
    Github,
    X,
    Telegram,
    Terms,
    Privacy,
}

impl LinkKey {
    pub const ALL: [LinkKey; 8] = [
        LinkKey::App,
        LinkKey::Whitepaper,
        LinkKey::Discord,
        LinkKey::Github,
        LinkKey::X,
        LinkKey::Telegram,
        LinkKey::Terms,
        LinkKey::Privacy,
    ];

    /// Name of the build-time environment variable
    pub fn env_var(&self) -> &'static str {
        match self {
            LinkKey::App => "INKFINITY_APP_URL",
            LinkKey::Whitepaper => "INKFINITY_WHITEPAPER_URL",
            LinkKey::Discord => "INKFINITY_DISCORD_URL",
            LinkKey::Github => "INKFINITY_GITHUB_URL",
            LinkKey::X => "INKFINITY_X_URL",
            LinkKey::Telegram => "INKFINITY_TELEGRAM_URL",
            LinkKey::Terms => "INKFINITY_TERMS_URL",
            LinkKey::Privacy => "INKFINITY_PRIVACY_URL",
        }
    }

    fn configured(&self) -> Option<&'static str> {
        match self {
            LinkKey::App => option_env!("INKFINITY_APP_URL"),
            LinkKey::Whitepaper => option_env!("INKFINITY_WHITEPAPER_URL"),
            LinkKey::Discord => option_env!("INKFINITY_DISCORD_URL"),
            LinkKey::Github => option_env!("INKFINITY_GITHUB_URL"),
            LinkKey::X => option_env!("INKFINITY_X_URL"),
            LinkKey::Telegram => option_env!("INKFINITY_TELEGRAM_URL"),
            LinkKey::Terms => option_env!("INKFINITY_TERMS_URL"),
            LinkKey::Privacy => option_env!("INKFINITY_PRIVACY_URL"),
        }
        .filter(|url| !url.is_empty())
    }
}

/// Configured URL for `key`, or `"#"` when it was not set at build time.
pub fn get_url(key: LinkKey) -> &'static str {
    key.configured().unwrap_or("#")
}

/// Keys without a configured URL
pub fn missing_links() -> Vec<LinkKey> {
    LinkKey::ALL
        .into_iter()
        .filter(|key| key.configured().is_none())
        .collect()
}

pub fn is_external_url(url: &str) -> bool {
    url.starts_with("http")
}

/// Href safe to render: `"#"` for empty input or malformed absolute URLs,
/// relative paths pass through.
pub fn safe_url(url: &str) -> &str {
    if url.is_empty() {
        return "#";
    }
    if is_external_url(url) && !is_well_formed_absolute(url) {
        tracing::warn!(url, "invalid external url");
        return "#";
    }
    url
}

fn is_well_formed_absolute(url: &str) -> bool {
    let Some((scheme, rest)) = url.split_once("://") else {
        return false;
    };
    if !matches!(scheme, "http" | "https") {
        return false;
    }
    let host = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = host.rsplit('@').next().unwrap_or_default();
    !host.is_empty() && !host.contains(char::is_whitespace) && !host.starts_with(':')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_url() {
        assert!(is_external_url("https://discord.gg/inkfinity"));
        assert!(is_external_url("http://example.com"));
        assert!(!is_external_url("/early-access"));
        assert!(!is_external_url("#about"));
    }

    #[test]
    fn test_safe_url_passes_valid_urls() {
        assert_eq!(safe_url("https://github.com/inkfinity"), "https://github.com/inkfinity");
        assert_eq!(safe_url("http://localhost:3000/app"), "http://localhost:3000/app");
        assert_eq!(safe_url("/early-access"), "/early-access");
    }

    #[test]
    fn test_safe_url_rejects_malformed() {
        assert_eq!(safe_url(""), "#");
        assert_eq!(safe_url("https://"), "#");
        assert_eq!(safe_url("https:/missing-slash.com"), "#");
        assert_eq!(safe_url("httpx://example.com"), "#");
        assert_eq!(safe_url("https://exa mple.com"), "#");
    }

    #[test]
    fn test_get_url_never_empty() {
        for key in LinkKey::ALL {
            assert!(!get_url(key).is_empty());
        }
    }

    #[test]
    fn test_missing_links_match_fallbacks() {
        let missing = missing_links();
        for key in LinkKey::ALL {
            assert_eq!(missing.contains(&key), get_url(key) == "#");
        }
    }

    #[test]
    fn test_env_var_names_are_unique() {
        let mut names: Vec<_> = LinkKey::ALL.iter().map(|key| key.env_var()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), LinkKey::ALL.len());
    }
}
