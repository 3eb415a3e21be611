// =========================================================
// 运行时配置 (Runtime Configuration)
// =========================================================

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";

const ENV_API_URL: &str = "GAMESHELF_API_URL";
const ENV_API_URL_FALLBACK: &str = "API_BASE_URL";

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let url: String = api_base_url.into();
        Self {
            api_base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve through an arbitrary lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = [ENV_API_URL, ENV_API_URL_FALLBACK]
            .into_iter()
            .filter_map(|key| lookup(key))
            .find(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Self::new(url)
    }

    /// Join the base URL with an API path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base_url, path)
        } else {
            format!("{}/{}", self.api_base_url, path)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
