//! Page-location helpers for resolving the backend endpoint in the browser

/// Production endpoint baked into the deployed bundle.
const DEFAULT_BACKEND_URL: &str = "https://api.gaminglounge.app";

/// The public key is injected per deployment; query param override only.
const DEFAULT_ANON_KEY: &str = "";

pub fn backend_url() -> String {
    query_param("backend").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}

pub fn anon_key() -> String {
    query_param("key").unwrap_or_else(|| DEFAULT_ANON_KEY.to_string())
}

fn query_param(name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| {
            search.strip_prefix('?').and_then(|s| {
                s.split('&')
                    .find(|p| p.starts_with(&prefix))
                    .map(|p| p[prefix.len()..].to_string())
            })
        })
        .filter(|v| !v.is_empty())
}
