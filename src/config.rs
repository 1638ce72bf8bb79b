// Bootstrap flags handed to the front-end once at startup
use serde::Serialize;

const DEFAULT_API_URL: &str = "https://api.flathunt.app";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapFlags {
    pub share_api_enabled: bool,
    pub api_base_url: String,
}

impl BootstrapFlags {
    pub fn from_env() -> Self {
        Self {
            // Desktop webviews have no native share sheet; the UI falls back
            // to the clipboard path.
            share_api_enabled: false,
            api_base_url: std::env::var("FLATHUNT_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_serialize_camel_case() {
        let flags = BootstrapFlags {
            share_api_enabled: false,
            api_base_url: DEFAULT_API_URL.to_string(),
        };
        let json = serde_json::to_value(&flags).unwrap();
        assert_eq!(json["shareApiEnabled"], false);
        assert_eq!(json["apiBaseUrl"], DEFAULT_API_URL);
    }
}
