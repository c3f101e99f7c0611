//! AI font suggestion client
//!
//! Talks to a Gemini-style generateContent endpoint for pairing suggestions
//! and font discovery. Every failure path (missing key, network error, bad
//! payload) degrades to a fixed fallback value; callers never see a hard
//! error and never retry.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::warn;

use fc_common::Error;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-3-flash-preview";
const API_KEY_ENV: &str = "GEMINI_API_KEY";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// A heading/body font pairing suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontPairing {
    pub heading: String,
    pub body: String,
    pub reason: String,
    pub vibe: String,
}

/// A font surfaced by free-text discovery
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredFont {
    pub family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chinese_name: Option<String>,
    pub category: String,
    pub description: String,
}

/// Fixed pairing returned whenever the remote call fails
pub fn fallback_pairing() -> FontPairing {
    FontPairing {
        heading: "Playfair Display".to_string(),
        body: "Roboto".to_string(),
        reason: "经典的标题衬线体与清爽易读的无衬线体正文完美契合。".to_string(),
        vibe: "优雅且专业".to_string(),
    }
}

/// Client for the generative suggestion service
#[derive(Clone)]
pub struct PairingClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl PairingClient {
    /// Read the API key from the environment; an absent key leaves the
    /// client in permanent-fallback mode rather than failing startup.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        if api_key.is_none() {
            warn!(
                "{} not set; AI suggestions will use static fallbacks",
                API_KEY_ENV
            );
        }
        Self::new(api_key, GEMINI_BASE_URL.to_string())
    }

    /// Client with no key: every call takes the fallback path. Used by tests.
    pub fn disabled() -> Self {
        Self::new(None, GEMINI_BASE_URL.to_string())
    }

    fn new(api_key: Option<String>, base_url: String) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key,
            base_url,
        }
    }

    /// Suggest a heading/body pairing for a project description
    pub async fn get_font_pairing(&self, prompt: &str) -> FontPairing {
        let full_prompt = format!(
            "请为以下描述的项目建议专业的字体搭配：\"{}\"。\
             返回字体名称（必须是流行的 Google Fonts，如 Roboto, Open Sans, \
             Playfair Display, Montserrat 等），并提供中文的推荐理由和风格描述。\
             仅返回 JSON 对象，字段为 heading, body, reason, vibe。",
            prompt
        );

        match self.generate_json(&full_prompt).await {
            Ok(text) => match serde_json::from_str::<FontPairing>(&text) {
                Ok(pairing) => pairing,
                Err(e) => {
                    warn!("Unusable pairing payload, using fallback: {}", e);
                    fallback_pairing()
                }
            },
            Err(e) => {
                warn!("Pairing request failed, using fallback: {}", e);
                fallback_pairing()
            }
        }
    }

    /// Discover 3-5 fonts matching a free-text description. Empty on failure.
    pub async fn discover_fonts(&self, prompt: &str) -> Vec<DiscoveredFont> {
        let full_prompt = format!(
            "根据描述 \"{}\"，发现并列举 3-5 个来自 Google Fonts 的字体。\
             如果是中文字体，请提供其常用的中文名称（如：思源黑体）。\
             请确保这些字体名称在 Google Fonts 库中真实存在。\
             仅返回 JSON 数组，每项字段为 family, chineseName（可选）, \
             category（sans-serif, serif, display, handwriting, monospace 之一）, \
             description。",
            prompt
        );

        match self.generate_json(&full_prompt).await {
            Ok(text) => match serde_json::from_str::<Vec<DiscoveredFont>>(&text) {
                Ok(fonts) => fonts,
                Err(e) => {
                    warn!("Unusable discovery payload, returning none: {}", e);
                    Vec::new()
                }
            },
            Err(e) => {
                warn!("Discovery request failed, returning none: {}", e);
                Vec::new()
            }
        }
    }

    /// One generateContent round trip, returning the raw JSON text the model
    /// produced
    async fn generate_json(&self, prompt: &str) -> fc_common::Result<String> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| Error::Remote("API key not configured".to_string()))?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, GEMINI_MODEL, api_key
        );

        let request_body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseMimeType": "application/json" },
        });

        let response = self
            .http
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Remote(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Remote(format!(
                "Suggestion service returned {}",
                status
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| Error::Remote(format!("Unreadable response: {}", e)))?;

        payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Error::Remote("Unexpected response shape".to_string()))
    }
}
