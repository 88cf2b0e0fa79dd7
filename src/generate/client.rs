//! HTTP client for the generation service.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors surfaced by the generation transport. No retry is performed at
/// this layer; callers show a notice and leave prior preview content
/// unchanged.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Network-level failure (connect, timeout, body read).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("generation service returned HTTP {0}")]
    Status(u16),

    /// The response body was not the expected JSON document.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The configured endpoint could not be parsed or joined.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Generated page content returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedPage {
    /// Page markup (plain HTML5 tags, no scripts requested)
    pub html: String,
    /// Stylesheet for layout, colors, and typography
    pub css: String,
}

#[derive(Serialize)]
struct DrawingRequest<'a> {
    /// PNG snapshot, standard base64, no data-URI prefix.
    #[serde(rename = "imageBase64")]
    image_base64: String,
    prompt: &'a str,
}

#[derive(Serialize)]
struct PromptRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize, Default, Debug)]
struct PageFields {
    html: Option<String>,
    css: Option<String>,
}

/// Both response shapes observed from the service: page fields nested
/// under `parsed`, or at the top level. Neither is canonical; this is a
/// transport-versioning shim, and `parsed` wins per field when present.
#[derive(Deserialize, Debug)]
struct ResponseBody {
    parsed: Option<PageFields>,
    html: Option<String>,
    css: Option<String>,
}

impl ResponseBody {
    fn into_page(self) -> GeneratedPage {
        let parsed = self.parsed.unwrap_or_default();
        let html = parsed.html.or(self.html);
        let css = parsed.css.or(self.css);
        if html.is_none() || css.is_none() {
            warn!("generation response missing html/css fields; using empty content");
        }
        GeneratedPage {
            html: html.unwrap_or_default(),
            css: css.unwrap_or_default(),
        }
    }
}

/// Client for the generation service's two fixed endpoints.
pub struct GenerateClient {
    base_url: Url,
    client: reqwest::Client,
}

impl GenerateClient {
    /// Creates a client for the given base URL with a request timeout.
    ///
    /// The base URL should end with a trailing slash so the fixed API
    /// paths join underneath it.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GenerateError> {
        let base_url = Url::parse(base_url)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, client })
    }

    /// Requests page generation from an exported drawing.
    ///
    /// The raster snapshot travels base64-encoded alongside the drawing
    /// prompt; the vector document is interpreted service-side from the
    /// image, so only the PNG is sent.
    pub async fn from_drawing(
        &self,
        png: &[u8],
        prompt: &str,
    ) -> Result<GeneratedPage, GenerateError> {
        let url = self.base_url.join("api/generate/from-drawing")?;
        let request = DrawingRequest {
            image_base64: BASE64.encode(png),
            prompt,
        };
        self.post(url, &request).await
    }

    /// Requests page generation from a free-text description.
    pub async fn from_prompt(&self, prompt: &str) -> Result<GeneratedPage, GenerateError> {
        let url = self.base_url.join("api/generate/from-prompt")?;
        self.post(url, &PromptRequest { prompt }).await
    }

    async fn post<T: Serialize>(&self, url: Url, body: &T) -> Result<GeneratedPage, GenerateError> {
        debug!("POST {url}");
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Status(status.as_u16()));
        }
        let bytes = response.bytes().await?;
        let body: ResponseBody = serde_json::from_slice(&bytes)?;
        Ok(body.into_page())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GeneratedPage {
        let body: ResponseBody = serde_json::from_str(json).unwrap();
        body.into_page()
    }

    #[test]
    fn parsed_shape_is_read_first() {
        let page = parse(r#"{"parsed": {"html": "<div>hi</div>", "css": "div{}"}}"#);
        assert_eq!(page.html, "<div>hi</div>");
        assert_eq!(page.css, "div{}");
    }

    #[test]
    fn top_level_shape_is_the_fallback() {
        let page = parse(r#"{"html": "<p>top</p>", "css": "p{}"}"#);
        assert_eq!(page.html, "<p>top</p>");
        assert_eq!(page.css, "p{}");
    }

    #[test]
    fn parsed_fields_win_over_top_level() {
        let page = parse(
            r#"{"parsed": {"html": "<b>inner</b>", "css": "b{}"},
                "html": "<i>outer</i>", "css": "i{}"}"#,
        );
        assert_eq!(page.html, "<b>inner</b>");
        assert_eq!(page.css, "b{}");
    }

    #[test]
    fn missing_fields_degrade_to_empty_strings() {
        let page = parse(r#"{"parsed": {}}"#);
        assert_eq!(page, GeneratedPage::default());

        let page = parse(r#"{}"#);
        assert_eq!(page, GeneratedPage::default());
    }

    #[test]
    fn mixed_shapes_fall_back_per_field() {
        let page = parse(r#"{"parsed": {"html": "<div/>"}, "css": "body{}"}"#);
        assert_eq!(page.html, "<div/>");
        assert_eq!(page.css, "body{}");
    }

    #[test]
    fn undecodable_body_is_malformed_response() {
        let result: Result<ResponseBody, _> = serde_json::from_str("not json");
        let err = GenerateError::from(result.unwrap_err());
        assert!(matches!(err, GenerateError::MalformedResponse(_)));
    }

    #[test]
    fn drawing_request_serializes_the_original_wire_names() {
        let request = DrawingRequest {
            image_base64: BASE64.encode(b"png"),
            prompt: "make a page",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("imageBase64").is_some());
        assert_eq!(json["prompt"], "make a page");
    }
}
