//! Image generation. The API answers with either a URL to download or an
//! inline base64 payload; both end up as raw bytes plus a file extension.

use base64::{Engine as _, engine::general_purpose};
use reportgen_http::check_status;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::{MAX_BODY_BYTES, OpenAiClient};
use crate::error::OpenAiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    /// File extension without the dot, e.g. `png`.
    pub extension: String,
}

pub trait ImageGenerator {
    fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, OpenAiError>;
}

#[derive(Debug, Serialize)]
struct ImageGenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'a str,
    n: u8,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(default)]
    data: Vec<ImagePayload>,
}

#[derive(Debug, Deserialize)]
struct ImagePayload {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    b64_json: Option<String>,
}

impl ImageGenerator for OpenAiClient {
    fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, OpenAiError> {
        let model = self.config.image_model.as_str();
        let request = ImageGenerationRequest {
            model,
            prompt,
            size: &self.config.image_size,
            n: 1,
        };

        info!(model, size = %self.config.image_size, "requesting image generation");

        let mut response = self
            .agent
            .post(self.config.endpoint("/images/generations"))
            .header("Authorization", self.config.bearer())
            .send_json(&request)?;
        check_status(&mut response, MAX_BODY_BYTES)?;

        let parsed: ImageResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| OpenAiError::ResponseParse(e.to_string()))?;

        let payload = parsed
            .data
            .into_iter()
            .next()
            .ok_or_else(|| OpenAiError::ResponseParse("no image in response".to_string()))?;

        match (payload.url, payload.b64_json) {
            (Some(url), _) => self.download(&url),
            (None, Some(encoded)) => Ok(GeneratedImage {
                bytes: general_purpose::STANDARD.decode(encoded)?,
                extension: "png".to_string(),
            }),
            (None, None) => Err(OpenAiError::ResponseParse(
                "image has neither `url` nor `b64_json`".to_string(),
            )),
        }
    }
}

impl OpenAiClient {
    /// Plain GET of a generated image URL.
    fn download(&self, url: &str) -> Result<GeneratedImage, OpenAiError> {
        let mut response = self.agent.get(url).call()?;
        check_status(&mut response, MAX_BODY_BYTES)?;

        let extension = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(extension_for_content_type)
            .unwrap_or("png")
            .to_string();

        let bytes = response
            .body_mut()
            .with_config()
            .limit(MAX_BODY_BYTES)
            .read_to_vec()?;

        info!(bytes = bytes.len(), extension = %extension, "image downloaded");

        Ok(GeneratedImage { bytes, extension })
    }
}

/// Map a `Content-Type` header to a file extension, defaulting to `png`.
pub fn extension_for_content_type(content_type: &str) -> &'static str {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match mime.as_str() {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        "image/svg+xml" => "svg",
        _ => "png",
    }
}
