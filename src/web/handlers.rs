//! HTTP handlers for the banner form

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    response::Html,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tracing::{debug, info};

use crate::composition::MAX_FONT_SIZE;
use crate::web::{
    error::WebError,
    page::{self, PageContext},
    AppState,
};

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Handler: GET /
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render(&PageContext {
        image_data: None,
        text_input: "",
        font_size: state.options.font_size,
    }))
}

/// Fields of the upload form, as received
#[derive(Debug, Default)]
pub struct GenerateForm {
    pub logo: Option<Bytes>,
    pub main_image: Option<Bytes>,
    pub text_input: Option<String>,
    pub font_size: Option<String>,
}

impl GenerateForm {
    /// Read every field of the multipart body; unknown fields are skipped
    pub async fn from_multipart(multipart: &mut Multipart) -> Result<Self, WebError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "logo" => form.logo = Some(field.bytes().await?),
                "main_image" => form.main_image = Some(field.bytes().await?),
                "text_input" => form.text_input = Some(field.text().await?),
                "font_size" => form.font_size = Some(field.text().await?),
                other => debug!("Ignoring form field {:?}", other),
            }
        }

        Ok(form)
    }

    /// The three required inputs. A file input left empty by the browser
    /// arrives as a zero-length part and counts as missing.
    pub fn required(&self) -> Result<(Bytes, Bytes, String), WebError> {
        let logo = self
            .logo
            .clone()
            .filter(|b| !b.is_empty())
            .ok_or_else(|| WebError::MissingInput("logo".to_string()))?;
        let main_image = self
            .main_image
            .clone()
            .filter(|b| !b.is_empty())
            .ok_or_else(|| WebError::MissingInput("main_image".to_string()))?;
        let text = self
            .text_input
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| WebError::MissingInput("text_input".to_string()))?;
        Ok((logo, main_image, text))
    }

    /// Requested font size; absent or non-numeric values use `default`, values
    /// outside 1..=MAX_FONT_SIZE are rejected
    pub fn font_size(&self, default: u32) -> Result<u32, WebError> {
        let Some(Ok(size)) = self.font_size.as_deref().map(|s| s.trim().parse::<i64>()) else {
            return Ok(default);
        };
        if !(1..=i64::from(MAX_FONT_SIZE)).contains(&size) {
            return Err(WebError::InvalidRequest(format!("Invalid font size: {}", size)));
        }
        Ok(size as u32)
    }
}

/// Handler: POST /generate
pub async fn generate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, WebError> {
    let form = GenerateForm::from_multipart(&mut multipart).await?;
    let (logo, main_image, text) = form.required()?;
    let font_size = form.font_size(state.options.font_size)?;

    info!(
        "Generating banner: logo {} bytes, main image {} bytes, {} caption chars at {}px",
        logo.len(),
        main_image.len(),
        text.chars().count(),
        font_size
    );

    let composer = state.composer.clone();
    let caption = text.clone();
    let png = tokio::task::spawn_blocking(move || {
        composer.compose(&logo, &main_image, &caption, font_size)
    })
    .await
    .map_err(|e| WebError::Internal(format!("Composition task failed: {}", e)))??;

    let image_data = BASE64.encode(&png);

    Ok(Html(page::render(&PageContext {
        image_data: Some(&image_data),
        text_input: &text,
        font_size,
    })))
}
