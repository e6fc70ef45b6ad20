// API client module: a small blocking HTTP client that talks to the game
// server's admin endpoints. It is intentionally synchronous; every tool in
// this crate is a short-lived, strictly sequential batch process.

use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client, RequestBuilder};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Uniform timeout for every networked call. A stuck request must never
/// hang a whole batch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-call failure, surfaced to the driver so it can decide between
/// fatal and logged handling.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// The server already has an entity with this name (409).
    #[error("already exists")]
    Conflict,
    #[error("{} - {}", .status.as_u16(), .body)]
    Status { status: StatusCode, body: String },
    #[error("malformed response body: {0}")]
    Malformed(String),
}

/// Cosmetic-asset category as the server returns it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Category {
    pub category_id: i64,
    pub category_name: String,
}

/// Item category; note the different field names from `Category`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ItemCategory {
    pub id: i64,
    pub name: String,
}

/// World submission payload. Field casing follows the server contract.
#[derive(Serialize, Debug)]
pub struct WorldCreationRequest {
    pub data: WorldData,
    pub file_name: String,
}

#[derive(Serialize, Debug)]
pub struct WorldData {
    #[serde(rename = "worldName")]
    pub world_name: String,
    #[serde(rename = "objectPlacementData")]
    pub object_placement_data: Vec<ObjectPlacement>,
}

#[derive(Serialize, Debug)]
pub struct ObjectPlacement {
    #[serde(rename = "Position")]
    pub position: Position,
    #[serde(rename = "AssetDataId")]
    pub asset_data_id: i64,
}

#[derive(Serialize, Debug)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Every response wraps its payload in a `data` envelope.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct CategoryList {
    #[serde(default)]
    category_list: Vec<Category>,
}

#[derive(Deserialize)]
struct ItemCategoryList {
    #[serde(default)]
    categories: Vec<ItemCategory>,
}

#[derive(Deserialize)]
struct LoginData {
    #[serde(default)]
    access_token: String,
}

/// The backend returns sprite ids as either a number or a string
/// depending on version, so we keep the field flexible.
#[derive(Deserialize)]
struct SpriteData {
    sprite_id: serde_json::Value,
}

#[derive(Serialize, Debug)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct CreateCategoryRequest<'a> {
    category_name: &'a str,
}

#[derive(Serialize)]
struct CreateItemCategoryRequest<'a> {
    name: &'a str,
}

/// Blocking client that holds the normalized base URL of the game server
/// and an optional bearer token for authenticated calls.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client for `server_url` (trailing slashes are stripped).
    pub fn new(server_url: &str, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: server_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store a bearer token for subsequent authenticated requests.
    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    fn with_auth(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Log in and return the access token. Callers treat any failure here
    /// as fatal; there is no retry.
    pub fn login(&self, email: &str, password: &str) -> Result<String> {
        let url = format!("{}/auth/login", self.base_url);
        let res = self
            .client
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .context("Failed to send login request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Login failed: {} - {}", status, txt);
        }
        let body: Envelope<LoginData> = res.json().context("Parsing login response json")?;
        if body.data.access_token.is_empty() {
            anyhow::bail!("Login response did not contain a token");
        }
        Ok(body.data.access_token)
    }

    /// Fetch cosmetic categories. An `Err` is the "no result" outcome,
    /// distinct from an empty list.
    pub fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = format!("{}/assets/cosmetics/categories", self.base_url);
        let res = self.with_auth(self.client.get(&url)).send()?;
        let status = res.status();
        if status != StatusCode::OK {
            let body = res.text().unwrap_or_else(|_| "".into());
            return Err(ApiError::Status { status, body });
        }
        let body: Envelope<CategoryList> =
            res.json().map_err(|e| ApiError::Malformed(e.to_string()))?;
        Ok(body.data.category_list)
    }

    pub fn fetch_item_categories(&self) -> Result<Vec<ItemCategory>, ApiError> {
        let url = format!("{}/items/categories", self.base_url);
        let res = self.with_auth(self.client.get(&url)).send()?;
        let status = res.status();
        if status != StatusCode::OK {
            let body = res.text().unwrap_or_else(|_| "".into());
            return Err(ApiError::Status { status, body });
        }
        let body: Envelope<ItemCategoryList> =
            res.json().map_err(|e| ApiError::Malformed(e.to_string()))?;
        Ok(body.data.categories)
    }

    /// Create a cosmetic category. A 409 surfaces as `ApiError::Conflict`
    /// so the driver can report "already exists" and keep going.
    pub fn create_category(&self, name: &str) -> Result<Category, ApiError> {
        let url = format!("{}/assets/cosmetics/categories", self.base_url);
        let res = self
            .with_auth(self.client.post(&url))
            .json(&CreateCategoryRequest { category_name: name })
            .send()?;
        match res.status() {
            StatusCode::OK | StatusCode::CREATED => {
                let body: Envelope<Category> =
                    res.json().map_err(|e| ApiError::Malformed(e.to_string()))?;
                Ok(body.data)
            }
            StatusCode::CONFLICT => Err(ApiError::Conflict),
            status => {
                let body = res.text().unwrap_or_else(|_| "".into());
                Err(ApiError::Status { status, body })
            }
        }
    }

    pub fn create_item_category(&self, name: &str) -> Result<ItemCategory, ApiError> {
        let url = format!("{}/items/categories", self.base_url);
        let res = self
            .with_auth(self.client.post(&url))
            .json(&CreateItemCategoryRequest { name })
            .send()?;
        match res.status() {
            StatusCode::OK | StatusCode::CREATED => {
                let body: Envelope<ItemCategory> =
                    res.json().map_err(|e| ApiError::Malformed(e.to_string()))?;
                Ok(body.data)
            }
            StatusCode::CONFLICT => Err(ApiError::Conflict),
            status => {
                let body = res.text().unwrap_or_else(|_| "".into());
                Err(ApiError::Status { status, body })
            }
        }
    }

    /// PUT one sprite file into a category. Returns the server-assigned
    /// sprite id on 201; anything else is a per-file failure.
    pub fn upload_sprite(
        &self,
        file_path: &Path,
        category_id: i64,
    ) -> Result<serde_json::Value, ApiError> {
        let url = format!(
            "{}/assets/cosmetics/categories/{}",
            self.base_url, category_id
        );
        let file_name = file_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("sprite")
            .to_string();
        let bytes = std::fs::read(file_path)?;
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_for(file_path))?;
        let form = multipart::Form::new()
            .text("category_id", category_id.to_string())
            .part("sprite", part);
        let res = self.with_auth(self.client.put(&url)).multipart(form).send()?;
        match res.status() {
            StatusCode::CREATED => {
                let body: Envelope<SpriteData> =
                    res.json().map_err(|e| ApiError::Malformed(e.to_string()))?;
                Ok(body.data.sprite_id)
            }
            status => {
                let body = res.text().unwrap_or_else(|_| "".into());
                Err(ApiError::Status { status, body })
            }
        }
    }

    /// Submit one world. The status/body pair is returned for any HTTP
    /// outcome so the driver can log it; only transport failures error.
    pub fn create_world(
        &self,
        request: &WorldCreationRequest,
    ) -> Result<(StatusCode, String), ApiError> {
        let url = format!("{}/world", self.base_url);
        let res = self.with_auth(self.client.post(&url)).json(request).send()?;
        let status = res.status();
        let body = res.text().unwrap_or_else(|_| "".into());
        Ok((status, body))
    }
}

/// MIME type inferred from the file extension; everything that is not a
/// PNG is sent as JPEG.
pub fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => "image/png",
        _ => "image/jpeg",
    }
}

/// Prepend `http://` when the given URL carries no scheme.
pub fn ensure_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}

/// Render a loosely-typed server id without JSON string quoting.
pub fn display_id(id: &serde_json::Value) -> String {
    match id {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
