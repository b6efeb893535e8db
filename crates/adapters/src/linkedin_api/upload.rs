//! LinkedIn media upload adapter - the register/acquire/upload handshake

use async_trait::async_trait;
use post_courier_domain::{AssetUrn, ImageRef, MediaError, MediaUploader};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{DEFAULT_BASE_URL, LINKEDIN_VERSION, RESTLI_PROTOCOL_VERSION};
use crate::media_source::fetch_image_bytes;

const FEEDSHARE_IMAGE_RECIPE: &str = "urn:li:digitalmediaRecipe:feedshare-image";

/// The platform answers a successful binary upload with either of these
/// codes; both must be accepted.
const UPLOAD_SUCCESS_STATUSES: [StatusCode; 2] = [StatusCode::OK, StatusCode::CREATED];

/// LinkedIn media uploader for feed images
pub struct LinkedInMediaUploader {
    client: Client,
    access_token: SecretString,
    owner_urn: String,
    base_url: String,
    enabled: bool,
}

impl LinkedInMediaUploader {
    pub fn new(access_token: SecretString, owner_urn: String) -> Self {
        Self::with_base_url(access_token, owner_urn, DEFAULT_BASE_URL.to_string(), true)
    }

    pub fn with_base_url(
        access_token: SecretString,
        owner_urn: String,
        base_url: String,
        enabled: bool,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            access_token,
            owner_urn,
            base_url,
            enabled,
        }
    }

    /// Create a disabled uploader (for dry-run)
    pub fn disabled() -> Self {
        Self {
            client: Client::new(),
            access_token: SecretString::new("".into()),
            owner_urn: String::new(),
            base_url: String::new(),
            enabled: false,
        }
    }

    /// Step 1: declare the upload, obtaining a single-use signed URL and the
    /// asset URN that will represent the uploaded bytes
    async fn register_upload(&self) -> Result<RegisteredUpload, MediaError> {
        let url = format!("{}/v2/assets?action=registerUpload", self.base_url);

        let request = RegisterUploadRequest {
            register_upload_request: RegisterUploadBody {
                recipes: vec![FEEDSHARE_IMAGE_RECIPE],
                owner: &self.owner_urn,
                service_relationships: vec![ServiceRelationship {
                    relationship_type: "OWNER",
                    identifier: "urn:li:userGeneratedContent",
                }],
            },
        };

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.access_token.expose_secret()),
            )
            .header("X-Restli-Protocol-Version", RESTLI_PROTOCOL_VERSION)
            .header("LinkedIn-Version", LINKEDIN_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| MediaError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::Registration {
                status: status.as_u16(),
                body,
            });
        }

        let registered: RegisterUploadResponse =
            response.json().await.map_err(|e| MediaError::Registration {
                status: status.as_u16(),
                body: format!("Invalid response: {}", e),
            })?;

        Ok(RegisteredUpload {
            upload_url: registered.value.upload_mechanism.media_upload.upload_url,
            asset: AssetUrn(registered.value.asset),
        })
    }

    /// Step 3: transfer the raw bytes to the signed URL
    async fn upload_bytes(&self, upload_url: &str, bytes: Vec<u8>) -> Result<(), MediaError> {
        let response = self
            .client
            .put(upload_url)
            .header(
                "Authorization",
                format!("Bearer {}", self.access_token.expose_secret()),
            )
            .header("Content-Type", "application/octet-stream")
            .body(bytes)
            .send()
            .await
            .map_err(|e| MediaError::Network(e.to_string()))?;

        let status = response.status();
        // Set membership, not equality: see UPLOAD_SUCCESS_STATUSES
        if !UPLOAD_SUCCESS_STATUSES.contains(&status) {
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::Upload {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Output of the registration step, consumed within the same invocation
struct RegisteredUpload {
    upload_url: String,
    asset: AssetUrn,
}

#[derive(Serialize)]
struct RegisterUploadRequest<'a> {
    #[serde(rename = "registerUploadRequest")]
    register_upload_request: RegisterUploadBody<'a>,
}

#[derive(Serialize)]
struct RegisterUploadBody<'a> {
    recipes: Vec<&'a str>,
    owner: &'a str,
    #[serde(rename = "serviceRelationships")]
    service_relationships: Vec<ServiceRelationship>,
}

#[derive(Serialize)]
struct ServiceRelationship {
    #[serde(rename = "relationshipType")]
    relationship_type: &'static str,
    identifier: &'static str,
}

#[derive(Deserialize)]
struct RegisterUploadResponse {
    value: RegisterUploadValue,
}

#[derive(Deserialize)]
struct RegisterUploadValue {
    asset: String,
    #[serde(rename = "uploadMechanism")]
    upload_mechanism: UploadMechanism,
}

#[derive(Deserialize)]
struct UploadMechanism {
    #[serde(rename = "com.linkedin.digitalmedia.uploading.MediaUploadHttpRequest")]
    media_upload: MediaUploadHttpRequest,
}

#[derive(Deserialize)]
struct MediaUploadHttpRequest {
    #[serde(rename = "uploadUrl")]
    upload_url: String,
}

#[async_trait]
impl MediaUploader for LinkedInMediaUploader {
    async fn upload_image(&self, image: &ImageRef) -> Result<AssetUrn, MediaError> {
        if !self.enabled {
            return Err(MediaError::Disabled);
        }

        let registered = self.register_upload().await?;
        tracing::debug!(asset = %registered.asset, "Registered upload");

        let bytes = fetch_image_bytes(&self.client, image).await?;
        tracing::debug!(byte_count = bytes.len(), "Acquired image bytes");

        self.upload_bytes(&registered.upload_url, bytes).await?;

        Ok(registered.asset)
    }
}
