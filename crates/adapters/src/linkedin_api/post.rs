//! LinkedIn UGC post adapter - create-post call and status lookup

use async_trait::async_trait;
use post_courier_domain::{AssetUrn, PostPublisher, PublishError, PublishReceipt};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::Duration;

use super::{DEFAULT_BASE_URL, LINKEDIN_VERSION, RESTLI_PROTOCOL_VERSION};

/// LinkedIn UGC post publisher
pub struct LinkedInPostPublisher {
    client: Client,
    access_token: SecretString,
    author_urn: String,
    base_url: String,
    enabled: bool,
}

impl LinkedInPostPublisher {
    pub fn new(access_token: SecretString, author_urn: String) -> Self {
        Self::with_base_url(access_token, author_urn, DEFAULT_BASE_URL.to_string(), true)
    }

    pub fn with_base_url(
        access_token: SecretString,
        author_urn: String,
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
            author_urn,
            base_url,
            enabled,
        }
    }

    /// Create a disabled publisher (for dry-run)
    pub fn disabled() -> Self {
        Self {
            client: Client::new(),
            access_token: SecretString::new("".into()),
            author_urn: String::new(),
            base_url: String::new(),
            enabled: false,
        }
    }

    /// Fetch the raw status of a previously published post.
    ///
    /// Returns the response status and body verbatim for the operator.
    pub async fn post_status(&self, post_urn: &str) -> Result<(u16, String), PublishError> {
        // The ugcPosts endpoint takes the bare ID, not the full URN
        let id = post_urn.rsplit(':').next().unwrap_or(post_urn);
        let url = format!("{}/v2/ugcPosts/{}", self.base_url, id);

        let response = self
            .client
            .get(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.access_token.expose_secret()),
            )
            .header("X-Restli-Protocol-Version", RESTLI_PROTOCOL_VERSION)
            .header("LinkedIn-Version", LINKEDIN_VERSION)
            .send()
            .await
            .map_err(|e| PublishError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PublishError::Network(e.to_string()))?;

        Ok((status.as_u16(), body))
    }
}

#[derive(Debug, Serialize)]
struct UgcPostRequest {
    author: String,
    #[serde(rename = "lifecycleState")]
    lifecycle_state: &'static str,
    #[serde(rename = "specificContent")]
    specific_content: SpecificContent,
    visibility: Visibility,
}

#[derive(Debug, Serialize)]
struct SpecificContent {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    share_content: ShareContent,
}

#[derive(Debug, Serialize)]
struct ShareContent {
    #[serde(rename = "shareCommentary")]
    share_commentary: ShareCommentary,
    #[serde(rename = "shareMediaCategory")]
    share_media_category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<Vec<ShareMedia>>,
}

#[derive(Debug, Serialize)]
struct ShareCommentary {
    text: String,
}

#[derive(Debug, Serialize)]
struct ShareMedia {
    status: &'static str,
    media: String,
}

#[derive(Debug, Serialize)]
struct Visibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    member_network_visibility: &'static str,
}

/// Build the outbound payload: lifecycle is always immediate-publish,
/// visibility always public. With an asset the media category switches from
/// NONE to IMAGE with a single READY entry referencing it.
fn build_ugc_post(author: &str, text: &str, asset: Option<&AssetUrn>) -> UgcPostRequest {
    let (share_media_category, media) = match asset {
        Some(asset) => (
            "IMAGE",
            Some(vec![ShareMedia {
                status: "READY",
                media: asset.as_str().to_string(),
            }]),
        ),
        None => ("NONE", None),
    };

    UgcPostRequest {
        author: author.to_string(),
        lifecycle_state: "PUBLISHED",
        specific_content: SpecificContent {
            share_content: ShareContent {
                share_commentary: ShareCommentary {
                    text: text.to_string(),
                },
                share_media_category,
                media,
            },
        },
        visibility: Visibility {
            member_network_visibility: "PUBLIC",
        },
    }
}

#[async_trait]
impl PostPublisher for LinkedInPostPublisher {
    async fn publish(
        &self,
        text: &str,
        asset: Option<&AssetUrn>,
    ) -> Result<PublishReceipt, PublishError> {
        if !self.enabled {
            return Err(PublishError::Disabled);
        }

        let request = build_ugc_post(&self.author_urn, text, asset);
        let url = format!("{}/v2/ugcPosts", self.base_url);

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.access_token.expose_secret()),
            )
            .header("X-Restli-Protocol-Version", RESTLI_PROTOCOL_VERSION)
            .header("LinkedIn-Version", LINKEDIN_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| PublishError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(PublishError::Auth("Invalid access token".to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let post_urn = response
            .headers()
            .get("x-restli-id")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        Ok(PublishReceipt {
            post_urn,
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ASSET: &str = "urn:li:digitalmediaAsset:C5522AQGTYER3k3ByHQ";

    fn publisher(mock_server: &MockServer) -> LinkedInPostPublisher {
        LinkedInPostPublisher::with_base_url(
            SecretString::new("test-token".into()),
            "urn:li:person:abc".to_string(),
            mock_server.uri(),
            true,
        )
    }

    #[test]
    fn payload_without_asset_has_media_category_none() {
        let payload = build_ugc_post("urn:li:person:abc", "Hello", None);
        let value = serde_json::to_value(&payload).unwrap();

        let share = &value["specificContent"]["com.linkedin.ugc.ShareContent"];
        assert_eq!(share["shareMediaCategory"], "NONE");
        assert!(share.get("media").is_none());
        assert_eq!(share["shareCommentary"]["text"], "Hello");
        assert_eq!(value["lifecycleState"], "PUBLISHED");
        assert_eq!(
            value["visibility"]["com.linkedin.ugc.MemberNetworkVisibility"],
            "PUBLIC"
        );
    }

    #[test]
    fn payload_with_asset_has_one_ready_media_entry() {
        let asset = AssetUrn(ASSET.to_string());
        let payload = build_ugc_post("urn:li:person:abc", "Hello", Some(&asset));
        let value = serde_json::to_value(&payload).unwrap();

        let share = &value["specificContent"]["com.linkedin.ugc.ShareContent"];
        assert_eq!(share["shareMediaCategory"], "IMAGE");

        let media = share["media"].as_array().unwrap();
        assert_eq!(media.len(), 1);
        assert_eq!(media[0]["status"], "READY");
        assert_eq!(media[0]["media"], ASSET);
    }

    #[tokio::test]
    async fn publish_success_returns_receipt_with_post_urn() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/ugcPosts"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("X-Restli-Protocol-Version", "2.0.0"))
            .and(body_json(serde_json::json!({
                "author": "urn:li:person:abc",
                "lifecycleState": "PUBLISHED",
                "specificContent": {
                    "com.linkedin.ugc.ShareContent": {
                        "shareCommentary": {"text": "Hello"},
                        "shareMediaCategory": "NONE"
                    }
                },
                "visibility": {
                    "com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC"
                }
            })))
            .respond_with(
                ResponseTemplate::new(201).insert_header("x-restli-id", "urn:li:share:42"),
            )
            .mount(&mock_server)
            .await;

        let receipt = publisher(&mock_server).publish("Hello", None).await.unwrap();

        assert_eq!(receipt.status, 201);
        assert_eq!(receipt.post_urn.as_deref(), Some("urn:li:share:42"));
    }

    #[tokio::test]
    async fn publish_sends_media_entry_for_asset() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/ugcPosts"))
            .and(body_json(serde_json::json!({
                "author": "urn:li:person:abc",
                "lifecycleState": "PUBLISHED",
                "specificContent": {
                    "com.linkedin.ugc.ShareContent": {
                        "shareCommentary": {"text": "Hello"},
                        "shareMediaCategory": "IMAGE",
                        "media": [{"status": "READY", "media": ASSET}]
                    }
                },
                "visibility": {
                    "com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC"
                }
            })))
            .respond_with(ResponseTemplate::new(201))
            .mount(&mock_server)
            .await;

        let asset = AssetUrn(ASSET.to_string());
        let receipt = publisher(&mock_server)
            .publish("Hello", Some(&asset))
            .await
            .unwrap();

        assert_eq!(receipt.status, 201);
        assert!(receipt.post_urn.is_none());
    }

    #[tokio::test]
    async fn publish_unauthorized_is_an_auth_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/ugcPosts"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let err = publisher(&mock_server).publish("Hello", None).await.unwrap_err();
        assert!(matches!(err, PublishError::Auth(_)));
    }

    #[tokio::test]
    async fn publish_surfaces_status_and_body_on_rejection() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/ugcPosts"))
            .respond_with(ResponseTemplate::new(422).set_body_string("urn does not exist"))
            .mount(&mock_server)
            .await;

        let err = publisher(&mock_server).publish("Hello", None).await.unwrap_err();

        match err {
            PublishError::Api { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, "urn does not exist");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn post_status_queries_by_bare_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/ugcPosts/7388963697706094592"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"lifecycleState\":\"PUBLISHED\"}"))
            .mount(&mock_server)
            .await;

        let (status, body) = publisher(&mock_server)
            .post_status("urn:li:share:7388963697706094592")
            .await
            .unwrap();

        assert_eq!(status, 200);
        assert!(body.contains("PUBLISHED"));
    }

    #[tokio::test]
    async fn disabled_publisher_errors_without_network() {
        let publisher = LinkedInPostPublisher::disabled();

        let err = publisher.publish("Hello", None).await.unwrap_err();
        assert!(matches!(err, PublishError::Disabled));
    }
}
