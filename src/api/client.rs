use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Url};

use crate::api::error::ApiError;
use crate::api::UserApi;
use crate::config::ApiConfig;
use crate::record::UserRecord;

/// `reqwest`-backed implementation of [`UserApi`].
///
/// Only the connect timeout is set on the client; the overall bound on a
/// fetch is applied by the detail fetcher so that it can retry.
pub struct HttpUserApi {
    client: Client,
    base_url: String,
    users_path: String,
    auth_header: Option<(String, String)>,
}

impl HttpUserApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| ApiError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            users_path: config.users_path.trim_matches('/').to_string(),
            auth_header: config.auth_header(),
        })
    }

    /// `{base}/{users_path}/{id}` with the identifier percent-encoded as a
    /// single path segment.
    pub fn user_url(&self, id: &str) -> Result<Url, ApiError> {
        if id.is_empty() {
            return Err(ApiError::InvalidIdentifier(id.to_string()));
        }

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Request(format!("Invalid base URL '{}': {}", self.base_url, e)))?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ApiError::Request(format!("Base URL '{}' cannot have a path", self.base_url))
            })?;
            segments.pop_if_empty();
            segments.extend(self.users_path.split('/').filter(|s| !s.is_empty()));
            segments.push(id);
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut builder = self.client.request(method, url);
        if let Some((name, value)) = &self.auth_header {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
    }

    async fn send(&self, builder: RequestBuilder, url: &Url) -> Result<String, ApiError> {
        let response = builder.send().await.map_err(|e| ApiError::Connection {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Connection {
            url: url.to_string(),
            source: e,
        })?;

        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        Ok(body)
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn detail(&self, id: &str) -> Result<UserRecord, ApiError> {
        let url = self.user_url(id)?;
        tracing::debug!(%url, "GET user detail");
        let body = self.send(self.request(Method::GET, url.clone()), &url).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn update(&self, id: &str, body: &UserRecord) -> Result<(), ApiError> {
        let url = self.user_url(id)?;
        tracing::debug!(%url, "PUT user update");
        let builder = self.request(Method::PUT, url.clone()).json(body);
        self.send(builder, &url).await?;
        Ok(())
    }
}
