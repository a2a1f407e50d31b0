use crate::api::query::ReleaseQuery;
use crate::error::{JdkPinError, Result};
use crate::user_agent;
use attohttpc::Session;
use log::{debug, trace};

pub const ADOPTIUM_API_BASE: &str = "https://api.adoptium.net";

/// Blocking client for the Adoptium release API.
///
/// Each call issues exactly one request; there is no retry and no timeout
/// beyond the transport's own default.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) session: Session,
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        let mut session = Session::new();
        session.header("User-Agent", user_agent::api_client());
        session.proxy_settings(attohttpc::ProxySettings::from_env());

        Self {
            session,
            base_url: ADOPTIUM_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn latest_assets_url(&self, query: &ReleaseQuery) -> String {
        format!("{}{}", self.base_url, query.path())
    }

    /// GET the latest assets for `query` and return the raw body.
    pub fn get_latest_assets(&self, query: &ReleaseQuery) -> Result<String> {
        let url = self.latest_assets_url(query);

        let mut request = self.session.get(&url);
        for (name, value) in query.params() {
            request = request.param(name, value);
        }
        debug!(
            "GET {url}?{}",
            query
                .params()
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("&")
        );

        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;
        trace!("Response {} from {url}: {body}", status.as_u16());

        if !status.is_success() {
            return Err(JdkPinError::Fetch {
                url,
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
