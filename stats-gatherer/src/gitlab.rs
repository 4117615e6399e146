//! # GitLab API
//!
//! Only the total item counts of group listings are needed. Every listing
//! is requested with a page size of one and the count is taken from the
//! `X-Total` pagination header, so the cost of a request does not depend on
//! the size of the group.

use eyre::{
    eyre,
    OptionExt as _,
    Result,
    WrapErr as _,
};
use reqwest::Client as HttpClient;
use std::{
    future::Future,
    pin::Pin,
};
use tracing::debug;
use url::Url;

pub const DEFAULT_GITLAB_URL: &str = "https://gitlab.com";

const TOKEN_HEADER: &str = "PRIVATE-TOKEN";
const TOTAL_HEADER: &str = "x-total";

/// Counting capability of the platform the collectors query.
pub trait GroupsApi: Send + Sync {
    /// Number of projects owned by the group, optionally including nested sub-groups.
    fn count_projects<'a>(
        &'a self,
        group_id: &'a str,
        include_subgroups: bool,
    ) -> Pin<Box<dyn Future<Output = Result<u64>> + Send + 'a>>;

    /// Number of direct members of the group.
    fn count_members<'a>(&'a self, group_id: &'a str) -> Pin<Box<dyn Future<Output = Result<u64>> + Send + 'a>>;
}

/// `GroupsApi` backed by the GitLab REST v4 API.
#[derive(Clone)]
pub struct GitlabClient {
    http_client: HttpClient,
    api_url: Url,
    token: String,
}

impl GitlabClient {
    /// `base_url` is the GitLab instance, e.g. `https://gitlab.com`. A URL that
    /// already points at `/api/v4` is used as is.
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self> {
        let mut api_url = Url::parse(base_url).wrap_err_with(|| format!("Invalid GitLab URL '{base_url}'"))?;

        let has_api_path = api_url
            .path_segments()
            .map(|segments| {
                let segments: Vec<_> = segments.filter(|s| !s.is_empty()).collect();
                segments.ends_with(&["api", "v4"])
            })
            .unwrap_or(false);

        {
            let mut segments = api_url
                .path_segments_mut()
                .map_err(|_| eyre!("GitLab URL '{base_url}' cannot be a base URL"))?;
            segments.pop_if_empty();
            if !has_api_path {
                segments.extend(["api", "v4"]);
            }
        }

        let http_client = HttpClient::builder()
            .user_agent(concat!("gitlab-stats-gatherer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            api_url,
            token: token.into(),
        })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// `<api>/groups/<id>/<resource>`, the id is encoded as a single segment so
    /// full paths like `acme/tools` are addressed correctly.
    fn group_endpoint(&self, group_id: &str, resource: &str) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| eyre!("GitLab URL '{}' cannot be a base URL", self.api_url))?
            .pop_if_empty()
            .push("groups")
            .push(group_id)
            .push(resource);
        Ok(url)
    }

    /// Requests the first page with a single item and returns the reported total.
    async fn total_items(&self, url: Url, query: &[(&str, &str)]) -> Result<u64> {
        debug!(%url, ?query, "Requesting total item count");

        let response = self
            .http_client
            .get(url.clone())
            .header(TOKEN_HEADER, &self.token)
            .query(&[("page", "1"), ("per_page", "1")])
            .query(query)
            .send()
            .await
            .wrap_err_with(|| format!("Request to {url} failed"))?
            .error_for_status()
            .wrap_err("GitLab rejected the request")?;

        let total = response
            .headers()
            .get(TOTAL_HEADER)
            .ok_or_eyre("response did not report a total item count")?
            .to_str()
            .wrap_err("X-Total header is not valid ASCII")?;

        total
            .trim()
            .parse::<u64>()
            .wrap_err_with(|| format!("X-Total header '{total}' is not a count"))
    }
}

impl std::fmt::Debug for GitlabClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitlabClient")
            .field("api_url", &self.api_url.as_str())
            .finish_non_exhaustive()
    }
}

impl GroupsApi for GitlabClient {
    fn count_projects<'a>(
        &'a self,
        group_id: &'a str,
        include_subgroups: bool,
    ) -> Pin<Box<dyn Future<Output = Result<u64>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.group_endpoint(group_id, "projects")?;
            let include_subgroups = if include_subgroups { "true" } else { "false" };
            self.total_items(url, &[("include_subgroups", include_subgroups), ("simple", "true")])
                .await
        })
    }

    fn count_members<'a>(&'a self, group_id: &'a str) -> Pin<Box<dyn Future<Output = Result<u64>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.group_endpoint(group_id, "members")?;
            self.total_items(url, &[]).await
        })
    }
}
