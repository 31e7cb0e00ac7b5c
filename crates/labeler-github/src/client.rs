//! GitHub REST client implementing [`LabelHost`]

use crate::host::{LabelHost, PullRequestRef, RepoRef};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, RequestBuilder, Response, header};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("pr-labeler/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";
const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw+json";
const PAGE_SIZE: u32 = 100;

#[derive(Debug, Deserialize)]
struct GitHubError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GitHubLabel {
    name: String,
}

#[derive(Debug, Deserialize)]
struct GitHubFile {
    filename: String,
}

#[derive(Debug, Serialize)]
struct AddLabelsRequest<'a> {
    labels: &'a [String],
}

/// Token-authenticated client for the GitHub REST API.
#[derive(Clone)]
pub struct GitHubClient {
    http_client: HttpClient,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Create a client against the public GitHub API.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_API_URL)
    }

    /// Create a client against a custom API root (GitHub Enterprise, test servers).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn repo_url(&self, repo: &RepoRef, tail: &str) -> String {
        format!("{}/repos/{}/{}/{}", self.base_url, repo.owner, repo.name, tail)
    }

    fn authorized(&self, request: RequestBuilder, accept: &str) -> RequestBuilder {
        request
            .bearer_auth(&self.token)
            .header(header::ACCEPT, accept)
            .header("X-GitHub-Api-Version", API_VERSION)
    }

    /// Whether `url` points below the API root, so the token may be sent to it.
    fn is_under_base(&self, url: &str) -> bool {
        url.strip_prefix(self.base_url.as_str())
            .is_some_and(|rest| rest.starts_with('/') || rest.starts_with('?'))
    }

    /// Fetch every page of a list endpoint, following `Link: rel="next"`.
    async fn paginate<T: DeserializeOwned>(&self, first_page: String) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut next = Some(first_page);
        let mut pages = 0usize;

        while let Some(url) = next {
            if !self.is_under_base(&url) {
                return Err(Error::ForeignPageLink { url });
            }
            let response = self
                .authorized(self.http_client.get(&url), JSON_MEDIA_TYPE)
                .send()
                .await?;
            let response = check_status(response).await?;

            next = response
                .headers()
                .get(header::LINK)
                .and_then(|value| value.to_str().ok())
                .and_then(parse_next_link);

            let page: Vec<T> = response.json().await?;
            items.extend(page);
            pages += 1;
        }

        debug!(pages, items = items.len(), "Fetched paginated list");
        Ok(items)
    }
}

#[async_trait]
impl LabelHost for GitHubClient {
    #[instrument(skip(self), fields(pr = %pr))]
    async fn list_changed_files(&self, pr: &PullRequestRef) -> Result<Vec<String>> {
        let url = self.repo_url(
            &pr.repo,
            &format!("pulls/{}/files?per_page={PAGE_SIZE}", pr.number),
        );
        let files: Vec<GitHubFile> = self.paginate(url).await?;
        Ok(files.into_iter().map(|file| file.filename).collect())
    }

    #[instrument(skip(self), fields(repo = %repo))]
    async fn list_repo_labels(&self, repo: &RepoRef) -> Result<Vec<String>> {
        let url = self.repo_url(repo, &format!("labels?per_page={PAGE_SIZE}"));
        let labels: Vec<GitHubLabel> = self.paginate(url).await?;
        Ok(labels.into_iter().map(|label| label.name).collect())
    }

    #[instrument(skip(self), fields(pr = %pr, count = labels.len()))]
    async fn add_labels(&self, pr: &PullRequestRef, labels: &[String]) -> Result<()> {
        let url = self.repo_url(&pr.repo, &format!("issues/{}/labels", pr.number));
        let response = self
            .authorized(self.http_client.post(&url), JSON_MEDIA_TYPE)
            .json(&AddLabelsRequest { labels })
            .send()
            .await?;
        check_status(response).await?;

        debug!("Labels added");
        Ok(())
    }

    #[instrument(skip(self), fields(repo = %repo))]
    async fn fetch_file(
        &self,
        repo: &RepoRef,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<String> {
        let url = self.repo_url(repo, &format!("contents/{}", path.trim_start_matches('/')));
        let mut request = self.authorized(self.http_client.get(&url), RAW_MEDIA_TYPE);
        if let Some(git_ref) = git_ref {
            request = request.query(&[("ref", git_ref)]);
        }

        let response = check_status(request.send().await?).await?;
        Ok(response.text().await?)
    }
}

/// Map a non-success response to [`Error::Api`], using GitHub's error message when present.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<GitHubError>(&body)
        .map(|error| error.message)
        .unwrap_or(body);

    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

/// Extract the `rel="next"` target from an RFC 8288 `Link` header.
pub(crate) fn parse_next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|param| {
            let param = param.trim();
            param == r#"rel="next""# || param == "rel=next"
        });
        if !is_next {
            return None;
        }
        target
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .map(str::to_string)
    })
}
