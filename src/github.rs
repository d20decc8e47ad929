//! One-shot fetch of the showcased account's GitHub Pages repositories.
//!
//! The listing endpoint is public and unauthenticated; the fetch happens once
//! per page load, with no retry and no pagination. Anything that goes wrong
//! is reported to the caller as a [`FetchError`] and the page falls back to
//! its empty state.

use serde::Deserialize;
use thiserror::Error;
use url::Url;

const GITHUB_API_BASE: &str = "https://api.github.com";

/// Account whose repositories the page showcases.
pub const ACCOUNT: &str = "necatimertmetin";

/// Page size for the single listing request. GitHub caps `per_page` at 100;
/// there is deliberately no follow-up request for further pages.
pub const PER_PAGE: u32 = 100;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

/// A repository that publishes a static site, reduced to what the cards need.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PagesProject {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Source repository page on the forge.
    pub repo_url: String,
    /// Published site, also used as the live-preview embed source.
    pub site_url: String,
}

/// Wire format of one entry in the listing response. Fields beyond these are
/// ignored.
#[derive(Debug, Deserialize)]
struct Repo {
    id: i64,
    name: String,
    description: Option<String>,
    owner: RepoOwner,
    has_pages: bool,
}

#[derive(Debug, Deserialize)]
struct RepoOwner {
    login: String,
}

impl From<Repo> for PagesProject {
    fn from(repo: Repo) -> Self {
        Self {
            repo_url: repo_url(&repo.owner.login, &repo.name),
            site_url: site_url(&repo.owner.login, &repo.name),
            id: repo.id,
            name: repo.name,
            description: repo.description,
        }
    }
}

/// Source repository address: `https://github.com/<owner>/<name>`.
pub fn repo_url(owner: &str, name: &str) -> String {
    format!("https://github.com/{owner}/{name}")
}

/// Published site address: `https://<owner>.github.io/<name>`.
pub fn site_url(owner: &str, name: &str) -> String {
    format!("https://{owner}.github.io/{name}")
}

pub struct GitHubPages {
    client: reqwest::Client,
    account: String,
    api_base: String,
}

impl Default for GitHubPages {
    fn default() -> Self {
        Self::new(ACCOUNT)
    }
}

impl GitHubPages {
    pub fn new(account: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            account: account.to_string(),
            api_base: GITHUB_API_BASE.to_string(),
        }
    }

    /// Point the fetcher at a different API host. Used by tests.
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.to_string();
        self
    }

    fn endpoint(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.api_base)?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .extend(["users", &self.account, "repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", &PER_PAGE.to_string());
        Ok(url)
    }

    /// Fetch the account's repository list once and keep only the entries
    /// that publish a static site, in the order the API returned them.
    pub async fn fetch_projects(&self) -> Result<Vec<PagesProject>, FetchError> {
        let url = self.endpoint()?;

        let repos: Vec<Repo> = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, "vitrin/0.1")
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(repos
            .into_iter()
            .filter(|r| r.has_pages)
            .map(PagesProject::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fixture() -> serde_json::Value {
        serde_json::json!([
            {
                "id": 1,
                "name": "foo",
                "description": null,
                "owner": { "login": "nm" },
                "has_pages": true,
                "stargazers_count": 3,
                "fork": false
            },
            {
                "id": 2,
                "name": "bar",
                "description": "Bar site",
                "owner": { "login": "nm" },
                "has_pages": false
            }
        ])
    }

    #[tokio::test]
    async fn keeps_only_repositories_with_pages() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/nm/repos"))
            .and(query_param("per_page", "100"))
            .and(header("User-Agent", "vitrin/0.1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixture()))
            .mount(&server)
            .await;

        let projects = GitHubPages::new("nm")
            .with_api_base(&server.uri())
            .fetch_projects()
            .await
            .unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, 1);
        assert_eq!(projects[0].name, "foo");
        assert_eq!(projects[0].description, None);
        assert_eq!(projects[0].repo_url, "https://github.com/nm/foo");
        assert_eq!(projects[0].site_url, "https://nm.github.io/foo");
    }

    #[tokio::test]
    async fn preserves_response_order() {
        let server = MockServer::start().await;

        let body = serde_json::json!([
            { "id": 5, "name": "zeta", "description": "z", "owner": { "login": "nm" }, "has_pages": true },
            { "id": 3, "name": "alpha", "description": "a", "owner": { "login": "nm" }, "has_pages": true },
            { "id": 9, "name": "mid", "description": null, "owner": { "login": "nm" }, "has_pages": true }
        ]);

        Mock::given(method("GET"))
            .and(path("/users/nm/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let projects = GitHubPages::new("nm")
            .with_api_base(&server.uri())
            .fetch_projects()
            .await
            .unwrap();

        let names: Vec<_> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[tokio::test]
    async fn server_error_is_reported_not_panicked() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/nm/repos"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = GitHubPages::new("nm")
            .with_api_base(&server.uri())
            .fetch_projects()
            .await;

        assert!(matches!(result, Err(FetchError::Http(_))));
    }

    #[tokio::test]
    async fn unreachable_host_is_reported_not_panicked() {
        // Nothing is listening on this port.
        let result = GitHubPages::new("nm")
            .with_api_base("http://127.0.0.1:19")
            .fetch_projects()
            .await;

        assert!(result.is_err());
    }

    #[test]
    fn derives_both_external_urls() {
        assert_eq!(repo_url("nm", "foo"), "https://github.com/nm/foo");
        assert_eq!(site_url("nm", "foo"), "https://nm.github.io/foo");
    }

    #[test]
    fn endpoint_targets_the_fixed_account_listing() {
        let url = GitHubPages::new("nm").endpoint().unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/nm/repos?per_page=100");
    }
}
