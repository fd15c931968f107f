use super::{
    dto::release_dto::ReleaseDto,
    release::{CreatedRelease, LatestRelease},
    request::CreateReleaseRequest,
    response::{CreatedReleaseResponse, LatestReleaseResponse},
    RepositoryClient,
};
use crate::{get, http::Error, post};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub REST client authenticated with a single token
pub struct GithubClient {
    token: String,
    api_url: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>, api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();

        GithubClient {
            token: token.into(),
            api_url: api_url.trim_end_matches('/').to_owned(),
        }
    }
}

impl RepositoryClient for GithubClient {
    async fn get_latest_release(&self, owner: &str, repo: &str) -> Result<LatestRelease, Error> {
        let uri = format!("{}/repos/{}/{}/releases/latest", self.api_url, owner, repo);

        log::debug!("fetching latest release from {}", uri);
        let response = get!(&uri, &self.token)?;

        let release = serde_json::from_str::<LatestReleaseResponse>(&response)
            .map_err(|cause| Error::ParseResponseError { cause })?;

        Ok(release.into())
    }

    async fn create_release(&self, release: ReleaseDto) -> Result<CreatedRelease, Error> {
        let uri = format!(
            "{}/repos/{}/{}/releases",
            self.api_url, release.owner, release.repo
        );

        let request = CreateReleaseRequest::from(release);

        let body = serde_json::to_string(&request)
            .map_err(|cause| Error::SerializeRequestError { cause })?;

        log::debug!("creating release at {}: {}", uri, body);
        let response = post!(&uri, &self.token, body)?;

        let release = serde_json::from_str::<CreatedReleaseResponse>(&response)
            .map_err(|cause| Error::ParseResponseError { cause })?;

        Ok(release.into())
    }
}
