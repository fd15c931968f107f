pub mod builder;
pub mod dto;
pub mod github_client;
pub mod handler;
pub(crate) mod macros;
pub mod release;
mod request;
mod response;
pub mod tag;

use self::{
    dto::release_dto::ReleaseDto,
    release::{CreatedRelease, LatestRelease},
};
use crate::http::Error;

pub use builder::BuilderExecutor;
pub use github_client::{GithubClient, DEFAULT_API_URL};
pub use handler::RepositoryAccess;

/// Release operations of a source-hosting platform
pub trait RepositoryClient {
    async fn get_latest_release(&self, owner: &str, repo: &str) -> Result<LatestRelease, Error>;

    async fn create_release(&self, release: ReleaseDto) -> Result<CreatedRelease, Error>;
}

impl<C> RepositoryClient for &C
where
    C: RepositoryClient,
{
    async fn get_latest_release(&self, owner: &str, repo: &str) -> Result<LatestRelease, Error> {
        (**self).get_latest_release(owner, repo).await
    }

    async fn create_release(&self, release: ReleaseDto) -> Result<CreatedRelease, Error> {
        (**self).create_release(release).await
    }
}
