use crate::{
    github::{
        builder::create_release_builder::CreateReleaseBuilder, release::LatestRelease,
        RepositoryClient,
    },
    http::Error,
};

pub struct ReleaseHandler<'c, C> {
    client: &'c C,
    owner: String,
    repo: String,
}

impl<'c, C> ReleaseHandler<'c, C>
where
    C: RepositoryClient,
{
    pub fn new(client: &'c C, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        ReleaseHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn create(&self) -> CreateReleaseBuilder<'c, C> {
        CreateReleaseBuilder::new(self.client, &self.owner, &self.repo)
    }

    pub async fn latest(&self) -> Result<LatestRelease, Error> {
        self.client
            .get_latest_release(&self.owner, &self.repo)
            .await
    }
}
