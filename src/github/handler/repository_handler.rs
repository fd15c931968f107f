use super::release_handler::ReleaseHandler;
use crate::github::RepositoryClient;

pub struct RepositoryHandler<'c, C> {
    client: &'c C,
    owner: String,
    repo: String,
}

impl<'c, C> RepositoryHandler<'c, C>
where
    C: RepositoryClient,
{
    pub fn new(client: &'c C, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepositoryHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn releases(&self) -> ReleaseHandler<'c, C> {
        ReleaseHandler::new(self.client, &self.owner, &self.repo)
    }
}
