pub mod release_handler;
pub mod repository_handler;

use super::RepositoryClient;
use repository_handler::RepositoryHandler;

/// Repository handler access for every [`RepositoryClient`]
pub trait RepositoryAccess: RepositoryClient + Sized {
    fn repo(&self, owner: impl Into<String>, repo: impl Into<String>) -> RepositoryHandler<'_, Self> {
        RepositoryHandler::new(self, owner, repo)
    }
}

impl<C> RepositoryAccess for C where C: RepositoryClient {}
