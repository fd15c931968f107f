use super::BuilderExecutor;
use crate::{
    github::{
        dto::release_dto::ReleaseDto, release::CreatedRelease, tag::Tag, RepositoryClient,
    },
    http::Error,
};

pub struct CreateReleaseBuilder<'c, C> {
    client: &'c C,
    pub owner: String,
    pub repo: String,
    pub release_name: String,
    pub release_tag: Tag,
    pub target_commitish: String,
    pub draft: bool,
    pub prerelease: bool,
    pub body: Option<String>,
}

impl<'c, C> CreateReleaseBuilder<'c, C>
where
    C: RepositoryClient,
{
    pub fn new(client: &'c C, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        CreateReleaseBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            release_name: String::new(),
            release_tag: Tag::new(""),
            target_commitish: String::new(),
            draft: false,
            prerelease: false,
            body: None,
        }
    }

    pub fn name(mut self, release_name: impl Into<String>) -> Self {
        self.release_name = release_name.into();
        self
    }

    pub fn tag(mut self, release_tag: &Tag) -> Self {
        self.release_tag = release_tag.to_owned();
        self
    }

    pub fn target_commitish(mut self, target_commitish: impl Into<String>) -> Self {
        self.target_commitish = target_commitish.into();
        self
    }

    pub fn draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    pub fn prerelease(mut self, prerelease: bool) -> Self {
        self.prerelease = prerelease;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl<'c, C> BuilderExecutor for CreateReleaseBuilder<'c, C>
where
    C: RepositoryClient,
{
    type Output = CreatedRelease;

    async fn execute(self) -> Result<CreatedRelease, Error> {
        let release = ReleaseDto {
            owner: self.owner,
            repo: self.repo,
            tag: self.release_tag,
            release_name: self.release_name,
            body: self.body.unwrap_or_default(),
            draft: self.draft,
            prerelease: self.prerelease,
            target_commitish: self.target_commitish,
        };

        self.client.create_release(release).await
    }
}
