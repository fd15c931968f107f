use crate::github::dto::release_dto::ReleaseDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateReleaseRequest {
    pub tag_name: String,
    pub target_commitish: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

impl From<ReleaseDto> for CreateReleaseRequest {
    fn from(release: ReleaseDto) -> Self {
        CreateReleaseRequest {
            tag_name: release.tag.value().to_owned(),
            target_commitish: release.target_commitish,
            name: release.release_name,
            body: release.body,
            draft: release.draft,
            prerelease: release.prerelease,
        }
    }
}
