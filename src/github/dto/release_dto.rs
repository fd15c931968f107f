use crate::github::tag::Tag;

/// Parameters of a release creation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDto {
    pub owner: String,
    pub repo: String,
    pub tag: Tag,
    pub release_name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
    pub target_commitish: String,
}
