use super::response::{CreatedReleaseResponse, LatestReleaseResponse};

/// Snapshot of the most recent published release of a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestRelease {
    pub tag_name: String,
}

impl LatestRelease {
    pub fn new(tag_name: impl Into<String>) -> Self {
        LatestRelease {
            tag_name: tag_name.into(),
        }
    }
}

impl From<LatestReleaseResponse> for LatestRelease {
    fn from(response: LatestReleaseResponse) -> Self {
        LatestRelease::new(response.tag_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRelease {
    pub id: u64,
    pub html_url: String,
    pub upload_url: String,
}

impl CreatedRelease {
    pub fn new(id: u64, html_url: impl Into<String>, upload_url: impl Into<String>) -> Self {
        CreatedRelease {
            id,
            html_url: html_url.into(),
            upload_url: upload_url.into(),
        }
    }
}

impl From<CreatedReleaseResponse> for CreatedRelease {
    fn from(response: CreatedReleaseResponse) -> Self {
        CreatedRelease::new(response.id, response.html_url, response.upload_url)
    }
}
