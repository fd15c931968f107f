use serde::Deserialize;

#[derive(Deserialize)]
pub struct LatestReleaseResponse {
    pub tag_name: String,
}

#[derive(Deserialize)]
pub struct CreatedReleaseResponse {
    pub id: u64,
    pub html_url: String,
    pub upload_url: String,
}
