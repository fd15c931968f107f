mod release_response;

pub use release_response::{CreatedReleaseResponse, LatestReleaseResponse};
