use super::ReleaseError;
use std::path::Path;

/// Release notes to publish, with the error of a failed file read if any
#[derive(Debug)]
pub struct ReleaseBody {
    pub text: String,
    pub read_error: Option<ReleaseError>,
}

/// Loads the body file when a path is given. A read failure falls back to
/// `body_text` and is carried in `read_error`; empty file content also falls
/// back to `body_text`.
pub async fn load(body_text: &str, body_path: Option<&Path>) -> ReleaseBody {
    let Some(path) = body_path else {
        return ReleaseBody {
            text: body_text.to_owned(),
            read_error: None,
        };
    };

    log::debug!("reading release body from {}", path.display());

    match tokio::fs::read_to_string(path).await {
        Ok(content) if !content.is_empty() => ReleaseBody {
            text: content,
            read_error: None,
        },
        Ok(_) => ReleaseBody {
            text: body_text.to_owned(),
            read_error: None,
        },
        Err(cause) => ReleaseBody {
            text: body_text.to_owned(),
            read_error: Some(ReleaseError::BodyRead {
                path: path.to_path_buf(),
                cause,
            }),
        },
    }
}
