pub mod body;
pub mod request;

use crate::{
    config::{Config, ConfigError},
    github::{release::CreatedRelease, BuilderExecutor, RepositoryAccess, RepositoryClient},
    http,
    output::OutputSink,
};
use request::ReleaseRequest;
use std::{io, path::PathBuf};
use thiserror::Error;

const OUTPUT_ID: &str = "id";
const OUTPUT_HTML_URL: &str = "html_url";
const OUTPUT_UPLOAD_URL: &str = "upload_url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A release for the requested tag already exists
    Skipped,
    Created(CreatedRelease),
    Failed(String),
}

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Cannot fetch the latest release of {owner}/{repo}: {cause}")]
    Query {
        owner: String,
        repo: String,
        #[source]
        cause: http::Error,
    },
    #[error("Cannot read body file '{}': {cause}", .path.display())]
    BodyRead {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },
    #[error("Cannot create release {tag} on {owner}/{repo}: {cause}")]
    Create {
        owner: String,
        repo: String,
        tag: String,
        #[source]
        cause: http::Error,
    },
    #[error("Cannot write output {name}: {cause}")]
    Output {
        name: &'static str,
        #[source]
        cause: io::Error,
    },
}

impl ReleaseError {
    /// Whether the error is reported even when `failsOnCreationError` is off
    fn always_reported(&self) -> bool {
        !matches!(self, ReleaseError::Query { .. } | ReleaseError::Create { .. })
    }
}

/// Publishes a release for a tag unless the latest release already has it
pub struct ReleaseOrchestrator<C, S> {
    client: C,
    sink: S,
}

impl<C, S> ReleaseOrchestrator<C, S>
where
    C: RepositoryClient,
    S: OutputSink,
{
    pub fn new(client: C, sink: S) -> Self {
        ReleaseOrchestrator { client, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub async fn run(&mut self, config: &Config) -> Outcome {
        let request = match ReleaseRequest::resolve(config) {
            Ok(request) => request,
            Err(err) => return self.fail(err.into(), true),
        };

        match self.publish(&request).await {
            Ok(outcome) => outcome,
            Err(err) => self.fail(err, request.fail_on_error),
        }
    }

    async fn publish(&mut self, request: &ReleaseRequest) -> Result<Outcome, ReleaseError> {
        log::info!(
            "current repository {}/{}",
            request.current_owner,
            request.current_repo
        );

        let latest = self
            .client
            .repo(&request.current_owner, &request.current_repo)
            .releases()
            .latest()
            .await
            .map_err(|cause| ReleaseError::Query {
                owner: request.current_owner.to_owned(),
                repo: request.current_repo.to_owned(),
                cause,
            })?;

        log::info!(
            "comparing latest release tag '{}' to '{}'",
            latest.tag_name,
            request.tag
        );
        if latest.tag_name == request.tag.value() {
            log::info!("release {} already exists, nothing to do", request.tag);
            return Ok(Outcome::Skipped);
        }

        let body = body::load(&request.body_text, request.body_path.as_deref()).await;
        if let Some(err) = &body.read_error {
            log::error!("{}", err);
            self.sink.set_failed(&err.to_string());
        }

        log::info!(
            "creating release {} on {}/{}",
            request.tag,
            request.owner,
            request.repo
        );
        let release = self
            .client
            .repo(&request.owner, &request.repo)
            .releases()
            .create()
            .tag(&request.tag)
            .name(&request.name)
            .body(body.text)
            .draft(request.draft)
            .prerelease(request.prerelease)
            .target_commitish(&request.commitish)
            .execute()
            .await
            .map_err(|cause| ReleaseError::Create {
                owner: request.owner.to_owned(),
                repo: request.repo.to_owned(),
                tag: request.tag.value().to_owned(),
                cause,
            })?;

        log::info!("created release {} at {}", release.id, release.html_url);
        self.write_outputs(&release)?;

        Ok(Outcome::Created(release))
    }

    fn write_outputs(&mut self, release: &CreatedRelease) -> Result<(), ReleaseError> {
        for (name, value) in [
            (OUTPUT_ID, release.id.to_string()),
            (OUTPUT_HTML_URL, release.html_url.to_owned()),
            (OUTPUT_UPLOAD_URL, release.upload_url.to_owned()),
        ] {
            self.sink
                .set_output(name, &value)
                .map_err(|cause| ReleaseError::Output { name, cause })?;
        }

        Ok(())
    }

    fn fail(&mut self, err: ReleaseError, fail_on_error: bool) -> Outcome {
        let message = err.to_string();

        if fail_on_error || err.always_reported() {
            log::error!("{}", message);
            self.sink.set_failed(&message);
        } else {
            log::warn!("{} (not reported, failsOnCreationError is off)", message);
        }

        if let Err(err) = self.sink.set_output(OUTPUT_UPLOAD_URL, "") {
            log::error!("cannot clear output {}: {}", OUTPUT_UPLOAD_URL, err);
        }

        Outcome::Failed(message)
    }
}
