use crate::github::DEFAULT_API_URL;
use std::env;
use thiserror::Error;

pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const GITHUB_SHA: &str = "GITHUB_SHA";
pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const GITHUB_API_URL: &str = "GITHUB_API_URL";

pub const TAG_NAME: &str = "tag_name";
pub const RELEASE_NAME: &str = "release_name";
pub const BODY: &str = "body";
pub const BODY_PATH: &str = "body_path";
pub const DRAFT: &str = "draft";
pub const PRERELEASE: &str = "prerelease";
pub const COMMITISH: &str = "commitish";
pub const OWNER: &str = "owner";
pub const REPO: &str = "repo";
pub const FAILS_ON_CREATION_ERROR: &str = "failsOnCreationError";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),
    #[error("{0} is not set")]
    MissingEnv(&'static str),
    #[error("GITHUB_REPOSITORY must be in the form owner/repo, got '{0}'")]
    InvalidRepository(String),
}

/// Identity of the pipeline run
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub repository: Option<String>,
    pub sha: Option<String>,
    pub token: Option<String>,
    pub api_url: String,
}

impl Context {
    /// Owner and name of the repository the pipeline runs in
    pub fn repo(&self) -> Result<(&str, &str), ConfigError> {
        let repository = self
            .repository
            .as_deref()
            .ok_or(ConfigError::MissingEnv(GITHUB_REPOSITORY))?;

        match repository.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => Ok((owner, repo)),
            _ => Err(ConfigError::InvalidRepository(repository.to_owned())),
        }
    }
}

/// Raw step inputs, trimmed, empty when not supplied
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub tag_name: String,
    pub release_name: String,
    pub body: String,
    pub body_path: String,
    pub draft: String,
    pub prerelease: String,
    pub commitish: String,
    pub owner: String,
    pub repo: String,
    pub fails_on_creation_error: String,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub context: Context,
    pub inputs: Inputs,
}

impl Config {
    pub fn load() -> Config {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let input = |name: &str| {
            lookup(&input_env_name(name))
                .map(|value| value.trim().to_owned())
                .unwrap_or_default()
        };

        let context = Context {
            repository: non_empty(GITHUB_REPOSITORY),
            sha: non_empty(GITHUB_SHA),
            token: non_empty(GITHUB_TOKEN),
            api_url: non_empty(GITHUB_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
        };

        let inputs = Inputs {
            tag_name: input(TAG_NAME),
            release_name: input(RELEASE_NAME),
            body: input(BODY),
            body_path: input(BODY_PATH),
            draft: input(DRAFT),
            prerelease: input(PRERELEASE),
            commitish: input(COMMITISH),
            owner: input(OWNER),
            repo: input(REPO),
            fails_on_creation_error: input(FAILS_ON_CREATION_ERROR),
        };

        Config { context, inputs }
    }
}

/// The runner exports each input as `INPUT_<NAME>`, upper-cased with spaces
/// replaced by underscores
fn input_env_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}
