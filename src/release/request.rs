use crate::{
    config::{Config, ConfigError, GITHUB_SHA, GITHUB_TOKEN, TAG_NAME},
    github::tag::{strip_ref_prefix, Tag},
};
use std::path::PathBuf;

/// Effective parameters of the release to publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    pub tag: Tag,
    pub name: String,
    pub body_text: String,
    pub body_path: Option<PathBuf>,
    pub draft: bool,
    pub prerelease: bool,
    pub commitish: String,
    pub owner: String,
    pub repo: String,
    pub current_owner: String,
    pub current_repo: String,
    pub fail_on_error: bool,
}

impl ReleaseRequest {
    pub fn resolve(config: &Config) -> Result<ReleaseRequest, ConfigError> {
        let inputs = &config.inputs;

        let tag = Tag::from_ref(&inputs.tag_name);
        if tag.is_empty() {
            return Err(ConfigError::MissingInput(TAG_NAME));
        }

        let (current_owner, current_repo) = config.context.repo()?;

        if config.context.token.is_none() {
            return Err(ConfigError::MissingEnv(GITHUB_TOKEN));
        }

        let commitish = match (inputs.commitish.as_str(), &config.context.sha) {
            ("", Some(sha)) => sha.to_owned(),
            ("", None) => return Err(ConfigError::MissingEnv(GITHUB_SHA)),
            (commitish, _) => commitish.to_owned(),
        };

        Ok(ReleaseRequest {
            tag,
            name: strip_ref_prefix(&inputs.release_name).to_owned(),
            body_text: inputs.body.to_owned(),
            body_path: Some(&inputs.body_path)
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            draft: inputs.draft == "true",
            prerelease: inputs.prerelease == "true",
            commitish,
            owner: or_default(&inputs.owner, current_owner),
            repo: or_default(&inputs.repo, current_repo),
            current_owner: current_owner.to_owned(),
            current_repo: current_repo.to_owned(),
            fail_on_error: fail_on_error(&inputs.fails_on_creation_error),
        })
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_owned()
    } else {
        value.to_owned()
    }
}

/// Reporting is on unless the input is explicitly set to something other
/// than `true`
fn fail_on_error(value: &str) -> bool {
    value.is_empty() || value == "true"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Context, Inputs};

    fn config(inputs: Inputs) -> Config {
        Config {
            context: Context {
                repository: Some("octo/current".to_owned()),
                sha: Some("abc123".to_owned()),
                token: Some("token".to_owned()),
                api_url: "https://api.github.com".to_owned(),
            },
            inputs,
        }
    }

    #[test]
    fn should_resolve_defaults_from_the_context() {
        let request = ReleaseRequest::resolve(&config(Inputs {
            tag_name: "v1.1.0".to_owned(),
            ..Default::default()
        }))
        .unwrap();

        assert_eq!(
            request,
            ReleaseRequest {
                tag: Tag::new("v1.1.0"),
                name: String::new(),
                body_text: String::new(),
                body_path: None,
                draft: false,
                prerelease: false,
                commitish: "abc123".to_owned(),
                owner: "octo".to_owned(),
                repo: "current".to_owned(),
                current_owner: "octo".to_owned(),
                current_repo: "current".to_owned(),
                fail_on_error: true,
            }
        );
    }

    #[test]
    fn should_strip_the_ref_prefix_from_tag_and_name() {
        let request = ReleaseRequest::resolve(&config(Inputs {
            tag_name: "refs/tags/v1.10.15".to_owned(),
            release_name: "refs/tags/v1.10.15".to_owned(),
            ..Default::default()
        }))
        .unwrap();

        assert_eq!(request.tag.value(), "v1.10.15");
        assert_eq!(request.name, "v1.10.15");
    }

    #[test]
    fn should_use_the_supplied_inputs() {
        let request = ReleaseRequest::resolve(&config(Inputs {
            tag_name: "v2.0.0".to_owned(),
            release_name: "Release 2".to_owned(),
            body: "Notes from input".to_owned(),
            body_path: "CHANGELOG.md".to_owned(),
            draft: "true".to_owned(),
            prerelease: "true".to_owned(),
            commitish: "main".to_owned(),
            owner: "other".to_owned(),
            repo: "target".to_owned(),
            fails_on_creation_error: "false".to_owned(),
        }))
        .unwrap();

        assert_eq!(request.name, "Release 2");
        assert_eq!(request.body_text, "Notes from input");
        assert_eq!(request.body_path, Some(PathBuf::from("CHANGELOG.md")));
        assert!(request.draft);
        assert!(request.prerelease);
        assert_eq!(request.commitish, "main");
        assert_eq!(request.owner, "other");
        assert_eq!(request.repo, "target");
        assert_eq!(request.current_owner, "octo");
        assert_eq!(request.current_repo, "current");
        assert!(!request.fail_on_error);
    }

    #[test]
    fn should_only_enable_flags_on_exact_true() {
        let request = ReleaseRequest::resolve(&config(Inputs {
            tag_name: "v2.0.0".to_owned(),
            draft: "True".to_owned(),
            prerelease: "yes".to_owned(),
            ..Default::default()
        }))
        .unwrap();

        assert!(!request.draft);
        assert!(!request.prerelease);
    }

    #[test]
    fn should_fail_on_error_unless_disabled() {
        assert!(fail_on_error(""));
        assert!(fail_on_error("true"));
        assert!(!fail_on_error("false"));
        assert!(!fail_on_error("no"));
    }

    #[test]
    fn should_require_a_tag() {
        let err = ReleaseRequest::resolve(&config(Inputs::default())).unwrap_err();

        assert_eq!(err.to_string(), "Input required and not supplied: tag_name");
    }

    #[test]
    fn should_reject_a_bare_ref_prefix_as_tag() {
        let err = ReleaseRequest::resolve(&config(Inputs {
            tag_name: "refs/tags/".to_owned(),
            ..Default::default()
        }))
        .unwrap_err();

        assert!(matches!(err, ConfigError::MissingInput(TAG_NAME)));
    }

    #[test]
    fn should_require_a_token() {
        let mut config = config(Inputs {
            tag_name: "v1.0.0".to_owned(),
            ..Default::default()
        });
        config.context.token = None;

        let err = ReleaseRequest::resolve(&config).unwrap_err();

        assert_eq!(err.to_string(), "GITHUB_TOKEN is not set");
    }

    #[test]
    fn should_require_a_commit_when_commitish_is_missing() {
        let mut config = config(Inputs {
            tag_name: "v1.0.0".to_owned(),
            ..Default::default()
        });
        config.context.sha = None;

        assert!(matches!(
            ReleaseRequest::resolve(&config),
            Err(ConfigError::MissingEnv(GITHUB_SHA))
        ));

        config.inputs.commitish = "main".to_owned();

        assert_eq!(ReleaseRequest::resolve(&config).unwrap().commitish, "main");
    }
}
