use std::fmt::Display;

const TAG_REF_PREFIX: &str = "refs/tags/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Builds a tag from a git ref, e.g. `refs/tags/v1.10.15` becomes `v1.10.15`
    pub fn from_ref(value: &str) -> Self {
        Tag::new(strip_ref_prefix(value))
    }

    pub fn value(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Strips the leading `refs/tags/` from a value if it exists
pub fn strip_ref_prefix(value: &str) -> &str {
    value.strip_prefix(TAG_REF_PREFIX).unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_a_new_tag() {
        let tag = Tag::new("v1.0.0");

        assert_eq!(tag.value(), "v1.0.0");
    }

    #[test]
    fn should_strip_the_ref_prefix() {
        let tag = Tag::from_ref("refs/tags/v1.10.15");

        assert_eq!(tag.value(), "v1.10.15");
    }

    #[test]
    fn should_keep_a_plain_tag_as_is() {
        let tag = Tag::from_ref("v1.10.15");

        assert_eq!(tag.value(), "v1.10.15");
    }

    #[test]
    fn should_only_strip_a_leading_prefix() {
        assert_eq!(
            strip_ref_prefix("release refs/tags/v1.0.0"),
            "release refs/tags/v1.0.0"
        );
        assert_eq!(strip_ref_prefix("refs/heads/main"), "refs/heads/main");
    }

    #[test]
    fn should_be_empty_when_only_the_prefix_is_given() {
        assert!(Tag::from_ref("refs/tags/").is_empty());
    }
}
