use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel used for any coordinate that could not be resolved
pub const UNKNOWN: &str = "Unknown";

/// Maven coordinates (groupId, artifactId, version)
///
/// Equality is exact and case-sensitive on all three fields. The derived
/// ordering (group, artifact, version) gives deterministic iteration in
/// keyed collections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Gav {
    group: String,
    artifact: String,
    version: String,
}

impl Gav {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    /// Splits a `group:artifact:version` id, tolerating partial input.
    ///
    /// - three or more parts: group, artifact, version (extra parts ignored)
    /// - two parts: group, artifact, version `Unknown`
    /// - one part: the artifact, with group and version `Unknown`
    ///
    /// Empty parts become `Unknown`.
    pub fn parse_lenient(id: &str) -> Self {
        let part = |p: Option<&str>| match p {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => UNKNOWN.to_string(),
        };
        let parts: Vec<&str> = id.split(':').collect();
        match parts.len() {
            0 | 1 => Self::new(UNKNOWN, part(parts.first().copied()), UNKNOWN),
            2 => Self::new(part(Some(parts[0])), part(Some(parts[1])), UNKNOWN),
            _ => Self::new(
                part(Some(parts[0])),
                part(Some(parts[1])),
                part(Some(parts[2])),
            ),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// True when the version is the `Unknown` sentinel
    pub fn has_unknown_version(&self) -> bool {
        self.version == UNKNOWN
    }
}

impl fmt::Display for Gav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_compact_form() {
        let gav = Gav::new("com.acme", "app", "1.0");
        assert_eq!(gav.to_string(), "com.acme:app:1.0");
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        assert_ne!(
            Gav::new("com.acme", "App", "1.0"),
            Gav::new("com.acme", "app", "1.0")
        );
    }

    #[test]
    fn test_parse_lenient_full() {
        let gav = Gav::parse_lenient("org.slf4j:slf4j-api:2.0.12");
        assert_eq!(gav, Gav::new("org.slf4j", "slf4j-api", "2.0.12"));
    }

    #[test]
    fn test_parse_lenient_partial_ids() {
        assert_eq!(
            Gav::parse_lenient("org.slf4j:slf4j-api"),
            Gav::new("org.slf4j", "slf4j-api", UNKNOWN)
        );
        assert_eq!(
            Gav::parse_lenient("slf4j-api"),
            Gav::new(UNKNOWN, "slf4j-api", UNKNOWN)
        );
        assert_eq!(Gav::parse_lenient(""), Gav::new(UNKNOWN, UNKNOWN, UNKNOWN));
        assert_eq!(
            Gav::parse_lenient("::1.0"),
            Gav::new(UNKNOWN, UNKNOWN, "1.0")
        );
    }

    #[test]
    fn test_has_unknown_version() {
        assert!(Gav::new("g", "a", UNKNOWN).has_unknown_version());
        assert!(!Gav::new("g", "a", "1.0").has_unknown_version());
    }
}
