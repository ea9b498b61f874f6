//! Group configuration.
//!
//! Site navigation organizes FAQ categories into named groups. That
//! mapping is an explicitly passed, immutable structure loaded from a
//! YAML file — never process-global state — so the compiler and CLI can
//! be exercised against arbitrary fixtures.
//!
//! ```yaml
//! groups:
//!   face:
//!     title: "Facial procedures"
//!     members: [rhinoplasty, otoplasty]
//!   body:
//!     title: "Body procedures"
//!     members: [liposuction]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One navigation group: a display title and its member category ids.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Group {
    /// Display name for the group.
    pub title: String,

    /// Category ids belonging to this group, in display order.
    pub members: Vec<String>,
}

/// Validated mapping from group name to its definition.
///
/// `BTreeMap` keeps group iteration order stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GroupsConfig {
    /// Groups by name.
    pub groups: BTreeMap<String, Group>,
}

impl GroupsConfig {
    /// Loads and validates a groups file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is unreadable, is not valid
    /// YAML, or fails validation (empty title, memberless group, or a
    /// category claimed by two groups).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_yaml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Structural validation, independent of any source directory.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: BTreeMap<&str, &str> = BTreeMap::new(); // category -> group

        for (name, group) in &self.groups {
            if group.title.trim().is_empty() {
                return Err(ConfigError::EmptyTitle {
                    group: name.clone(),
                });
            }
            if group.members.is_empty() {
                return Err(ConfigError::NoMembers {
                    group: name.clone(),
                });
            }
            for member in &group.members {
                if let Some(first) = seen.insert(member, name) {
                    return Err(ConfigError::DuplicateMember {
                        category: member.clone(),
                        first: first.to_string(),
                        second: name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// The group a category belongs to, if any.
    #[must_use]
    pub fn group_of(&self, category_id: &str) -> Option<(&str, &Group)> {
        self.groups
            .iter()
            .find(|(_, g)| g.members.iter().any(|m| m == category_id))
            .map(|(name, g)| (name.as_str(), g))
    }

    /// Compiled categories not claimed by any group.
    #[must_use]
    pub fn unclaimed<'a>(&self, category_ids: &[&'a str]) -> Vec<&'a str> {
        category_ids
            .iter()
            .copied()
            .filter(|id| self.group_of(id).is_none())
            .collect()
    }

    /// Group members with no compiled fragment.
    #[must_use]
    pub fn missing_members(&self, category_ids: &[&str]) -> Vec<(String, String)> {
        let mut missing = Vec::new();
        for (name, group) in &self.groups {
            for member in &group.members {
                if !category_ids.contains(&member.as_str()) {
                    missing.push((name.clone(), member.clone()));
                }
            }
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "groups:\n  face:\n    title: Facial procedures\n    members: [rhinoplasty, otoplasty]\n  body:\n    title: Body procedures\n    members: [liposuction]\n";

    fn parse(yaml: &str) -> GroupsConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_valid_config() {
        let config = parse(VALID);
        config.validate().unwrap();
        assert_eq!(config.groups.len(), 2);
        assert_eq!(config.groups["face"].members.len(), 2);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("groups.yaml");
        std::fs::write(&path, VALID).unwrap();
        let config = GroupsConfig::load(&path).unwrap();
        assert_eq!(config.groups["body"].title, "Body procedures");
    }

    #[test]
    fn test_load_missing_file() {
        let err = GroupsConfig::load(Path::new("/nonexistent/groups.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Unreadable { .. }));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("groups.yaml");
        std::fs::write(&path, "groups: [not, a, map\n").unwrap();
        let err = GroupsConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_empty_title_rejected() {
        let config = parse("groups:\n  face:\n    title: \"  \"\n    members: [a]\n");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyTitle { .. })
        ));
    }

    #[test]
    fn test_memberless_group_rejected() {
        let config = parse("groups:\n  face:\n    title: Face\n    members: []\n");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NoMembers { .. })
        ));
    }

    #[test]
    fn test_duplicate_member_rejected() {
        let config = parse(
            "groups:\n  a:\n    title: A\n    members: [shared]\n  b:\n    title: B\n    members: [shared]\n",
        );
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateMember { category, .. } if category == "shared"
        ));
    }

    #[test]
    fn test_group_of() {
        let config = parse(VALID);
        let (name, group) = config.group_of("liposuction").unwrap();
        assert_eq!(name, "body");
        assert_eq!(group.title, "Body procedures");
        assert!(config.group_of("unknown").is_none());
    }

    #[test]
    fn test_unclaimed_and_missing() {
        let config = parse(VALID);
        let compiled = vec!["rhinoplasty", "facelift"];
        assert_eq!(config.unclaimed(&compiled), vec!["facelift"]);

        let missing = config.missing_members(&compiled);
        assert!(missing.contains(&("body".to_string(), "liposuction".to_string())));
        assert!(missing.contains(&("face".to_string(), "otoplasty".to_string())));
        assert!(!missing.contains(&("face".to_string(), "rhinoplasty".to_string())));
    }
}
