//! Deployment environment names

use std::fmt;

use crate::error::{Result, config::invalid_environment};

/// A validated deployment environment name (dev, test, qa, prod, ...)
///
/// The name is used as a directory component both when reading
/// `domains/<domain>/<env>/` and when writing `<output>/<env>/`, so it must be
/// a single plain path segment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Environment(String);

impl Environment {
    /// Validate and wrap an environment name
    pub fn new(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(invalid_environment(name, "must not be empty"));
        }
        if trimmed == "." || trimmed == ".." {
            return Err(invalid_environment(name, "must not be a relative path"));
        }
        if trimmed.contains('/') || trimmed.contains('\\') {
            return Err(invalid_environment(name, "must not contain path separators"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_are_accepted() {
        for name in ["dev", "test", "qa", "prod", "sandbox-eu"] {
            assert_eq!(Environment::new(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(Environment::new(" dev ").unwrap().as_str(), "dev");
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert!(Environment::new("").is_err());
        assert!(Environment::new("   ").is_err());
    }

    #[test]
    fn test_path_like_names_are_rejected() {
        for name in [".", "..", "dev/../prod", "a\\b"] {
            assert!(Environment::new(name).is_err(), "{name} should be rejected");
        }
    }
}
