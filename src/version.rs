use semver::Version;

use crate::error::{BumpError, Result};

/// Applies a bump kind to a semantic version string.
///
/// Recognized kinds are `major`, `minor`, and `patch`; anything else
/// (including an empty kind from an unmatched signal with no default) is
/// rejected. The incremented component resets the lower ones, and any
/// pre-release or build metadata on the current version is cleared:
///
/// - **major**: `1.2.3` -> `2.0.0`
/// - **minor**: `1.2.3` -> `1.3.0`
/// - **patch**: `1.2.3` -> `1.2.4`
///
/// # Returns
/// * `Ok(String)` - The bumped version
/// * `Err(BumpError::InvalidVersion)` - If `current` is not a valid semver string
/// * `Err(BumpError::InvalidBumpKind)` - If `kind` is not a recognized increment
pub fn increment(current: &str, kind: &str) -> Result<String> {
    let version = Version::parse(current)
        .map_err(|e| BumpError::invalid_version(format!("{}: {}", current, e)))?;

    let bumped = match kind {
        "major" => Version::new(version.major + 1, 0, 0),
        "minor" => Version::new(version.major, version.minor + 1, 0),
        "patch" => Version::new(version.major, version.minor, version.patch + 1),
        other => return Err(BumpError::invalid_bump_kind(other)),
    };

    Ok(bumped.to_string())
}

/// Validates that a version string parses as semver, returning it normalized.
pub fn validate(version: &str) -> Result<String> {
    Version::parse(version)
        .map(|v| v.to_string())
        .map_err(|e| BumpError::invalid_version(format!("{}: {}", version, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_major() {
        assert_eq!(increment("1.2.3", "major").unwrap(), "2.0.0");
    }

    #[test]
    fn test_increment_minor() {
        assert_eq!(increment("1.2.3", "minor").unwrap(), "1.3.0");
    }

    #[test]
    fn test_increment_patch() {
        assert_eq!(increment("1.2.3", "patch").unwrap(), "1.2.4");
    }

    #[test]
    fn test_increment_clears_prerelease() {
        assert_eq!(increment("1.2.3-beta.1", "patch").unwrap(), "1.2.4");
        assert_eq!(increment("1.2.3-beta.1+build5", "minor").unwrap(), "1.3.0");
    }

    #[test]
    fn test_increment_rejects_unknown_kind() {
        let err = increment("1.2.3", "premajor").unwrap_err();
        assert!(matches!(err, BumpError::InvalidBumpKind(_)));
        assert!(err.to_string().contains("premajor"));
    }

    #[test]
    fn test_increment_rejects_empty_kind() {
        let err = increment("1.2.3", "").unwrap_err();
        assert!(matches!(err, BumpError::InvalidBumpKind(_)));
    }

    #[test]
    fn test_increment_rejects_invalid_version() {
        let err = increment("not-a-version", "patch").unwrap_err();
        assert!(matches!(err, BumpError::InvalidVersion(_)));
    }

    #[test]
    fn test_validate() {
        assert_eq!(validate("1.0.0").unwrap(), "1.0.0");
        assert_eq!(validate("1.0.0-rc.1").unwrap(), "1.0.0-rc.1");
        assert!(validate("1.0").is_err());
        assert!(validate("").is_err());
    }
}
