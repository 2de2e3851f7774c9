//! Semantic version bumping for manifest files.
//!
//! Finds the first `version = "X.Y.Z"` assignment in a manifest (such as
//! `Cargo.toml` or `pyproject.toml`), increments it, and writes the file
//! back in place. Every other byte of the file is preserved.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;
use strum::{Display, EnumString};
use thiserror::Error;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*version[ \t]*=[ \t]*"(\d+)\.(\d+)\.(\d+)""#)
        .expect("version regex is valid")
});

/// Errors during a version bump.
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("could not find version in {path}")]
    VersionNotFound { path: PathBuf },

    #[error("version component out of range: {0}")]
    InvalidVersion(String),

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Which component of the version to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BumpLevel {
    Major,
    Minor,
    Patch,
}

impl BumpLevel {
    /// Return `version` incremented at this level. Lower components reset
    /// to zero and pre-release/build metadata is dropped.
    pub fn apply(self, version: &Version) -> Result<Version, BumpError> {
        let overflow = || BumpError::InvalidVersion(format!("{version} cannot be bumped ({self})"));
        let next = |n: u64| n.checked_add(1).ok_or_else(overflow);
        Ok(match self {
            BumpLevel::Major => Version::new(next(version.major)?, 0, 0),
            BumpLevel::Minor => Version::new(version.major, next(version.minor)?, 0),
            BumpLevel::Patch => Version::new(version.major, version.minor, next(version.patch)?),
        })
    }
}

/// Outcome of a successful bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bumped {
    pub content: String,
    pub old: Version,
    pub new: Version,
}

/// Bump the first version assignment in `content`.
///
/// Returns `None` when the content has no `version = "X.Y.Z"` line.
pub fn bump_str(content: &str, level: BumpLevel) -> Result<Option<Bumped>, BumpError> {
    let Some(caps) = VERSION_RE.captures(content) else {
        return Ok(None);
    };
    let whole = caps.get_match();
    // Leading indentation stays; the assignment itself is normalised.
    let indent = whole.len() - whole.as_str().trim_start().len();
    let (assignment, [major, minor, patch]) = caps.extract();

    let component = |digits: &str| -> Result<u64, BumpError> {
        digits
            .parse::<u64>()
            .map_err(|_| BumpError::InvalidVersion(assignment.trim().to_string()))
    };
    let old = Version::new(component(major)?, component(minor)?, component(patch)?);
    let new = level.apply(&old)?;

    let mut updated = String::with_capacity(content.len());
    updated.push_str(&content[..whole.start() + indent]);
    updated.push_str(&format!("version = \"{new}\""));
    updated.push_str(&content[whole.end()..]);

    Ok(Some(Bumped {
        content: updated,
        old,
        new,
    }))
}

/// Bump the version in the manifest at `path`, rewriting it in place.
pub fn bump_file(path: &Path, level: BumpLevel) -> Result<Bumped, BumpError> {
    let content = std::fs::read_to_string(path).map_err(|e| BumpError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let bumped = bump_str(&content, level)?.ok_or_else(|| BumpError::VersionNotFound {
        path: path.to_path_buf(),
    })?;

    std::fs::write(path, &bumped.content).map_err(|e| BumpError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), old = %bumped.old, new = %bumped.new, "bumped version");
    Ok(bumped)
}
