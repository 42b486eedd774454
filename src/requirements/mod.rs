//! Package requirement checking.
//!
//! Frameworks carry a "bucket" of distribution package names that must be
//! available before install and present afterwards. This module provides:
//!
//! - [`RequirementsChecker`] - the narrow collaborator interface
//! - [`DpkgRequirements`] - system implementation probing dpkg/apt
//! - [`StaticRequirements`] - canned answers for tests

pub mod dpkg;

pub use dpkg::DpkgRequirements;

use crate::error::Result;

/// Answers whether a bucket of package requirements is installed or
/// obtainable on this system.
///
/// A malformed requirement name surfaces as an `Err`; callers treat lookup
/// failures as "not installed"/"not available" and continue (fail closed).
pub trait RequirementsChecker {
    /// Whether every package in the bucket is currently installed.
    /// An empty bucket is trivially installed.
    fn is_bucket_installed(&self, bucket: &[String]) -> Result<bool>;

    /// Whether every package in the bucket can be obtained on this system.
    /// An empty bucket is trivially available.
    fn is_bucket_available(&self, bucket: &[String]) -> Result<bool>;
}

/// Canned [`RequirementsChecker`] answers, for tests and dry environments.
#[derive(Debug, Clone)]
pub struct StaticRequirements {
    installed: bool,
    available: bool,
}

impl StaticRequirements {
    pub fn new(installed: bool, available: bool) -> Self {
        Self {
            installed,
            available,
        }
    }
}

impl RequirementsChecker for StaticRequirements {
    fn is_bucket_installed(&self, bucket: &[String]) -> Result<bool> {
        Ok(bucket.is_empty() || self.installed)
    }

    fn is_bucket_available(&self, bucket: &[String]) -> Result<bool> {
        Ok(bucket.is_empty() || self.available)
    }
}
