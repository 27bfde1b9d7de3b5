//! Page set references
//!
//! The stories themselves live with the runner. A benchmark either names a
//! registered story set or describes a small one inline with its archive.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Cloud storage bucket holding recorded page archives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Public,
    Partner,
    Internal,
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::Public => write!(f, "chromium-telemetry"),
            Bucket::Partner => write!(f, "chrome-partner-telemetry"),
            Bucket::Internal => write!(f, "chrome-telemetry"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorySetSpec {
    /// Archive manifest, relative to the perf story sets directory
    pub archive_data_file: &'static str,
    pub cloud_storage_bucket: Bucket,
    pub stories: &'static [&'static str],
}

impl StorySetSpec {
    pub fn archive_path(&self, perf_story_sets_dir: &Path) -> PathBuf {
        perf_story_sets_dir.join(self.archive_data_file)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSet {
    /// A story set registered with the runner
    Named(&'static str),
    Custom(StorySetSpec),
}

impl PageSet {
    pub fn stories(&self) -> &[&'static str] {
        match self {
            PageSet::Named(_) => &[],
            PageSet::Custom(spec) => spec.stories,
        }
    }
}

impl fmt::Display for PageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSet::Named(name) => write!(f, "{}", name),
            PageSet::Custom(spec) => write!(
                f,
                "[{}] ({} in {})",
                spec.stories.join(", "),
                spec.archive_data_file,
                spec.cloud_storage_bucket
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_path() {
        let spec = StorySetSpec {
            archive_data_file: "data/v8_pages.json",
            cloud_storage_bucket: Bucket::Partner,
            stories: &["AdwordCampaignDesktopPage"],
        };
        assert_eq!(
            spec.archive_path(Path::new("/perf/page_sets")),
            PathBuf::from("/perf/page_sets/data/v8_pages.json")
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(PageSet::Named("TodoMVCPageSet").to_string(), "TodoMVCPageSet");
        let custom = PageSet::Custom(StorySetSpec {
            archive_data_file: "data/v8_pages.json",
            cloud_storage_bucket: Bucket::Partner,
            stories: &["AdwordCampaignDesktopPage"],
        });
        assert_eq!(
            custom.to_string(),
            "[AdwordCampaignDesktopPage] (data/v8_pages.json in chrome-partner-telemetry)"
        );
        assert_eq!(custom.stories(), &["AdwordCampaignDesktopPage"]);
    }
}
