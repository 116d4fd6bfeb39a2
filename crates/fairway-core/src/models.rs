//! Domain records shared by the ingestion and verification paths.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;

/// Category tag of a course image.
///
/// Derived from the asset filename; `aerial` is the only category shipped
/// in the static catalog, the rest cover the naming convention of the
/// wider image set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    Aerial,
    Main,
    Layout,
    Hole,
    Clubhouse,
    Tee,
    Green,
    Fairway,
    Scorecard,
    General,
}

impl ImageType {
    /// Stable string tag stored in the `image_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aerial => "aerial",
            Self::Main => "main",
            Self::Layout => "layout",
            Self::Hole => "hole",
            Self::Clubhouse => "clubhouse",
            Self::Tee => "tee",
            Self::Green => "green",
            Self::Fairway => "fairway",
            Self::Scorecard => "scorecard",
            Self::General => "general",
        }
    }

    /// Classify an asset filename by its naming convention
    /// (`course_1_aerial.jpg`, `course_2_hole_3.jpg`, ...).
    ///
    /// Unrecognized names fall back to [`ImageType::General`].
    pub fn from_filename(filename: &str) -> Self {
        if filename.contains("_main") {
            Self::Main
        } else if filename.contains("_layout") {
            Self::Layout
        } else if filename.contains("_hole_") {
            Self::Hole
        } else if filename.contains("_aerial") {
            Self::Aerial
        } else if filename.contains("_clubhouse") {
            Self::Clubhouse
        } else if filename.contains("_tee") {
            Self::Tee
        } else if filename.contains("_green") {
            Self::Green
        } else if filename.contains("_fairway") {
            Self::Fairway
        } else if filename.contains("_scorecard") {
            Self::Scorecard
        } else {
            Self::General
        }
    }
}

impl std::fmt::Display for ImageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A binary course asset ready for insertion.
///
/// Immutable once constructed; `file_size` always equals `data.len()`,
/// enforced by [`NewCourseImage::from_catalog`].
#[derive(Debug, Clone)]
pub struct NewCourseImage {
    pub course_id: i32,
    /// `None` means a course-level image rather than a specific hole.
    pub hole_id: Option<i32>,
    pub image_type: ImageType,
    pub title: String,
    pub mime_type: String,
    pub data: Vec<u8>,
    pub file_size: i64,
    pub description: Option<String>,
    pub is_primary: bool,
    pub is_thumbnail: bool,
    pub display_order: i32,
}

impl NewCourseImage {
    /// Build an insertable image from a catalog entry and the bytes read
    /// from disk.
    pub fn from_catalog(entry: &CatalogEntry, mime_type: String, data: Vec<u8>) -> Self {
        let file_size = data.len() as i64;
        Self {
            course_id: entry.course_id,
            hole_id: None,
            image_type: entry.image_type,
            title: entry.title.to_string(),
            mime_type,
            data,
            file_size,
            description: Some(entry.description.to_string()),
            is_primary: entry.is_primary,
            is_thumbnail: false,
            display_order: entry.display_order,
        }
    }
}

/// One row of the post-ingestion verification listing.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredImage {
    pub id: i64,
    pub course_id: i32,
    #[serde(default)]
    pub hole_id: Option<i32>,
    pub image_type: String,
    pub title: String,
    pub file_size: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Terminal state of one catalog entry after an ingestion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestStatus {
    /// Written to the store by one of the insertion strategies
    Inserted,
    /// Natural key already present, nothing written
    Skipped,
    /// Local image file absent
    Missing,
    /// Existence check or every insertion strategy failed
    Failed,
}

impl std::fmt::Display for IngestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inserted => write!(f, "inserted"),
            Self::Skipped => write!(f, "skipped"),
            Self::Missing => write!(f, "missing"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Outcome of one catalog entry, with an optional human-readable detail
/// (winning method name, truncated error, ...).
#[derive(Debug, Clone)]
pub struct EntryReport {
    pub file: String,
    pub course_id: i32,
    pub status: IngestStatus,
    pub detail: Option<String>,
}

/// Tally of terminal states across one full catalog pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub inserted: usize,
    pub skipped: usize,
    pub missing: usize,
    pub failed: usize,
}

impl IngestSummary {
    pub fn record(&mut self, status: IngestStatus) {
        match status {
            IngestStatus::Inserted => self.inserted += 1,
            IngestStatus::Skipped => self.skipped += 1,
            IngestStatus::Missing => self.missing += 1,
            IngestStatus::Failed => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.inserted + self.skipped + self.missing + self.failed
    }
}

impl std::fmt::Display for IngestSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} inserted, {} skipped, {} missing, {} failed",
            self.inserted, self.skipped, self.missing, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AERIAL_CATALOG;

    #[test]
    fn test_image_type_from_filename() {
        assert_eq!(
            ImageType::from_filename("la-moraleja-1_aerial.jpg"),
            ImageType::Aerial
        );
        assert_eq!(
            ImageType::from_filename("course_2_hole_7.jpg"),
            ImageType::Hole
        );
        assert_eq!(ImageType::from_filename("course_1_main.jpg"), ImageType::Main);
        assert_eq!(ImageType::from_filename("whatever.png"), ImageType::General);
    }

    #[test]
    fn test_image_type_display() {
        assert_eq!(ImageType::Aerial.to_string(), "aerial");
        assert_eq!(ImageType::Scorecard.to_string(), "scorecard");
    }

    #[test]
    fn test_file_size_matches_payload_length() {
        let data = vec![0u8; 1337];
        let image =
            NewCourseImage::from_catalog(&AERIAL_CATALOG[0], "image/jpeg".to_string(), data);
        assert_eq!(image.file_size, 1337);
        assert_eq!(image.file_size as usize, image.data.len());
        assert_eq!(image.hole_id, None);
    }

    #[test]
    fn test_summary_record_and_display() {
        let mut summary = IngestSummary::default();
        summary.record(IngestStatus::Inserted);
        summary.record(IngestStatus::Inserted);
        summary.record(IngestStatus::Skipped);
        summary.record(IngestStatus::Failed);
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.to_string(), "2 inserted, 1 skipped, 0 missing, 1 failed");
    }
}
