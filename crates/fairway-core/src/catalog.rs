//! Static catalogs: the image set to ingest and the fixture files to verify.
//!
//! Kept as plain const data so the driver and checker stay reusable when
//! either catalog changes.

use crate::models::ImageType;

/// One local image file and its store metadata.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Filename under the images directory.
    pub file: &'static str,
    pub course_id: i32,
    pub title: &'static str,
    pub image_type: ImageType,
    pub description: &'static str,
    pub is_primary: bool,
    pub display_order: i32,
}

/// Aerial views of the four La Moraleja courses.
///
/// (course_id, image_type) is the natural idempotency key: re-running the
/// loader against a store that already holds one of these pairs skips it.
pub const AERIAL_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        file: "la-moraleja-1_aerial.jpg",
        course_id: 1,
        title: "La Moraleja Course 1 - Aerial View",
        image_type: ImageType::Aerial,
        description: "Aerial view of La Moraleja Course 1",
        is_primary: true,
        display_order: 1,
    },
    CatalogEntry {
        file: "la-moraleja-2_aerial.jpg",
        course_id: 2,
        title: "La Moraleja Course 2 - Aerial View",
        image_type: ImageType::Aerial,
        description: "Aerial view of La Moraleja Course 2",
        is_primary: true,
        display_order: 1,
    },
    CatalogEntry {
        file: "la-moraleja-3_aerial.jpg",
        course_id: 3,
        title: "La Moraleja Course 3 - Aerial View",
        image_type: ImageType::Aerial,
        description: "Aerial view of La Moraleja Course 3",
        is_primary: true,
        display_order: 1,
    },
    CatalogEntry {
        file: "la-moraleja-4_aerial.jpg",
        course_id: 4,
        title: "La Moraleja Course 4 - Aerial View",
        image_type: ImageType::Aerial,
        description: "Aerial view of La Moraleja Course 4",
        is_primary: true,
        display_order: 1,
    },
];

/// One generated hole-fixture file and its expected invariants.
#[derive(Debug, Clone, Copy)]
pub struct CourseSpec {
    /// Filename under the fixtures directory.
    pub file: &'static str,
    pub course_id: i64,
    /// Expected sum of par over all holes of the course.
    pub expected_par: i64,
}

/// The five course fixture files.
///
/// Courses 1-4 are standard 18-hole par-72 layouts; course 5 is the
/// pitch & putt layout, all par 3 (54 total) and exempt from the
/// 1..=18 handicap-completeness rule.
pub const COURSE_FIXTURES: &[CourseSpec] = &[
    CourseSpec {
        file: "06_holes_course1.sql",
        course_id: 1,
        expected_par: 72,
    },
    CourseSpec {
        file: "06_holes_course2.sql",
        course_id: 2,
        expected_par: 72,
    },
    CourseSpec {
        file: "06_holes_course3.sql",
        course_id: 3,
        expected_par: 72,
    },
    CourseSpec {
        file: "06_holes_course4.sql",
        course_id: 4,
        expected_par: 72,
    },
    CourseSpec {
        file: "06_holes_course5.sql",
        course_id: 5,
        expected_par: 54,
    },
];

/// The pitch & putt course, exempt from handicap completeness.
pub const SHORT_FORMAT_COURSE_ID: i64 = 5;

/// Tee-box fixture file, checked for globally unique leading ids.
pub const TEE_BOX_FIXTURE: &str = "05_tee_boxes.sql";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_course_ids_are_distinct() {
        let mut ids: Vec<i32> = AERIAL_CATALOG.iter().map(|e| e.course_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), AERIAL_CATALOG.len());
    }

    #[test]
    fn test_short_format_course_is_in_fixture_table() {
        assert!(COURSE_FIXTURES
            .iter()
            .any(|c| c.course_id == SHORT_FORMAT_COURSE_ID));
    }

    #[test]
    fn test_short_format_course_par_total() {
        let spec = COURSE_FIXTURES
            .iter()
            .find(|c| c.course_id == SHORT_FORMAT_COURSE_ID)
            .unwrap();
        assert_eq!(spec.expected_par, 54);
    }
}
