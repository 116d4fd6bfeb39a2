//! Fixture-set driver: read every fixture file, run all checks, collect
//! one structured report.
//!
//! This path is purely local and never touches the remote store. An
//! unreadable file becomes a per-file violation so the rest of the set
//! is still verified.

use std::path::Path;

use tracing::{info, warn};

use fairway_core::{CourseSpec, SHORT_FORMAT_COURSE_ID};

use crate::checker::{
    check_course_file, check_cross_file_hole_ids, check_tee_box_ids, FileReport, Violation,
};
use crate::parser::{parse_hole_tuples, parse_leading_ids};

/// Check results for the tee-box fixture file.
#[derive(Debug, Clone)]
pub struct TeeBoxReport {
    pub file: String,
    pub id_count: usize,
    pub violations: Vec<Violation>,
}

impl TeeBoxReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Everything one verification pass found.
#[derive(Debug)]
pub struct SetReport {
    pub files: Vec<FileReport>,
    /// File-set level violations (cross-file hole id duplicates).
    pub cross_file: Vec<Violation>,
    pub tee_boxes: TeeBoxReport,
}

impl SetReport {
    pub fn is_ok(&self) -> bool {
        self.files.iter().all(FileReport::is_ok)
            && self.cross_file.is_empty()
            && self.tee_boxes.is_ok()
    }

    /// Total number of violations across every check.
    pub fn violation_count(&self) -> usize {
        self.files.iter().map(|f| f.violations.len()).sum::<usize>()
            + self.cross_file.len()
            + self.tee_boxes.violations.len()
    }
}

/// Verify every course fixture plus the tee-box file under `dir`.
pub fn verify_fixture_set(dir: &Path, courses: &[CourseSpec], tee_file: &str) -> SetReport {
    let mut files = Vec::with_capacity(courses.len());
    let mut ids_per_file: Vec<(String, Vec<i64>)> = Vec::with_capacity(courses.len());

    for spec in courses {
        let path = dir.join(spec.file);
        let report = match std::fs::read_to_string(&path) {
            Ok(text) => {
                let tuples = parse_hole_tuples(&text);
                if tuples.is_empty() {
                    warn!(
                        subsystem = "fixtures",
                        component = "verify",
                        file = spec.file,
                        "No data found"
                    );
                }
                ids_per_file.push((
                    spec.file.to_string(),
                    tuples.iter().map(|t| t.hole_id).collect(),
                ));
                check_course_file(
                    spec.file,
                    &tuples,
                    spec.course_id,
                    spec.expected_par,
                    spec.course_id == SHORT_FORMAT_COURSE_ID,
                )
            }
            Err(e) => {
                warn!(
                    subsystem = "fixtures",
                    component = "verify",
                    file = spec.file,
                    error = %e,
                    "Fixture file unreadable"
                );
                FileReport {
                    file: spec.file.to_string(),
                    hole_count: 0,
                    par_total: 0,
                    id_range: None,
                    violations: vec![Violation::Unreadable {
                        reason: e.to_string(),
                    }],
                }
            }
        };
        files.push(report);
    }

    let cross_file = check_cross_file_hole_ids(&ids_per_file);

    let tee_path = dir.join(tee_file);
    let tee_boxes = match std::fs::read_to_string(&tee_path) {
        Ok(text) => {
            let ids = parse_leading_ids(&text);
            TeeBoxReport {
                file: tee_file.to_string(),
                id_count: ids.len(),
                violations: check_tee_box_ids(&ids),
            }
        }
        Err(e) => TeeBoxReport {
            file: tee_file.to_string(),
            id_count: 0,
            violations: vec![Violation::Unreadable {
                reason: e.to_string(),
            }],
        },
    };

    let report = SetReport {
        files,
        cross_file,
        tee_boxes,
    };

    info!(
        subsystem = "fixtures",
        component = "verify",
        files = report.files.len(),
        violations = report.violation_count(),
        ok = report.is_ok(),
        "Fixture verification complete"
    );

    report
}
