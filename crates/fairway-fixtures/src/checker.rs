//! Domain invariant checks over parsed fixture tuples.
//!
//! Every check is independent and non-short-circuiting: one failing rule
//! never hides another, so a single pass reports everything wrong with a
//! fixture set.

use std::collections::{BTreeMap, BTreeSet};

use crate::parser::HoleTuple;

/// Full 1..=18 handicap range a standard course must cover.
const HANDICAP_RANGE: std::ops::RangeInclusive<i64> = 1..=18;

/// One detected fixture defect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A tuple carries a course id other than the file's expected one.
    CourseIdMismatch { expected: i64, found: i64 },
    /// Hole ids repeated within one file.
    DuplicateHoleIds { ids: Vec<i64> },
    /// Sum of par over the file differs from the course's known total.
    ParTotalMismatch { expected: i64, actual: i64 },
    /// Handicap ranks absent from the 1..=18 range.
    MissingHandicaps { missing: Vec<i64> },
    /// Handicap ranks assigned to more than one hole.
    DuplicateHandicaps { duplicated: Vec<i64> },
    /// No tuples could be extracted from the file.
    NoData,
    /// The file could not be read at all.
    Unreadable { reason: String },
    /// Hole ids shared between different course files.
    CrossFileDuplicateHoleIds { ids: Vec<i64> },
    /// Tee-box ids repeated within the tee-box file.
    DuplicateTeeBoxIds { ids: Vec<i64> },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CourseIdMismatch { expected, found } => {
                write!(f, "wrong course_id: expected {expected}, got {found}")
            }
            Self::DuplicateHoleIds { ids } => write!(f, "duplicate hole ids: {ids:?}"),
            Self::ParTotalMismatch { expected, actual } => {
                write!(f, "wrong par total: expected {expected}, got {actual}")
            }
            Self::MissingHandicaps { missing } => write!(f, "missing handicaps: {missing:?}"),
            Self::DuplicateHandicaps { duplicated } => {
                write!(f, "duplicate handicaps: {duplicated:?}")
            }
            Self::NoData => write!(f, "no data found"),
            Self::Unreadable { reason } => write!(f, "unreadable: {reason}"),
            Self::CrossFileDuplicateHoleIds { ids } => {
                write!(f, "hole ids duplicated across files: {ids:?}")
            }
            Self::DuplicateTeeBoxIds { ids } => write!(f, "duplicate tee box ids: {ids:?}"),
        }
    }
}

/// Check results for one course fixture file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub file: String,
    pub hole_count: usize,
    pub par_total: i64,
    /// (min, max) of the hole ids seen, when any were parsed.
    pub id_range: Option<(i64, i64)>,
    pub violations: Vec<Violation>,
}

impl FileReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Distinct values appearing more than once, ascending.
fn duplicated_values(values: impl Iterator<Item = i64>) -> Vec<i64> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(value, _)| value)
        .collect()
}

/// Run every per-file rule over one course's parsed tuples.
///
/// `short_format` exempts the course from handicap completeness (the
/// pitch & putt layout has no 1..=18 ranking).
pub fn check_course_file(
    file: &str,
    tuples: &[HoleTuple],
    expected_course_id: i64,
    expected_par: i64,
    short_format: bool,
) -> FileReport {
    let mut violations = Vec::new();

    if tuples.is_empty() {
        violations.push(Violation::NoData);
        return FileReport {
            file: file.to_string(),
            hole_count: 0,
            par_total: 0,
            id_range: None,
            violations,
        };
    }

    for tuple in tuples {
        if tuple.course_id != expected_course_id {
            violations.push(Violation::CourseIdMismatch {
                expected: expected_course_id,
                found: tuple.course_id,
            });
        }
    }

    let duplicate_ids = duplicated_values(tuples.iter().map(|t| t.hole_id));
    if !duplicate_ids.is_empty() {
        violations.push(Violation::DuplicateHoleIds { ids: duplicate_ids });
    }

    let par_total: i64 = tuples.iter().map(|t| t.par).sum();
    if par_total != expected_par {
        violations.push(Violation::ParTotalMismatch {
            expected: expected_par,
            actual: par_total,
        });
    }

    if !short_format {
        let seen: BTreeSet<i64> = tuples.iter().map(|t| t.handicap).collect();
        let missing: Vec<i64> = HANDICAP_RANGE.filter(|v| !seen.contains(v)).collect();
        if !missing.is_empty() {
            violations.push(Violation::MissingHandicaps { missing });
        }

        let duplicated = duplicated_values(tuples.iter().map(|t| t.handicap));
        if !duplicated.is_empty() {
            violations.push(Violation::DuplicateHandicaps { duplicated });
        }
    }

    let min_id = tuples.iter().map(|t| t.hole_id).min();
    let max_id = tuples.iter().map(|t| t.hole_id).max();

    FileReport {
        file: file.to_string(),
        hole_count: tuples.len(),
        par_total,
        id_range: min_id.zip(max_id),
        violations,
    }
}

/// File-set rule: hole ids must be unique across every course file.
///
/// Each duplicated value is reported exactly once, no matter how many
/// files share it.
pub fn check_cross_file_hole_ids(ids_per_file: &[(String, Vec<i64>)]) -> Vec<Violation> {
    let all_ids = ids_per_file.iter().flat_map(|(_, ids)| ids.iter().copied());
    let ids = duplicated_values(all_ids);
    if ids.is_empty() {
        Vec::new()
    } else {
        vec![Violation::CrossFileDuplicateHoleIds { ids }]
    }
}

/// Tee-box rule: leading ids in the tee-box file must be unique.
pub fn check_tee_box_ids(ids: &[i64]) -> Vec<Violation> {
    let ids = duplicated_values(ids.iter().copied());
    if ids.is_empty() {
        Vec::new()
    } else {
        vec![Violation::DuplicateTeeBoxIds { ids }]
    }
}
