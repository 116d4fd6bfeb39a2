//! # fairway-fixtures
//!
//! Parsing and invariant verification for generated SQL fixture files.
//!
//! Fixture files are produced by an external generator and only ever read
//! here: the parser extracts hole and tee-box value tuples lexically, the
//! checker evaluates the domain rules (unique identifiers, par totals,
//! handicap completeness) and reports every violation without short-
//! circuiting.

pub mod checker;
pub mod parser;
pub mod verify;

pub use checker::{
    check_course_file, check_cross_file_hole_ids, check_tee_box_ids, FileReport, Violation,
};
pub use parser::{parse_hole_tuples, parse_leading_ids, HoleTuple};
pub use verify::{verify_fixture_set, SetReport, TeeBoxReport};
