//! # fairway-core
//!
//! Core types, errors, and transfer encodings for the fairway reference
//! data loader.
//!
//! This crate provides the foundational pieces the other fairway crates
//! depend on:
//! - the shared [`Error`]/[`Result`] taxonomy
//! - text-safe binary transfer encodings (hex bytea literals, base64)
//! - domain records ([`NewCourseImage`], [`StoredImage`], ingest reports)
//! - the static image and fixture catalogs

pub mod catalog;
pub mod encoding;
pub mod error;
pub mod mime;
pub mod models;

// Re-export commonly used types at crate root
pub use catalog::{
    CatalogEntry, CourseSpec, AERIAL_CATALOG, COURSE_FIXTURES, SHORT_FORMAT_COURSE_ID,
    TEE_BOX_FIXTURE,
};
pub use encoding::{from_base64, from_hex_literal, hex_literal, to_base64, to_hex};
pub use error::{truncate_for_display, Error, Result, ERROR_DISPLAY_MAX};
pub use mime::{detect_mime, mime_from_extension};
pub use models::{
    EntryReport, ImageType, IngestStatus, IngestSummary, NewCourseImage, StoredImage,
};
