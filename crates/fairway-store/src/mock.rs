//! Mock backing store for deterministic testing.
//!
//! Implements [`ReferenceStore`] over in-memory state with configurable
//! pre-existing records, failure injection, and a call log so tests can
//! assert exactly which remote operations the driver performed.
//!
//! ## Usage
//!
//! ```rust
//! use fairway_store::mock::MockStore;
//! use fairway_core::ImageType;
//!
//! let store = MockStore::new().with_existing(1, ImageType::Aerial);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use fairway_core::{Error, ImageType, NewCourseImage, Result, StoredImage};

use crate::images::ReferenceStore;

#[derive(Debug, Default)]
struct MockState {
    existing: HashSet<(i32, String)>,
    images: Vec<NewCourseImage>,
    calls: Vec<String>,
}

/// In-memory [`ReferenceStore`] with failure injection and a call log.
#[derive(Clone, Default)]
pub struct MockStore {
    state: Arc<Mutex<MockState>>,
    fail_existence_checks: bool,
    fail_inserts: bool,
}

impl MockStore {
    /// Empty store that accepts every insert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a (course, category) natural key so the existence
    /// guard reports it as present.
    pub fn with_existing(self, course_id: i32, image_type: ImageType) -> Self {
        self.state
            .lock()
            .unwrap()
            .existing
            .insert((course_id, image_type.to_string()));
        self
    }

    /// Make every existence check fail with a store error.
    pub fn failing_existence_checks(mut self) -> Self {
        self.fail_existence_checks = true;
        self
    }

    /// Make every insert fail with an exhausted-chain error.
    pub fn failing_inserts(mut self) -> Self {
        self.fail_inserts = true;
        self
    }

    /// Every store operation performed so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Images written through [`ReferenceStore::insert_image`].
    pub fn inserted_images(&self) -> Vec<NewCourseImage> {
        self.state.lock().unwrap().images.clone()
    }
}

#[async_trait]
impl ReferenceStore for MockStore {
    async fn image_exists(&self, course_id: i32, image_type: ImageType) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("exists:{course_id}:{image_type}"));
        if self.fail_existence_checks {
            return Err(Error::Store("injected existence-check failure".to_string()));
        }
        Ok(state.existing.contains(&(course_id, image_type.to_string())))
    }

    async fn insert_image(&self, image: &NewCourseImage) -> Result<&'static str> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(format!("insert:{}:{}", image.course_id, image.image_type));
        if self.fail_inserts {
            return Err(Error::InsertionFailed("injected insert failure".to_string()));
        }
        state
            .existing
            .insert((image.course_id, image.image_type.to_string()));
        state.images.push(image.clone());
        Ok("mock")
    }

    async fn list_images(&self) -> Result<Vec<StoredImage>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("list".to_string());
        Ok(state
            .images
            .iter()
            .enumerate()
            .map(|(index, image)| StoredImage {
                id: index as i64 + 1,
                course_id: image.course_id,
                hole_id: image.hole_id,
                image_type: image.image_type.to_string(),
                title: image.title.clone(),
                file_size: image.file_size,
                created_at: None,
            })
            .collect())
    }
}
