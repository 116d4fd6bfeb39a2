//! Course image store access: existence guard, chained insert, and the
//! verification listing.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use fairway_core::{ImageType, NewCourseImage, Result, StoredImage};

use crate::client::RestClient;
use crate::config::StoreConfig;
use crate::insert::InsertChain;

/// Columns fetched for the post-ingestion verification listing.
const LISTING_COLUMNS: &str = "id,course_id,hole_id,image_type,title,file_size,created_at";

/// Everything the ingestion driver needs from the backing store.
///
/// The one production implementation is [`RestStore`]; tests use
/// [`crate::mock::MockStore`].
#[async_trait]
pub trait ReferenceStore: Send + Sync {
    /// Existence guard: is there already an image for this
    /// (course, category) natural key?
    ///
    /// Errors propagate; presence is never guessed, so a failed check
    /// aborts that entry rather than risking a duplicate insert.
    async fn image_exists(&self, course_id: i32, image_type: ImageType) -> Result<bool>;

    /// Write one image, trying each insertion strategy in priority order.
    /// Returns the name of the method that succeeded.
    async fn insert_image(&self, image: &NewCourseImage) -> Result<&'static str>;

    /// Verification listing of every stored image, ordered by course.
    async fn list_images(&self) -> Result<Vec<StoredImage>>;
}

/// [`ReferenceStore`] over the remote REST surface.
pub struct RestStore {
    client: RestClient,
    chain: InsertChain,
}

impl RestStore {
    /// Connect with the standard insertion chain.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        Ok(Self {
            client: RestClient::new(config)?,
            chain: InsertChain::new(),
        })
    }

    /// Connect with a custom insertion chain.
    pub fn with_chain(config: &StoreConfig, chain: InsertChain) -> Result<Self> {
        Ok(Self {
            client: RestClient::new(config)?,
            chain,
        })
    }
}

#[async_trait]
impl ReferenceStore for RestStore {
    async fn image_exists(&self, course_id: i32, image_type: ImageType) -> Result<bool> {
        let rows = self
            .client
            .select(
                "course_images",
                "id",
                &[
                    ("course_id", course_id.to_string()),
                    ("image_type", image_type.to_string()),
                ],
                None,
            )
            .await?;

        debug!(
            subsystem = "store",
            component = "images",
            op = "exists",
            course_id,
            image_type = %image_type,
            present = !rows.is_empty(),
            "Existence check"
        );
        Ok(!rows.is_empty())
    }

    async fn insert_image(&self, image: &NewCourseImage) -> Result<&'static str> {
        self.chain.insert(&self.client, image).await
    }

    async fn list_images(&self) -> Result<Vec<StoredImage>> {
        let rows = self
            .client
            .select("course_images", LISTING_COLUMNS, &[], Some("course_id"))
            .await?;

        let mut images = Vec::with_capacity(rows.len());
        for row in rows {
            images.push(stored_image_from_row(row)?);
        }
        Ok(images)
    }
}

/// Decode one verification-listing row.
fn stored_image_from_row(row: Value) -> Result<StoredImage> {
    Ok(serde_json::from_value(row)?)
}
