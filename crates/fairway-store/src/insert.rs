//! Insertion strategy chain for binary image payloads.
//!
//! Which write surface exists on the remote store varies by environment:
//! some expose the `insert_course_image` stored function, some only the
//! generic `execute_sql` entry point, some a base64 variant of the
//! function. The chain tries each method in priority order and stops at
//! the first success. Failures here are structural (missing function,
//! revoked execute privilege), not transient, so there is no retry or
//! backoff within a method.

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use fairway_core::{encoding, truncate_for_display, Error, NewCourseImage, Result};

use crate::client::RestClient;

/// One way of writing an image to the store.
#[async_trait]
pub trait InsertMethod: Send + Sync {
    /// Remote entry point this method calls, used in logs and reports.
    fn name(&self) -> &'static str;

    /// Attempt the write. Any error means "try the next method".
    async fn insert(&self, client: &RestClient, image: &NewCourseImage) -> Result<()>;
}

/// Escape single quotes for embedding a string in a SQL literal.
pub(crate) fn sql_quote(s: &str) -> String {
    s.replace('\'', "''")
}

/// Priority 1: the `insert_course_image` stored function with a
/// `\x`-prefixed hex payload; bytea conversion happens server-side.
pub struct StoredFunctionHex;

#[async_trait]
impl InsertMethod for StoredFunctionHex {
    fn name(&self) -> &'static str {
        "insert_course_image"
    }

    async fn insert(&self, client: &RestClient, image: &NewCourseImage) -> Result<()> {
        let payload = json!({
            "p_course_id": image.course_id,
            "p_hole_id": image.hole_id,
            "p_image_type": image.image_type.as_str(),
            "p_title": image.title,
            "p_mime_type": image.mime_type,
            "p_image_data": encoding::hex_literal(&image.data),
        });
        client.rpc(self.name(), &payload).await.map(|_| ())
    }
}

/// Priority 2: a raw insertion statement through the generic `execute_sql`
/// entry point, with `decode(<hex>, 'hex')` doing the bytea conversion.
pub struct RawExecuteSql;

impl RawExecuteSql {
    fn statement(image: &NewCourseImage) -> String {
        let hole_id = image
            .hole_id
            .map_or_else(|| "NULL".to_string(), |id| id.to_string());
        let description = image
            .description
            .as_deref()
            .map_or_else(|| "NULL".to_string(), |d| format!("'{}'", sql_quote(d)));

        format!(
            "INSERT INTO course_images (\n    course_id,\n    hole_id,\n    image_type,\n    title,\n    mime_type,\n    image_data,\n    file_size,\n    is_primary,\n    is_thumbnail,\n    display_order,\n    description\n) VALUES (\n    {course_id},\n    {hole_id},\n    '{image_type}',\n    '{title}',\n    '{mime_type}',\n    decode('{hex}', 'hex'),\n    {file_size},\n    {is_primary},\n    {is_thumbnail},\n    {display_order},\n    {description}\n) ON CONFLICT DO NOTHING;",
            course_id = image.course_id,
            hole_id = hole_id,
            image_type = image.image_type.as_str(),
            title = sql_quote(&image.title),
            mime_type = sql_quote(&image.mime_type),
            hex = encoding::to_hex(&image.data),
            file_size = image.file_size,
            is_primary = image.is_primary,
            is_thumbnail = image.is_thumbnail,
            display_order = image.display_order,
            description = description,
        )
    }
}

#[async_trait]
impl InsertMethod for RawExecuteSql {
    fn name(&self) -> &'static str {
        "execute_sql"
    }

    async fn insert(&self, client: &RestClient, image: &NewCourseImage) -> Result<()> {
        let payload = json!({ "query": Self::statement(image) });
        client.rpc(self.name(), &payload).await.map(|_| ())
    }
}

/// Priority 3: base64 variant of the stored function, for backend
/// deployments whose function takes a base64 payload instead of hex.
pub struct StoredFunctionBase64;

#[async_trait]
impl InsertMethod for StoredFunctionBase64 {
    fn name(&self) -> &'static str {
        "insert_course_image_base64"
    }

    async fn insert(&self, client: &RestClient, image: &NewCourseImage) -> Result<()> {
        let payload = json!({
            "p_course_id": image.course_id,
            "p_hole_id": image.hole_id,
            "p_image_type": image.image_type.as_str(),
            "p_title": image.title,
            "p_mime_type": image.mime_type,
            "p_image_data": encoding::to_base64(&image.data),
        });
        client.rpc(self.name(), &payload).await.map(|_| ())
    }
}

/// Ordered chain of insertion methods.
pub struct InsertChain {
    methods: Vec<Box<dyn InsertMethod>>,
}

impl InsertChain {
    /// The standard chain in priority order.
    pub fn new() -> Self {
        Self {
            methods: vec![
                Box::new(StoredFunctionHex),
                Box::new(RawExecuteSql),
                Box::new(StoredFunctionBase64),
            ],
        }
    }

    /// A chain with custom methods, highest priority first.
    pub fn with_methods(methods: Vec<Box<dyn InsertMethod>>) -> Self {
        Self { methods }
    }

    /// Try each method until one succeeds.
    ///
    /// Returns the name of the winning method. When every method fails,
    /// returns [`Error::InsertionFailed`] carrying the last error's
    /// message, truncated for display.
    pub async fn insert(
        &self,
        client: &RestClient,
        image: &NewCourseImage,
    ) -> Result<&'static str> {
        let mut last_error: Option<Error> = None;

        for method in &self.methods {
            match method.insert(client, image).await {
                Ok(()) => {
                    info!(
                        subsystem = "store",
                        component = "insert",
                        method = method.name(),
                        course_id = image.course_id,
                        image_type = %image.image_type,
                        "Insert method succeeded"
                    );
                    return Ok(method.name());
                }
                Err(e) => {
                    warn!(
                        subsystem = "store",
                        component = "insert",
                        method = method.name(),
                        course_id = image.course_id,
                        error = %e,
                        "Insert method failed, trying next"
                    );
                    last_error = Some(e);
                }
            }
        }

        let message = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no insert methods configured".to_string());
        Err(Error::InsertionFailed(truncate_for_display(&message)))
    }
}

impl Default for InsertChain {
    fn default() -> Self {
        Self::new()
    }
}
