//! Offline variant: generate insertion SQL files instead of writing to
//! the store.
//!
//! For environments where no write surface is reachable at all, each
//! catalog entry becomes one self-contained INSERT file with the payload
//! as a `'\x...'::bytea` literal, plus a `verify_images.sql` read-back
//! query to run after applying them.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{info, warn};

use fairway_core::{detect_mime, encoding, CatalogEntry, Error, NewCourseImage, Result};

use crate::insert::sql_quote;

/// Filename of the generated read-back query.
pub const VERIFY_FILE: &str = "verify_images.sql";

/// Files written by one generation pass.
#[derive(Debug)]
pub struct GeneratedSql {
    /// One INSERT file per processed catalog entry.
    pub insert_files: Vec<PathBuf>,
    pub verify_file: PathBuf,
    /// Catalog entries whose image file was absent.
    pub missing: Vec<String>,
}

/// Generate one INSERT file per catalog entry plus the verification query.
///
/// Missing image files are skipped and reported, matching the driver's
/// per-entry tolerance; a missing images directory is still a hard error.
pub async fn generate_insert_files(
    images_dir: &Path,
    output_dir: &Path,
    catalog: &[CatalogEntry],
) -> Result<GeneratedSql> {
    let dir_exists = fs::metadata(images_dir)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if !dir_exists {
        return Err(Error::NotFound(format!(
            "images directory {} does not exist",
            images_dir.display()
        )));
    }

    fs::create_dir_all(output_dir).await?;

    let mut insert_files = Vec::with_capacity(catalog.len());
    let mut missing = Vec::new();

    for entry in catalog {
        let image_path = images_dir.join(entry.file);
        let data = match fs::read(&image_path).await {
            Ok(data) => data,
            Err(e) => {
                warn!(
                    subsystem = "store",
                    component = "sqlgen",
                    file = entry.file,
                    error = %e,
                    "Image file not readable, skipping"
                );
                missing.push(entry.file.to_string());
                continue;
            }
        };

        let mime_type = detect_mime(entry.file, &data);
        let image = NewCourseImage::from_catalog(entry, mime_type, data);
        let out_path = output_dir.join(format!(
            "course{}_{}_image.sql",
            entry.course_id, entry.image_type
        ));
        fs::write(&out_path, insert_statement(&image)).await?;

        info!(
            subsystem = "store",
            component = "sqlgen",
            file = entry.file,
            out = %out_path.display(),
            file_size = image.file_size,
            "Generated insert file"
        );
        insert_files.push(out_path);
    }

    let verify_file = output_dir.join(VERIFY_FILE);
    fs::write(&verify_file, verify_statement()).await?;

    Ok(GeneratedSql {
        insert_files,
        verify_file,
        missing,
    })
}

/// Render one image as a self-contained INSERT with a bytea literal.
fn insert_statement(image: &NewCourseImage) -> String {
    let hole_id = image
        .hole_id
        .map_or_else(|| "NULL".to_string(), |id| id.to_string());
    let description = image
        .description
        .as_deref()
        .map_or_else(|| "NULL".to_string(), |d| format!("'{}'", sql_quote(d)));

    format!(
        "-- {image_type} image for course {course_id} ({file_size} bytes)\n\
         INSERT INTO course_images (\n    \
             course_id,\n    \
             hole_id,\n    \
             image_type,\n    \
             title,\n    \
             mime_type,\n    \
             image_data,\n    \
             file_size,\n    \
             is_primary,\n    \
             is_thumbnail,\n    \
             display_order,\n    \
             description\n\
         ) VALUES (\n    \
             {course_id},\n    \
             {hole_id},\n    \
             '{image_type}',\n    \
             '{title}',\n    \
             '{mime_type}',\n    \
             '{payload}'::bytea,\n    \
             {file_size},\n    \
             {is_primary},\n    \
             {is_thumbnail},\n    \
             {display_order},\n    \
             {description}\n\
         ) ON CONFLICT DO NOTHING;\n",
        image_type = image.image_type.as_str(),
        course_id = image.course_id,
        hole_id = hole_id,
        title = sql_quote(&image.title),
        mime_type = sql_quote(&image.mime_type),
        payload = encoding::hex_literal(&image.data),
        file_size = image.file_size,
        is_primary = image.is_primary,
        is_thumbnail = image.is_thumbnail,
        display_order = image.display_order,
        description = description,
    )
}

fn verify_statement() -> String {
    "-- Read back inserted images\n\
     SELECT\n    \
         course_id,\n    \
         title,\n    \
         image_type,\n    \
         file_size,\n    \
         is_primary,\n    \
         created_at\n\
     FROM course_images\n\
     ORDER BY course_id;\n"
        .to_string()
}
