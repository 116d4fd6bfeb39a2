//! MIME type detection for catalog image files.

/// Map a file extension to an image MIME type.
pub fn mime_from_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

/// Detect the MIME type of an image payload.
///
/// Magic bytes are authoritative; the filename extension is the fallback
/// for payloads `infer` does not recognize. The final fallback is
/// `image/jpeg`, which is what the whole shipped catalog is.
pub fn detect_mime(filename: &str, data: &[u8]) -> String {
    if let Some(kind) = infer::get(data) {
        return kind.mime_type().to_string();
    }

    if let Some(ext) = filename.rsplit('.').next() {
        if let Some(mime) = mime_from_extension(ext) {
            return mime.to_string();
        }
    }

    "image/jpeg".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_mime_from_magic_bytes() {
        // JPEG SOI marker wins over a misleading extension
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];
        assert_eq!(detect_mime("photo.png", &jpeg), "image/jpeg");

        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
        assert_eq!(detect_mime("photo.jpg", &png), "image/png");
    }

    #[test]
    fn test_detect_mime_falls_back_to_extension() {
        assert_eq!(detect_mime("course.webp", b"no magic here"), "image/webp");
        assert_eq!(detect_mime("course.JPG", b"no magic here"), "image/jpeg");
    }

    #[test]
    fn test_detect_mime_default() {
        assert_eq!(detect_mime("mystery.bin", b"????"), "image/jpeg");
    }

    #[test]
    fn test_mime_from_extension_unknown() {
        assert_eq!(mime_from_extension("tiff"), None);
    }
}
