//! Decision logic of the media ingestion pipeline.
//!
//! Each file in a batch is judged independently: unsupported MIME types and
//! oversize files are skipped without side effects or errors. Accepted files
//! get a storage key, a display order slot and an alt text, all derived from
//! how many files of the batch have already been stored. A skipped file
//! never consumes an index, so the stored subset always lands on dense
//! `max_order + 1 ..= max_order + n` positions.

use uuid::Uuid;

use crate::features::media::dtos::{extension_from_mime_type, is_accepted_mime_type};

/// One file of an upload batch, as declared by the client
#[derive(Debug)]
pub struct IncomingFile {
    pub name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Storage and metadata assignment for an accepted file
#[derive(Debug, Clone, PartialEq)]
pub struct StoredFilePlan {
    /// Storage key: `{event_id}-{batch_millis}-{index}.{ext}`. Unique within
    /// the batch via the index; concurrent batches in the same millisecond
    /// are not defended against.
    pub filename: String,
    pub display_order: i32,
    pub alt: String,
}

/// Judge one file of a batch. Returns `None` when the file is to be skipped.
///
/// `stored_index` is the number of files of this batch already stored (the
/// accepted file's 0-based position in the stored subset).
pub fn plan_stored_file(
    event_id: Uuid,
    event_name: &str,
    batch_millis: i64,
    max_order: i32,
    stored_index: usize,
    file: &IncomingFile,
    max_file_size: usize,
) -> Option<StoredFilePlan> {
    if !is_accepted_mime_type(&file.content_type) {
        return None;
    }

    if file.data.len() > max_file_size {
        return None;
    }

    let extension = extension_for(&file.name, &file.content_type);
    let kind = if file.content_type.starts_with("video/") {
        "Video"
    } else {
        "Image"
    };

    Some(StoredFilePlan {
        filename: format!("{}-{}-{}.{}", event_id, batch_millis, stored_index, extension),
        display_order: max_order + stored_index as i32 + 1,
        alt: format!("{} {} from {}", kind, stored_index + 1, event_name),
    })
}

/// Extension from the declared filename, falling back to the MIME type
fn extension_for<'a>(name: &'a str, content_type: &str) -> &'a str {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext,
        _ => extension_from_mime_type(content_type).unwrap_or("bin"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 500 * 1024 * 1024;

    fn file(name: &str, content_type: &str, len: usize) -> IncomingFile {
        IncomingFile {
            name: name.to_string(),
            content_type: content_type.to_string(),
            data: vec![0u8; len],
        }
    }

    fn event_id() -> Uuid {
        Uuid::parse_str("6a9f6bd2-7f29-4d7e-9c3a-111111111111").unwrap()
    }

    /// Mirrors the service loop: the stored index advances only when a file
    /// is accepted.
    fn run_batch(files: &[IncomingFile], max_order: i32) -> Vec<StoredFilePlan> {
        let mut stored = Vec::new();
        for f in files {
            if let Some(plan) =
                plan_stored_file(event_id(), "Nunta Anei", 1700000000000, max_order, stored.len(), f, MAX)
            {
                stored.push(plan);
            }
        }
        stored
    }

    #[test]
    fn test_mixed_batch_stores_only_valid_files_on_dense_orders() {
        let files = vec![
            file("a.jpg", "image/jpeg", 10),
            file("doc.pdf", "application/pdf", 10),
            file("b.jpg", "image/jpeg", 10),
            file("page.html", "text/html", 10),
            file("c.jpg", "image/jpeg", 10),
        ];

        let plans = run_batch(&files, 7);

        assert_eq!(plans.len(), 3);
        let orders: Vec<i32> = plans.iter().map(|p| p.display_order).collect();
        assert_eq!(orders, vec![8, 9, 10]);
        assert_eq!(plans[0].alt, "Image 1 from Nunta Anei");
        assert_eq!(plans[2].alt, "Image 3 from Nunta Anei");
    }

    #[test]
    fn test_all_oversize_batch_stores_nothing() {
        let files = vec![
            file("a.jpg", "image/jpeg", 10),
            file("b.jpg", "image/jpeg", 10),
        ];

        let mut stored = Vec::new();
        for f in &files {
            // A 5-byte ceiling makes every file oversize
            if let Some(plan) =
                plan_stored_file(event_id(), "Nunta Anei", 1700000000000, 0, stored.len(), f, 5)
            {
                stored.push(plan);
            }
        }

        assert!(stored.is_empty());
    }

    #[test]
    fn test_file_at_exact_ceiling_is_accepted() {
        let f = file("a.jpg", "image/jpeg", 100);
        assert!(plan_stored_file(event_id(), "E", 0, 0, 0, &f, 100).is_some());
        let f = file("a.jpg", "image/jpeg", 101);
        assert!(plan_stored_file(event_id(), "E", 0, 0, 0, &f, 100).is_none());
    }

    #[test]
    fn test_storage_key_shape() {
        let f = file("portret final.JPG", "image/jpeg", 10);
        let plan = plan_stored_file(event_id(), "E", 1700000000123, 4, 2, &f, MAX).unwrap();
        assert_eq!(
            plan.filename,
            "6a9f6bd2-7f29-4d7e-9c3a-111111111111-1700000000123-2.JPG"
        );
        assert_eq!(plan.display_order, 7);
    }

    #[test]
    fn test_video_gets_video_alt_text() {
        let f = file("clip.mp4", "video/mp4", 10);
        let plan = plan_stored_file(event_id(), "Botez Luca", 0, 0, 0, &f, MAX).unwrap();
        assert_eq!(plan.alt, "Video 1 from Botez Luca");
    }

    #[test]
    fn test_extension_falls_back_to_mime_type() {
        let f = file("noextension", "video/quicktime", 10);
        let plan = plan_stored_file(event_id(), "E", 0, 0, 0, &f, MAX).unwrap();
        assert!(plan.filename.ends_with(".mov"));

        // Hidden-file style names have no usable extension either
        let f = file(".hidden", "image/png", 10);
        let plan = plan_stored_file(event_id(), "E", 0, 0, 0, &f, MAX).unwrap();
        assert!(plan.filename.ends_with(".png"));

        let f = file("unknown", "image/jpeg", 10);
        let plan = plan_stored_file(event_id(), "E", 0, 0, 0, &f, MAX).unwrap();
        assert!(plan.filename.ends_with(".jpg"));
    }
}
