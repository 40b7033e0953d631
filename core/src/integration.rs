//! Integration tests for the full pack pipeline
//!
//! Runs fetch → normalize → assemble → archive against stub image sources
//! and checks the archive and what is left on disk.

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Read;
    use std::path::Path;

    use crate::error::PanoramaError;
    use crate::normalize::TARGET_FORMAT;
    use crate::pack::{METADATA_FILE, PackMetadata};
    use crate::pipeline::{PackRequest, run};
    use crate::side::SIDES;
    use crate::test_utils::{FailingSource, JpegSource, list_names};
    use crate::workdir::TEMP_PREFIX;

    const BACKGROUND: &str = "assets/minecraft/textures/gui/title/background";

    fn request(location: &str, pack_name: &str, description: &str) -> PackRequest {
        PackRequest {
            location: location.to_string(),
            pack_name: pack_name.to_string(),
            description: description.to_string(),
        }
    }

    fn open_archive(path: &Path) -> zip::ZipArchive<File> {
        zip::ZipArchive::new(File::open(path).unwrap()).unwrap()
    }

    fn read_entry(archive: &mut zip::ZipArchive<File>, name: &str) -> Vec<u8> {
        let mut buf = Vec::new();
        archive.by_name(name).unwrap().read_to_end(&mut buf).unwrap();
        buf
    }

    fn temp_dirs(dir: &Path) -> Vec<String> {
        list_names(dir)
            .into_iter()
            .filter(|n| n.starts_with(TEMP_PREFIX))
            .collect()
    }

    // ============================================================================
    // Success path
    // ============================================================================

    #[test]
    fn test_new_york_end_to_end() {
        let out = tempfile::tempdir().unwrap();
        let source = JpegSource::default();

        let archive_path = run(&source, &request("New York", "test_pack", ""), out.path()).unwrap();

        assert_eq!(archive_path, out.path().join("test_pack.zip"));
        assert_eq!(list_names(out.path()), vec!["test_pack.zip"]);
        assert!(temp_dirs(out.path()).is_empty());

        let mut archive = open_archive(&archive_path);
        let metadata: PackMetadata =
            serde_json::from_slice(&read_entry(&mut archive, METADATA_FILE)).unwrap();
        assert_eq!(metadata.pack.description, "");
        assert_eq!(metadata.pack.pack_format, 34);

        let mut images: Vec<String> = archive
            .file_names()
            .filter(|n| n.starts_with(BACKGROUND) && !n.ends_with('/'))
            .map(String::from)
            .collect();
        images.sort();
        let expected: Vec<String> = SIDES
            .iter()
            .map(|s| format!("{}/{}.png", BACKGROUND, s.key))
            .collect();
        assert_eq!(images, expected);

        for name in &expected {
            let bytes = read_entry(&mut archive, name);
            assert_eq!(image::guess_format(&bytes).unwrap(), TARGET_FORMAT);
        }
    }

    #[test]
    fn test_archive_has_only_metadata_and_image_tree() {
        let out = tempfile::tempdir().unwrap();
        let source = JpegSource::default();
        let archive_path = run(&source, &request("x", "layout", "d"), out.path()).unwrap();

        let archive = open_archive(&archive_path);
        let top_level: std::collections::BTreeSet<&str> = archive
            .file_names()
            .map(|n| n.split('/').next().unwrap())
            .collect();
        let top_level: Vec<&str> = top_level.into_iter().collect();
        assert_eq!(top_level, vec!["assets", METADATA_FILE]);
        assert!(archive.file_names().all(|n| !n.ends_with(".jpg")));
    }

    #[test]
    fn test_description_with_quotes_survives() {
        let out = tempfile::tempdir().unwrap();
        let description = r#"The "Big" {Apple} \o/"#;
        let source = JpegSource::default();
        let req = request("NYC", "quoted", description);
        let archive_path = run(&source, &req, out.path()).unwrap();

        let mut archive = open_archive(&archive_path);
        let metadata: PackMetadata =
            serde_json::from_slice(&read_entry(&mut archive, METADATA_FILE)).unwrap();
        assert_eq!(metadata.pack.description, description);
    }

    #[test]
    fn test_sequential_runs_do_not_interfere() {
        let out = tempfile::tempdir().unwrap();
        let source = JpegSource::default();
        run(&source, &request("a", "first", ""), out.path()).unwrap();
        run(&source, &request("b", "second", ""), out.path()).unwrap();
        assert_eq!(list_names(out.path()), vec!["first.zip", "second.zip"]);
    }

    // ============================================================================
    // Failure paths
    // ============================================================================

    #[test]
    fn test_provider_failure_produces_no_archive() {
        for fail_at in [0, 5] {
            let out = tempfile::tempdir().unwrap();
            let source = FailingSource::on(fail_at);
            let err = run(&source, &request("x", "broken", ""), out.path()).unwrap_err();
            assert!(matches!(err, PanoramaError::Provider { .. }));
            assert!(!out.path().join("broken.zip").exists());

            // Working directory is left behind on failure.
            assert_eq!(temp_dirs(out.path()).len(), 1);
        }
    }

    #[test]
    fn test_garbage_response_produces_no_archive() {
        let out = tempfile::tempdir().unwrap();
        let source = JpegSource::with_body(b"not an image".to_vec());
        let err = run(&source, &request("x", "garbage", ""), out.path()).unwrap_err();
        assert!(matches!(err, PanoramaError::Decode { .. }));
        assert!(!out.path().join("garbage.zip").exists());
    }
}
