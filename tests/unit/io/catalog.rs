//! Tests for tile catalog loading

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use tilestack::GenerationError;
    use tilestack::io::catalog::{load_definitions, read_definitions};
    use tilestack::spatial::tiles::Faces;

    const CATALOG: &str = r#"[
        {"texture": "a.png", "rotation": 0, "allow_rotation": true,
         "pos_x": 1, "pos_y": 2, "neg_x": 3, "neg_y": 4, "pos_z": 5, "neg_z": 6},
        {"texture": "b.png",
         "pos_x": 7, "pos_y": 7, "neg_x": 7, "neg_y": 7, "pos_z": 7, "neg_z": 7}
    ]"#;

    // Tests definitions decode in file order with optional rotation flag
    // Verified by defaulting allow_rotation to true
    #[test]
    fn test_read_definitions() {
        let definitions = read_definitions(CATALOG.as_bytes(), Path::new("inline.json")).unwrap();

        assert_eq!(definitions.len(), 2);
        let first = definitions.first().unwrap();
        assert_eq!(first.texture, "a.png");
        assert!(first.allow_rotation);
        assert_eq!(first.faces.neg_z, 6);

        let second = definitions.get(1).unwrap();
        assert!(!second.allow_rotation);
        assert_eq!(second.faces, Faces::uniform(7));
    }

    // Tests malformed JSON becomes a catalog error carrying the path
    // Verified by mapping decode failures to FileSystem errors
    #[test]
    fn test_malformed_catalog() {
        let result = read_definitions(&b"[{\"texture\": 3}]"[..], Path::new("bad.json"));
        match result {
            Err(GenerationError::Catalog { path, .. }) => assert_eq!(path, Path::new("bad.json")),
            other => unreachable!("Expected Catalog error, got {other:?}"),
        }
    }

    // Tests a missing face identifier is rejected
    // Verified by giving face identifiers a serde default
    #[test]
    fn test_missing_face_is_rejected() {
        let json = r#"[{"texture": "a.png", "pos_x": 1, "pos_y": 1, "neg_x": 1, "neg_y": 1, "pos_z": 1}]"#;
        assert!(read_definitions(json.as_bytes(), Path::new("x.json")).is_err());
    }

    // Tests loading from disk and reporting unreadable files as catalog errors
    // Verified by returning an empty catalog for missing files
    #[test]
    fn test_load_definitions_from_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("input.json");
        fs::write(&path, CATALOG).expect("Failed to write catalog");

        assert_eq!(load_definitions(&path).unwrap().len(), 2);

        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(
            load_definitions(&missing),
            Err(GenerationError::Catalog { .. })
        ));
    }
}
