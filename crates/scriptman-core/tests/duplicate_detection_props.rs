// Property tests for name derivation and duplicate detection

use chrono::Utc;
use proptest::prelude::*;
use scriptman_core::rules::{derive_script_name, detect_duplicate, DuplicateReason};
use scriptman_core::{ScriptManError, ScriptRecord};
use std::path::Path;

fn record(id: i64, name: &str, path: &str) -> ScriptRecord {
    ScriptRecord {
        id,
        name: name.to_string(),
        path: path.to_string(),
        info: String::new(),
        registered_at: Utc::now(),
    }
}

proptest! {
    #[test]
    fn prop_name_is_file_stem(stem in "[a-z][a-z0-9_-]{0,12}", ext in "[a-z]{1,4}") {
        let path = format!("/tmp/dir/{}.{}", stem, ext);
        prop_assert_eq!(derive_script_name(Path::new(&path)).unwrap(), stem);
    }

    #[test]
    fn prop_readding_same_path_is_always_path_conflict(
        stem in "[a-z]{1,10}",
        others in proptest::collection::vec("[a-z]{1,10}", 0..6),
    ) {
        let path = format!("/srv/{}.sh", stem);
        let mut existing: Vec<ScriptRecord> = others
            .iter()
            .enumerate()
            .map(|(i, n)| record(i as i64 + 10, n, &format!("/other/{}/{}.py", i, n)))
            .collect();
        existing.push(record(1, &stem, &path));

        match detect_duplicate(&path, &existing) {
            Err(ScriptManError::DuplicateScript { reason, existing }) => {
                prop_assert_eq!(reason, DuplicateReason::PathAlreadyRegistered);
                prop_assert_eq!(existing.path, path);
            }
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn prop_accepted_name_is_unused(
        names in proptest::collection::hash_set("[a-z]{1,6}", 0..8),
        candidate in "[a-z]{1,6}",
    ) {
        let existing: Vec<ScriptRecord> = names
            .iter()
            .enumerate()
            .map(|(i, n)| record(i as i64, n, &format!("/r/{}.sh", n)))
            .collect();
        let path = format!("/new/{}.sh", candidate);

        match detect_duplicate(&path, &existing) {
            Ok(name) => {
                prop_assert_eq!(&name, &candidate);
                prop_assert!(existing.iter().all(|r| r.name != name));
            }
            Err(ScriptManError::DuplicateScript { reason, .. }) => {
                prop_assert_eq!(reason, DuplicateReason::NameInUse);
                prop_assert!(names.contains(&candidate));
            }
            Err(other) => prop_assert!(false, "unexpected {:?}", other),
        }
    }
}
