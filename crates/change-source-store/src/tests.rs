use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use super::*;

static TEST_DIR_SEQ: AtomicU64 = AtomicU64::new(0);

fn test_config_home() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system time")
        .as_nanos();
    let seq = TEST_DIR_SEQ.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("change-source-store-test-{nanos}-{seq}"))
}

fn test_store() -> (PathBuf, CustomRegistryStore) {
    let home = test_config_home();
    let store = CustomRegistryStore::from_config_home(&home);
    (home, store)
}

fn urls(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn load_missing_file_is_empty() {
    let (home, store) = test_store();
    assert!(store.load().is_empty());
    assert!(!home.exists(), "load must not create the config directory");
}

#[test]
fn load_tolerates_empty_and_corrupt_files() {
    let (home, store) = test_store();
    std::fs::create_dir_all(store.path().parent().expect("path has parent"))
        .expect("must create config dir");

    for content in ["", "\"not an array\"", "{\"urls\": []}", "[1, 2", "null"] {
        std::fs::write(store.path(), content).expect("must write fixture");
        assert!(
            store.load().is_empty(),
            "content {content:?} should load as an empty list"
        );
    }

    let _ = std::fs::remove_dir_all(home);
}

#[test]
fn load_skips_non_string_items_and_duplicates() {
    let (home, store) = test_store();
    std::fs::create_dir_all(store.path().parent().expect("path has parent"))
        .expect("must create config dir");
    std::fs::write(
        store.path(),
        r#"["https://a/", 3, "https://b/", "https://a/", null]"#,
    )
    .expect("must write fixture");

    assert_eq!(store.load(), urls(&["https://a/", "https://b/"]));

    let _ = std::fs::remove_dir_all(home);
}

#[test]
fn save_creates_parent_dirs_and_pretty_prints() {
    let (home, store) = test_store();
    store
        .save(&urls(&["https://my.private.registry/"]))
        .expect("must save");

    assert_eq!(
        store.path(),
        home.join("change-source").join("custom-registries.json")
    );
    let content = std::fs::read_to_string(store.path()).expect("must read saved file");
    assert_eq!(content, "[\n  \"https://my.private.registry/\"\n]");

    let _ = std::fs::remove_dir_all(home);
}

#[test]
fn save_then_load_round_trips() {
    let (home, store) = test_store();
    let original = urls(&["https://a/", "https://b/", "https://c/"]);
    store.save(&original).expect("must save");
    store.save(&store.load()).expect("must save again");

    assert_eq!(store.load(), original);

    let _ = std::fs::remove_dir_all(home);
}

#[test]
fn add_deduplicates_exact_matches() {
    let (home, store) = test_store();
    assert!(store.add("https://internal/").expect("must add"));
    assert!(!store.add("https://internal/").expect("must skip duplicate"));
    assert!(store.add("https://INTERNAL/").expect("case differs, must add"));

    assert_eq!(
        store.load(),
        urls(&["https://internal/", "https://INTERNAL/"])
    );

    let _ = std::fs::remove_dir_all(home);
}

#[test]
fn add_ignores_empty_url() {
    let (_home, store) = test_store();
    assert!(!store.add("").expect("empty add must succeed"));
    assert!(!store.path().exists(), "empty add must not write the file");
}

#[test]
fn add_appends_and_remove_preserves_order() {
    let (home, store) = test_store();
    store
        .save(&urls(&["https://a/", "https://b/"]))
        .expect("must seed");

    store.add("https://c/").expect("must add");
    assert_eq!(
        store.load(),
        urls(&["https://a/", "https://b/", "https://c/"])
    );

    let removed = store.remove(&urls(&["https://b/"])).expect("must remove");
    assert_eq!(removed, 1);
    assert_eq!(store.load(), urls(&["https://a/", "https://c/"]));

    let _ = std::fs::remove_dir_all(home);
}

#[test]
fn remove_missing_url_still_rewrites_file() {
    let (home, store) = test_store();
    store.save(&urls(&["https://a/"])).expect("must seed");
    std::fs::write(store.path(), "[\"https://a/\"]").expect("must write compact fixture");

    let removed = store
        .remove(&urls(&["https://absent/"]))
        .expect("must remove");
    assert_eq!(removed, 0);
    assert_eq!(store.load(), urls(&["https://a/"]));
    let content = std::fs::read_to_string(store.path()).expect("must read file");
    assert_eq!(content, "[\n  \"https://a/\"\n]", "file must be rewritten");

    let _ = std::fs::remove_dir_all(home);
}

#[test]
fn remove_on_missing_file_creates_empty_list() {
    let (home, store) = test_store();
    store.remove(&urls(&["https://a/"])).expect("must remove");

    assert_eq!(
        std::fs::read_to_string(store.path()).expect("must read file"),
        "[]"
    );

    let _ = std::fs::remove_dir_all(home);
}

#[test]
fn delete_all_leaves_empty_list() {
    let (home, store) = test_store();
    let seeded = urls(&["https://a/", "https://b/"]);
    store.save(&seeded).expect("must seed");

    assert_eq!(store.remove(&seeded).expect("must remove"), 2);
    assert!(store.load().is_empty());

    let _ = std::fs::remove_dir_all(home);
}

#[test]
fn writes_fail_when_config_directory_is_a_file() {
    let (home, store) = test_store();
    std::fs::create_dir_all(&home).expect("must create config home");
    let blocked = home.join(CONFIG_DIR_NAME);
    std::fs::write(&blocked, "not a directory").expect("must write blocking file");

    let err = store
        .save(&urls(&["https://a/"]))
        .expect_err("save must fail when the config dir is a file");
    let message = format!("{err:#}");
    assert!(
        message.contains("failed creating config directory")
            && message.contains(&blocked.display().to_string()),
        "unexpected error: {message}"
    );

    let err = store
        .add("https://a/")
        .expect_err("add must propagate the save failure");
    assert!(format!("{err:#}").contains(&blocked.display().to_string()));

    let err = store
        .remove(&urls(&["https://a/"]))
        .expect_err("remove must propagate the save failure");
    assert!(format!("{err:#}").contains(&blocked.display().to_string()));

    assert_eq!(
        std::fs::read_to_string(&blocked).expect("must read blocking file"),
        "not a directory"
    );
    let _ = std::fs::remove_dir_all(home);
}

#[test]
fn save_fails_when_registry_file_is_a_directory() {
    let (home, store) = test_store();
    std::fs::create_dir_all(store.path()).expect("must create directory at file path");

    let err = store
        .save(&urls(&["https://a/"]))
        .expect_err("save must fail when the file path is a directory");
    let message = format!("{err:#}");
    assert!(
        message.contains("failed writing custom registries")
            && message.contains(&store.path().display().to_string()),
        "unexpected error: {message}"
    );

    let _ = std::fs::remove_dir_all(home);
}

#[test]
fn resolve_config_home_prefers_xdg() {
    let resolved = resolve_config_home(
        Some(OsString::from("/tmp/xdg")),
        Some(OsString::from("/home/dev")),
    )
    .expect("must resolve");
    assert_eq!(resolved, PathBuf::from("/tmp/xdg"));
}

#[test]
fn resolve_config_home_falls_back_to_home_dot_config() {
    let resolved = resolve_config_home(Some(OsString::new()), Some(OsString::from("/home/dev")))
        .expect("must resolve");
    assert_eq!(resolved, PathBuf::from("/home/dev").join(".config"));
}

#[test]
fn resolve_config_home_requires_home_without_xdg() {
    let err = resolve_config_home(None, None).expect_err("missing HOME must fail");
    assert!(err.to_string().contains("HOME is not set"), "unexpected error: {err}");
}
