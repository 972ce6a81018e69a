use super::*;
use tempfile::TempDir;

fn value(s: &'static str) -> Bytes {
    Bytes::from_static(s.as_bytes())
}

fn store_in(dir: &TempDir) -> FileStore {
    FileStore::new(dir.path().join("store"))
}

#[tokio::test]
async fn test_set_creates_directory() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    assert!(!store.path().exists());

    store.set("foo", value("bar"), None).await.unwrap();

    assert!(store.path().join("foo").exists());
    assert_eq!(store.get("foo", None).await.unwrap(), Some(value("bar")));
}

#[tokio::test]
async fn test_get_missing() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    assert!(store.get("foo", None).await.unwrap().is_none());
}

#[tokio::test]
async fn test_overwrite() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.set("foo", value("one"), None).await.unwrap();
    store.set("foo", value("two"), None).await.unwrap();
    assert_eq!(store.get("foo", None).await.unwrap(), Some(value("two")));
}

#[tokio::test]
async fn test_expired_value_is_removed_on_read() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.set("foo", value("bar"), Some(Duration::from_millis(10))).await.unwrap();

    tokio::time::sleep(Duration::from_millis(30)).await;

    assert!(store.get("foo", None).await.unwrap().is_none());
    assert!(!store.path().join("foo").exists());
}

#[tokio::test]
async fn test_get_and_renew() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.set("foo", value("bar"), Some(Duration::from_millis(50))).await.unwrap();
    store.get("foo", Some(Duration::from_secs(10))).await.unwrap();

    tokio::time::sleep(Duration::from_millis(80)).await;

    assert_eq!(store.get("foo", None).await.unwrap(), Some(value("bar")));
}

#[tokio::test]
async fn test_delete() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.set("key", value("value"), None).await.unwrap();
    store.delete("key").await.unwrap();
    assert!(!store.exists("key").await.unwrap());

    // Deleting again is a no-op.
    store.delete("key").await.unwrap();
}

#[tokio::test]
async fn test_expires_in() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    assert_eq!(store.expires_in("foo").await.unwrap(), None);

    store.set("foo", value("bar"), None).await.unwrap();
    assert_eq!(store.expires_in("foo").await.unwrap(), Some(Ttl::Persistent));

    store.set("foo", value("bar"), Some(Duration::from_secs(10))).await.unwrap();
    let secs = store.expires_in("foo").await.unwrap().and_then(|t| t.as_secs()).unwrap();
    assert!((9..=10).contains(&secs));
}

#[tokio::test]
async fn test_delete_all_recreates_directory() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    for i in 0..10 {
        store.set(&format!("key-{i}"), value("value"), None).await.unwrap();
    }

    store.delete_all().await.unwrap();

    assert!(store.path().is_dir());
    assert!(!store.exists("key-0").await.unwrap());
}

#[tokio::test]
async fn test_delete_all_on_missing_directory() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.delete_all().await.unwrap();
    assert!(store.path().is_dir());
}

#[tokio::test]
async fn test_delete_expired() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    for i in 0..10 {
        let expiry = (i % 2 == 0).then(|| Duration::from_millis(1));
        store.set(&format!("key-{i}"), value("value"), expiry).await.unwrap();
    }

    tokio::time::sleep(Duration::from_millis(10)).await;
    store.delete_expired().await.unwrap();

    for i in 0..10 {
        let on_disk = store.path().join(format!("key-{i}")).exists();
        assert_eq!(on_disk, i % 2 == 1, "key-{i}");
    }
}

#[tokio::test]
async fn test_delete_expired_skips_foreign_files() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.set("good", value("value"), None).await.unwrap();
    std::fs::write(store.path().join("junk"), b"not a storage object").unwrap();

    store.delete_expired().await.unwrap();

    assert!(store.exists("good").await.unwrap());
    assert!(store.path().join("junk").exists());
}

#[tokio::test]
async fn test_rejects_path_like_keys() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    for key in ["", ".", "..", "a/b", "..\\x"] {
        let err = store.set(key, value("v"), None).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey(_)), "{key:?}");
    }
}

#[tokio::test]
async fn test_no_temp_files_left_behind() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.set("foo", value("bar"), None).await.unwrap();

    let names: Vec<_> = std::fs::read_dir(store.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("foo")]);
}

#[test]
fn test_validate_name() {
    for name in ["sessions", "response_cache", "a.b", "..x"] {
        assert!(validate_name(name).is_ok(), "{name:?}");
    }
    for name in ["", ".", "..", "../x", "a/b", "a\\b", "a\0b"] {
        assert!(matches!(validate_name(name), Err(StoreError::InvalidKey(_))), "{name:?}");
    }
}
