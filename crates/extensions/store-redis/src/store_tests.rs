use super::*;

fn store(namespace: Option<&str>) -> RedisStore {
    let config = RedisStoreConfig::new("redis://127.0.0.1:6379")
        .with_namespace(namespace.map(str::to_string));
    RedisStore::new(config).unwrap()
}

#[test]
fn test_default_namespace() {
    let config = RedisStoreConfig::new("redis://127.0.0.1");
    assert_eq!(config.namespace.as_deref(), Some(DEFAULT_NAMESPACE));
}

#[test]
fn test_namespaced_key() {
    let store = store(Some("STOREHOUSE"));
    assert_eq!(store.namespace(), Some("STOREHOUSE"));
    assert_eq!(store.make_key("foo"), "STOREHOUSE:foo");
}

#[test]
fn test_bare_key_without_namespace() {
    let store = store(None);
    assert_eq!(store.namespace(), None);
    assert_eq!(store.make_key("foo"), "foo");
    assert!(store.scan_pattern().is_none());
}

#[test]
fn test_with_namespace_nests() {
    let root = store(Some("STOREHOUSE"));
    let test = root.with_namespace("TEST");
    let test_foo = test.with_namespace("FOO");

    assert_eq!(test.namespace(), Some("STOREHOUSE_TEST"));
    assert_eq!(test_foo.namespace(), Some("STOREHOUSE_TEST_FOO"));
    assert!(Arc::ptr_eq(&root.connection, &test_foo.connection));
}

#[test]
fn test_scan_pattern_covers_children_not_parents() {
    let root = store(Some("STOREHOUSE"));
    let child = root.with_namespace("FOO");

    let root_pattern = root.scan_pattern().unwrap();
    let child_pattern = child.scan_pattern().unwrap();
    let prefix = |p: &str| p.trim_end_matches('*').to_string();

    assert!(child.make_key("x").starts_with(&prefix(&root_pattern)));
    assert!(!root.make_key("x").starts_with(&prefix(&child_pattern)));
}

#[test]
fn test_invalid_url() {
    let result = RedisStore::new(RedisStoreConfig::new("not a url"));
    assert!(matches!(result, Err(StoreError::Misconfigured(_))));
}

#[tokio::test]
async fn test_delete_all_without_namespace_is_refused() {
    // Fails before any connection attempt.
    let store = store(None);
    let err = store.delete_all().await.unwrap_err();
    assert!(matches!(err, StoreError::Misconfigured(_)));
}

#[test]
fn test_millis_rounds_up() {
    assert_eq!(millis(Duration::ZERO), 1);
    assert_eq!(millis(Duration::from_micros(10)), 1);
    assert_eq!(millis(Duration::from_secs(2)), 2000);
}

/// Round trip against a live server when `STOREHOUSE_TEST_REDIS_URL` is set.
#[tokio::test]
async fn test_live_server_round_trip() {
    let Ok(url) = std::env::var("STOREHOUSE_TEST_REDIS_URL") else {
        return;
    };
    let root = RedisStore::new(RedisStoreConfig::new(url).with_namespace(Some("STOREHOUSE_TEST".into())))
        .unwrap();
    let child = root.with_namespace("FOO");

    root.set("bar", Bytes::from_static(b"root"), None).await.unwrap();
    child.set("foo", Bytes::from_static(b"child"), Some(Duration::from_secs(1))).await.unwrap();

    assert_eq!(root.expires_in("bar").await.unwrap(), Some(Ttl::Persistent));
    child.get("foo", Some(Duration::from_secs(10))).await.unwrap();
    assert!(child.expires_in("foo").await.unwrap().and_then(|t| t.as_secs()).unwrap() > 5);

    child.delete_all().await.unwrap();
    assert!(!child.exists("foo").await.unwrap());
    assert!(root.exists("bar").await.unwrap());

    root.delete_all().await.unwrap();
    assert!(root.get("bar", None).await.unwrap().is_none());
}
