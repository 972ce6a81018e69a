use super::*;

fn value(s: &'static str) -> Bytes {
    Bytes::from_static(s.as_bytes())
}

#[tokio::test]
async fn test_get_missing() {
    let store = MemoryStore::new();
    assert!(store.get("foo", None).await.unwrap().is_none());
}

#[tokio::test]
async fn test_set_and_get() {
    let store = MemoryStore::new();
    store.set("key_1", value("value_1"), None).await.unwrap();
    store.set("key_2", value("value_2"), Some(Duration::from_secs(60))).await.unwrap();

    assert_eq!(store.get("key_1", None).await.unwrap(), Some(value("value_1")));
    assert_eq!(store.get("key_2", None).await.unwrap(), Some(value("value_2")));
}

#[tokio::test]
async fn test_expires() {
    let store = MemoryStore::new();
    store.set("foo", value("bar"), Some(Duration::from_millis(10))).await.unwrap();

    tokio::time::sleep(Duration::from_millis(30)).await;

    assert!(store.get("foo", None).await.unwrap().is_none());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_get_and_renew() {
    let store = MemoryStore::new();
    store.set("foo", value("bar"), Some(Duration::from_millis(50))).await.unwrap();
    store.get("foo", Some(Duration::from_secs(10))).await.unwrap();

    tokio::time::sleep(Duration::from_millis(80)).await;

    assert_eq!(store.get("foo", None).await.unwrap(), Some(value("bar")));
}

#[tokio::test]
async fn test_renew_does_not_add_expiry() {
    let store = MemoryStore::new();
    store.set("foo", value("bar"), None).await.unwrap();
    store.get("foo", Some(Duration::from_secs(10))).await.unwrap();

    assert_eq!(store.expires_in("foo").await.unwrap(), Some(Ttl::Persistent));
}

#[tokio::test]
async fn test_delete() {
    let store = MemoryStore::new();
    store.set("key", value("value"), Some(Duration::from_secs(60))).await.unwrap();
    store.delete("key").await.unwrap();
    assert!(store.get("key", None).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_is_noop() {
    let store = MemoryStore::new();
    store.delete("foo").await.unwrap();
}

#[tokio::test]
async fn test_exists() {
    let store = MemoryStore::new();
    assert!(!store.exists("foo").await.unwrap());
    store.set("foo", value("bar"), None).await.unwrap();
    assert!(store.exists("foo").await.unwrap());
}

#[tokio::test]
async fn test_expires_in() {
    let store = MemoryStore::new();
    assert_eq!(store.expires_in("foo").await.unwrap(), None);

    store.set("foo", value("bar"), None).await.unwrap();
    assert_eq!(store.expires_in("foo").await.unwrap(), Some(Ttl::Persistent));

    store.set("foo", value("bar"), Some(Duration::from_secs(10))).await.unwrap();
    let secs = store.expires_in("foo").await.unwrap().and_then(|t| t.as_secs()).unwrap();
    assert!((9..=10).contains(&secs));
}

#[tokio::test]
async fn test_delete_all() {
    let store = MemoryStore::new();
    for i in 0..10 {
        let expiry = (i % 2 == 1).then(|| Duration::from_secs(10));
        store.set(&format!("key-{i}"), value("value"), expiry).await.unwrap();
    }

    store.delete_all().await.unwrap();

    for i in 0..10 {
        assert!(store.get(&format!("key-{i}"), None).await.unwrap().is_none());
    }
}

#[tokio::test]
async fn test_delete_expired() {
    let store = MemoryStore::new();
    for i in 0..10 {
        let expiry = (i % 2 == 0).then(|| Duration::from_millis(1));
        store.set(&format!("key-{i}"), value("value"), expiry).await.unwrap();
    }

    tokio::time::sleep(Duration::from_millis(10)).await;
    store.delete_expired().await.unwrap();

    assert_eq!(store.len(), 5);
    for i in (1..10).step_by(2) {
        assert!(store.exists(&format!("key-{i}")).await.unwrap());
    }
}
