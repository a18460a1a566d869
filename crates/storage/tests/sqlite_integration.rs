use course_core::model::{CourseId, Favorites, ProgressMap};
use course_core::time::fixed_now;
use storage::repository::{KeyValueRepository, Storage, StorageKey};
use storage::snapshot;
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_roundtrip_persists_entries() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.get(StorageKey::Favorites).await.unwrap().is_none());

    repo.put(StorageKey::Favorites, "[1,2]").await.unwrap();
    repo.put(StorageKey::Favorites, "[2]").await.unwrap();
    repo.put(StorageKey::Theme, "dark").await.unwrap();

    assert_eq!(
        repo.get(StorageKey::Favorites).await.unwrap().as_deref(),
        Some("[2]")
    );
    assert_eq!(
        repo.get(StorageKey::Theme).await.unwrap().as_deref(),
        Some("dark")
    );
    assert!(repo.get(StorageKey::Progress).await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.put(StorageKey::Theme, "light").await.unwrap();
    repo.migrate().await.expect("second migrate");

    assert_eq!(
        repo.get(StorageKey::Theme).await.unwrap().as_deref(),
        Some("light")
    );
}

#[tokio::test]
async fn sqlite_storage_holds_snapshots() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_snapshot?mode=memory&cache=shared")
        .await
        .expect("storage");

    let mut progress = ProgressMap::new();
    progress.entry_mut(CourseId::new(4)).set_chapter(2, true, 3);
    let favorites: Favorites = [CourseId::new(4)].into_iter().collect();

    storage
        .entries
        .put(
            StorageKey::Progress,
            &snapshot::encode(&progress, fixed_now()).unwrap(),
        )
        .await
        .unwrap();
    storage
        .entries
        .put(
            StorageKey::Favorites,
            &snapshot::encode(&favorites, fixed_now()).unwrap(),
        )
        .await
        .unwrap();

    let raw_progress = storage.entries.get(StorageKey::Progress).await.unwrap();
    let raw_favorites = storage.entries.get(StorageKey::Favorites).await.unwrap();
    let loaded_progress: ProgressMap =
        snapshot::decode_or_default(StorageKey::Progress, raw_progress.as_deref());
    let loaded_favorites: Favorites =
        snapshot::decode_or_default(StorageKey::Favorites, raw_favorites.as_deref());

    assert_eq!(loaded_progress, progress);
    assert_eq!(loaded_favorites, favorites);
}
