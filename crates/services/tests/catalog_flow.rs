use std::path::PathBuf;
use std::sync::Arc;

use course_core::model::{Catalog, Course, CourseId, FilterMode, GlobalProgress, Level};
use course_core::time::fixed_clock;
use services::{AppServices, CatalogService, CatalogSource, CatalogStartup, StateStore};
use storage::repository::{InMemoryRepository, KeyValueRepository, Storage, StorageKey};

fn course(id: u64, title: &str, language: &str, chapters: usize) -> Course {
    Course::new(
        CourseId::new(id),
        title,
        format!("Learn {title}"),
        language,
        Level::Beginner,
        (0..chapters).map(|i| format!("{title} part {i}")).collect(),
    )
}

fn scenario_catalog() -> Catalog {
    Catalog::new(vec![course(1, "Alpha", "js", 4), course(2, "Beta", "python", 2)])
}

async fn open(repo: &InMemoryRepository) -> CatalogService {
    let store = StateStore::new(fixed_clock(), Arc::new(repo.clone()));
    CatalogService::open(scenario_catalog(), store).await
}

#[tokio::test]
async fn two_course_scenario() {
    let repo = InMemoryRepository::new();
    let svc = open(&repo).await;

    svc.toggle_chapter(CourseId::new(1), 0, true).await.unwrap();
    svc.toggle_chapter(CourseId::new(1), 1, true).await.unwrap();
    let progress = svc.course_progress(CourseId::new(1)).await;
    assert_eq!(progress.completed().iter().copied().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(progress.percent(), 50);

    let outcome = svc.toggle_chapter(CourseId::new(2), 0, true).await.unwrap();
    assert_eq!(outcome.global, GlobalProgress { done: 3, total: 6 });
    assert_eq!(svc.global_progress().await, GlobalProgress { done: 3, total: 6 });

    let fav = svc.toggle_favorite(CourseId::new(2)).await.unwrap();
    assert!(fav.is_favorite);
    assert_eq!(
        svc.favorites().await.iter().collect::<Vec<_>>(),
        vec![CourseId::new(2)]
    );

    let only_favorites = svc.search("", FilterMode::Favorites).await;
    let ids: Vec<_> = only_favorites.iter().map(|v| v.course.id()).collect();
    assert_eq!(ids, vec![CourseId::new(2)]);
}

#[tokio::test]
async fn state_survives_a_restart() {
    let repo = InMemoryRepository::new();
    {
        let svc = open(&repo).await;
        svc.toggle_chapter(CourseId::new(1), 3, true).await.unwrap();
        svc.toggle_chapter(CourseId::new(2), 1, true).await.unwrap();
        svc.toggle_favorite(CourseId::new(1)).await.unwrap();
    }

    let svc = open(&repo).await;
    assert_eq!(svc.course_progress(CourseId::new(1)).await.percent(), 25);
    assert_eq!(svc.course_progress(CourseId::new(2)).await.percent(), 50);
    assert!(svc.favorites().await.contains(CourseId::new(1)));
    assert_eq!(svc.global_progress().await, GlobalProgress { done: 2, total: 6 });
}

#[tokio::test]
async fn corrupt_storage_starts_empty() {
    let repo = InMemoryRepository::new();
    repo.put(StorageKey::Favorites, "{{{").await.unwrap();
    repo.put(StorageKey::Progress, r#"{"version":1,"data":"nope"}"#)
        .await
        .unwrap();

    let svc = open(&repo).await;
    assert!(svc.favorites().await.is_empty());
    assert_eq!(svc.global_progress().await, GlobalProgress { done: 0, total: 6 });

    // the next mutation overwrites the corrupt blob with a readable one
    svc.toggle_favorite(CourseId::new(2)).await.unwrap();
    let reopened = open(&repo).await;
    assert!(reopened.favorites().await.contains(CourseId::new(2)));
}

#[tokio::test]
async fn unreadable_catalog_leaves_app_unavailable() {
    let storage = Storage::in_memory();
    let source = CatalogSource::File(PathBuf::from("/no/such/catalog.json"));
    let services = AppServices::from_storage(&storage, &source, fixed_clock()).await;

    match services.catalog() {
        CatalogStartup::Unavailable { reason } => {
            assert!(reason.contains("catalog.json"), "unexpected reason: {reason}");
        }
        CatalogStartup::Ready(_) => panic!("catalog should not load"),
    }
}
