use course_core::model::CourseId;

use super::test_harness::{ViewKind, setup_unavailable_harness, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn catalog_view_smoke_renders_cards_and_filters() {
    let mut harness = setup_view_harness(ViewKind::Catalog).await;
    let catalog = harness.catalog.clone().expect("catalog ready");
    catalog
        .toggle_chapter(CourseId::new(1), 0, true)
        .await
        .expect("toggle chapter");

    let html = harness.settle().await;
    assert!(html.contains("Alpha Script"), "missing course title in {html}");
    assert!(html.contains("Beta Python"), "missing course title in {html}");
    assert!(html.contains("25% complete"), "missing progress in {html}");
    assert!(html.contains("PYTHON"), "missing language filter in {html}");
    assert!(html.contains("Favorites"), "missing favorites filter in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn catalog_view_smoke_marks_favorites() {
    let mut harness = setup_view_harness(ViewKind::Catalog).await;
    let catalog = harness.catalog.clone().expect("catalog ready");
    catalog
        .toggle_favorite(CourseId::new(2))
        .await
        .expect("toggle favorite");

    let html = harness.settle().await;
    assert!(html.contains("heart-icon"), "missing favorite marker in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unavailable_catalog_smoke_renders_error_state() {
    let mut harness = setup_unavailable_harness("catalog file missing");
    let html = harness.settle().await;
    assert!(html.contains("Could not load courses"), "missing error title in {html}");
    assert!(html.contains("catalog file missing"), "missing reason in {html}");
    assert!(!html.contains("course-card"), "unexpected cards in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_modal_smoke_renders_chapters() {
    let mut harness = setup_view_harness(ViewKind::Course(2)).await;
    let catalog = harness.catalog.clone().expect("catalog ready");
    catalog
        .toggle_chapter(CourseId::new(2), 1, true)
        .await
        .expect("toggle chapter");

    let html = harness.settle().await;
    assert!(html.contains("Pandas"), "missing chapter in {html}");
    assert!(html.contains("Plots"), "missing chapter in {html}");
    assert!(html.contains("50%"), "missing progress label in {html}");
    assert!(html.contains("Add to favorites"), "missing favorite button in {html}");
    assert!(html.contains("Select a chapter"), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_modal_smoke_celebrates_completion() {
    let mut harness = setup_view_harness(ViewKind::Course(2)).await;
    let catalog = harness.catalog.clone().expect("catalog ready");
    for index in 0..2 {
        catalog
            .toggle_chapter(CourseId::new(2), index, true)
            .await
            .expect("toggle chapter");
    }

    let html = harness.settle().await;
    assert!(html.contains("🎉 100%"), "missing completion label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_modal_smoke_reports_unknown_course() {
    let mut harness = setup_view_harness(ViewKind::Course(99)).await;
    let html = harness.settle().await;
    assert!(
        html.contains("no longer in the catalog"),
        "missing error in {html}"
    );
}
