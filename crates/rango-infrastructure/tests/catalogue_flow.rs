//! End-to-end catalogue behavior over the in-memory adapters.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use rango_core::domain::{VisitPolicy, VisitState};
use rango_core::repositories::CategoryRepository;
use rango_core::services::{CatalogueService, SeedService, VisitorService};
use rango_infrastructure::{
    MemoryCategoryRepository, MemoryPageRepository, MemorySessionStore,
};

fn catalogue() -> (Arc<MemoryCategoryRepository>, Arc<MemoryPageRepository>) {
    (
        Arc::new(MemoryCategoryRepository::new()),
        Arc::new(MemoryPageRepository::new()),
    )
}

#[tokio::test]
async fn test_seeding_stores_three_categories_and_eight_pages() {
    let (categories, pages) = catalogue();
    let seeder = SeedService::new(categories.clone(), pages.clone());

    seeder.seed().await.unwrap();

    let stored = categories.list_all().await.unwrap();
    assert_eq!(stored.len(), 3);

    let listing = seeder.listing().await.unwrap();
    assert_eq!(listing.len(), 8);
    assert!(listing.contains(&"Other Frameworks - Flask".to_string()));
    assert!(listing.contains(&"Python - Official Python Tutorial".to_string()));
}

#[tokio::test]
async fn test_seeding_twice_is_idempotent() {
    let (categories, pages) = catalogue();
    let seeder = SeedService::new(categories.clone(), pages.clone());

    seeder.seed().await.unwrap();
    let after_first = categories.list_all().await.unwrap();
    let listing_first = seeder.listing().await.unwrap();

    seeder.seed().await.unwrap();
    let after_second = categories.list_all().await.unwrap();
    let listing_second = seeder.listing().await.unwrap();

    assert_eq!(after_first, after_second);
    assert_eq!(listing_first, listing_second);
    assert_eq!(listing_second.len(), 8);
}

#[tokio::test]
async fn test_seeded_categories_carry_derived_slugs_and_fixed_counters() {
    let (categories, pages) = catalogue();
    SeedService::new(categories.clone(), pages.clone())
        .seed()
        .await
        .unwrap();

    let service = CatalogueService::new(categories, pages);
    let view = service.show_category("other-frameworks").await.unwrap();
    let category = view.category.unwrap();

    assert_eq!(category.name, "Other Frameworks");
    assert_eq!(category.views, 32);
    assert_eq!(category.likes, 16);
    assert_eq!(view.pages.len(), 2);
}

#[tokio::test]
async fn test_index_view_orders_categories_by_likes() {
    let (categories, pages) = catalogue();
    SeedService::new(categories.clone(), pages.clone())
        .seed()
        .await
        .unwrap();

    let service = CatalogueService::new(categories, pages);
    let index = service.index_view().await.unwrap();

    let names: Vec<&str> = index.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Python", "Django", "Other Frameworks"]);
    assert!(index.pages.len() <= 5);
}

#[tokio::test]
async fn test_unknown_slug_yields_absent_category_view() {
    let (categories, pages) = catalogue();
    SeedService::new(categories.clone(), pages.clone())
        .seed()
        .await
        .unwrap();

    let service = CatalogueService::new(categories, pages);
    let view = service.show_category("perl").await.unwrap();

    assert!(view.category.is_none());
    assert!(view.pages.is_empty());
}

#[tokio::test]
async fn test_add_page_then_show_category() {
    let (categories, pages) = catalogue();
    let service = CatalogueService::new(categories, pages);

    service.add_category("Rust").await.unwrap();
    service
        .add_page("rust", "The Book", "https://doc.rust-lang.org/book/")
        .await
        .unwrap();

    let view = service.show_category("rust").await.unwrap();
    assert_eq!(view.pages.len(), 1);
    assert_eq!(view.pages[0].views, 0);
}

#[tokio::test]
async fn test_visitor_flow_over_memory_session() {
    let session = Arc::new(MemorySessionStore::new());
    let service = VisitorService::new(session.clone(), VisitPolicy::Reset);

    let t0 = Utc.with_ymd_and_hms(2017, 1, 26, 8, 23, 12).unwrap();
    let first = service.record_visit(t0).await.unwrap();
    assert_eq!(
        first,
        VisitState {
            visits: 1,
            last_visit: t0
        }
    );

    // Same day: reset policy holds the counter at 1, timestamp untouched.
    let same_day = service.record_visit(t0 + Duration::hours(3)).await.unwrap();
    assert_eq!(same_day.visits, 1);
    assert_eq!(same_day.last_visit, t0);

    // Two days later: a distinct-day visit is counted.
    let later = t0 + Duration::days(2);
    let next = service.record_visit(later).await.unwrap();
    assert_eq!(next.visits, 2);
    assert_eq!(next.last_visit, later);
}

#[tokio::test]
async fn test_visitor_flow_preserve_policy_keeps_count_within_day() {
    let session = Arc::new(MemorySessionStore::new());
    let service = VisitorService::new(session.clone(), VisitPolicy::Preserve);

    let t0 = Utc.with_ymd_and_hms(2017, 1, 26, 8, 23, 12).unwrap();
    service.record_visit(t0).await.unwrap();
    service.record_visit(t0 + Duration::days(1)).await.unwrap();

    let same_day = service
        .record_visit(t0 + Duration::days(1) + Duration::hours(2))
        .await
        .unwrap();
    assert_eq!(same_day.visits, 2);
}
