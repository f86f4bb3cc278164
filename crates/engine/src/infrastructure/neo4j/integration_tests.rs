use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use geoward_domain::{
    Content, Coordinate, Feedback, GeoJsonPolygon, Polygon, Region, RegionId, RegionName, Slider,
};

use super::test_harness::Neo4jTestHarness;
use super::{Neo4jContentRepo, Neo4jFeedbackRepo, Neo4jRegionRepo, Neo4jSliderRepo};
use crate::infrastructure::ports::{ContentRepo, FeedbackRepo, RegionRepo, SliderRepo};

fn t(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes)
}

fn square_region(name: &str, min: f64, max: f64, at: DateTime<Utc>) -> Region {
    let polygon = Polygon::from_geojson(GeoJsonPolygon {
        kind: "Polygon".into(),
        coordinates: vec![vec![
            vec![min, min],
            vec![min, max],
            vec![max, max],
            vec![max, min],
        ]],
    })
    .unwrap();
    Region::new(RegionName::new(name).unwrap(), None, polygon, at).unwrap()
}

async fn active_ids(repo: &Neo4jRegionRepo) -> Vec<RegionId> {
    repo.list_active()
        .await
        .expect("list active")
        .iter()
        .map(Region::id)
        .collect()
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn region_lifecycle_keeps_a_single_active_region() {
    let harness = Neo4jTestHarness::start()
        .await
        .expect("Failed to start Neo4j harness");
    harness.clean().await.expect("Failed to clean db");
    let repo = Neo4jRegionRepo::new(harness.graph());

    let a = square_region("Zone A", 0.0, 10.0, t(0));
    repo.create(&a).await.expect("create A");
    let stored = repo.get(a.id()).await.expect("get A").expect("A exists");
    assert_eq!(stored, a);
    assert_eq!(stored.polygon().exterior().points().len(), 5);

    let b = square_region("Zone B", 20.0, 30.0, t(1));
    repo.create(&b).await.expect("create B");
    assert_eq!(active_ids(&repo).await, vec![b.id()]);

    let promoted = repo.delete(b.id(), t(2)).await.expect("delete B");
    assert_eq!(promoted, Some(a.id()));
    assert_eq!(active_ids(&repo).await, vec![a.id()]);

    let promoted = repo.delete(a.id(), t(3)).await.expect("delete A");
    assert_eq!(promoted, None);
    assert!(active_ids(&repo).await.is_empty());

    let err = repo.delete(a.id(), t(4)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn update_activation_and_rollback_on_missing_region() {
    let harness = Neo4jTestHarness::start()
        .await
        .expect("Failed to start Neo4j harness");
    harness.clean().await.expect("Failed to clean db");
    let repo = Neo4jRegionRepo::new(harness.graph());

    let a = square_region("Zone A", 0.0, 10.0, t(0));
    let b = square_region("Zone B", 20.0, 30.0, t(1));
    repo.create(&a).await.expect("create A");
    repo.create(&b).await.expect("create B");

    let mut edited = repo.get(a.id()).await.unwrap().unwrap();
    edited.rename(RegionName::new("Zone A2").unwrap(), t(2));
    let stored = repo.update(&edited, Some(true)).await.expect("activate A");
    assert!(stored.is_active());
    assert_eq!(stored.name().as_str(), "Zone A2");
    assert_eq!(active_ids(&repo).await, vec![a.id()]);

    // The deactivation of A must not survive a failed update.
    let ghost = square_region("Ghost", 0.0, 1.0, t(3));
    let err = repo.update(&ghost, Some(true)).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(active_ids(&repo).await, vec![a.id()]);
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn failed_create_rolls_back_deactivation() {
    let harness = Neo4jTestHarness::start()
        .await
        .expect("Failed to start Neo4j harness");
    harness.clean().await.expect("Failed to clean db");
    let repo = Neo4jRegionRepo::new(harness.graph());

    let a = square_region("Zone A", 0.0, 10.0, t(0));
    let b = square_region("Zone B", 20.0, 30.0, t(1));
    repo.create(&a).await.expect("create A");
    repo.create(&b).await.expect("create B");

    // B is deactivated before the duplicate insert trips region_id_unique.
    let err = repo.create(&a).await.unwrap_err();
    assert!(!err.is_not_found());

    assert_eq!(active_ids(&repo).await, vec![b.id()]);
    let stored_b = repo.get(b.id()).await.unwrap().expect("B exists");
    assert_eq!(stored_b.updated_at(), t(1));
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn delete_with_corrupt_status_fails_and_keeps_region() {
    let harness = Neo4jTestHarness::start()
        .await
        .expect("Failed to start Neo4j harness");
    harness.clean().await.expect("Failed to clean db");
    let repo = Neo4jRegionRepo::new(harness.graph());

    let a = square_region("Zone A", 0.0, 10.0, t(0));
    repo.create(&a).await.expect("create A");
    harness
        .graph()
        .run(
            neo4rs::query("MATCH (r:Region {id: $id}) SET r.is_active = 'yes'")
                .param("id", a.id().to_string()),
        )
        .await
        .expect("corrupt status");

    let err = repo.delete(a.id(), t(1)).await.unwrap_err();
    assert!(!err.is_not_found());
    assert!(repo.get(a.id()).await.unwrap().is_some());
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn concurrent_creates_leave_one_active_region() {
    let harness = Neo4jTestHarness::start()
        .await
        .expect("Failed to start Neo4j harness");
    harness.clean().await.expect("Failed to clean db");
    let repo = Arc::new(Neo4jRegionRepo::new(harness.graph()));

    let mut handles = Vec::new();
    for i in 0..8 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            let region = square_region(&format!("Zone {i}"), 0.0, 10.0, t(i));
            repo.create(&region).await
        }));
    }
    for handle in handles {
        handle.await.expect("task").expect("create");
    }

    assert_eq!(active_ids(&repo).await.len(), 1);
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn containment_uses_bbox_prefilter_and_exact_test() {
    let harness = Neo4jTestHarness::start()
        .await
        .expect("Failed to start Neo4j harness");
    harness.clean().await.expect("Failed to clean db");
    let repo = Neo4jRegionRepo::new(harness.graph());

    // Triangle: the bbox corner (9, 1) is outside the shape.
    let polygon = Polygon::from_geojson(GeoJsonPolygon {
        kind: "Polygon".into(),
        coordinates: vec![vec![vec![0.0, 0.0], vec![0.0, 10.0], vec![10.0, 10.0]]],
    })
    .unwrap();
    let triangle =
        Region::new(RegionName::new("Triangle").unwrap(), None, polygon, t(0)).unwrap();
    repo.create(&triangle).await.expect("create");

    let inside = Coordinate::new(2.0, 8.0).unwrap();
    let corner = Coordinate::new(9.0, 1.0).unwrap();
    let boundary = Coordinate::new(0.0, 5.0).unwrap();
    let far = Coordinate::new(50.0, 50.0).unwrap();

    assert_eq!(repo.find_active_containing(inside).await.unwrap().len(), 1);
    assert!(repo.find_active_containing(corner).await.unwrap().is_empty());
    assert_eq!(repo.find_active_containing(boundary).await.unwrap().len(), 1);
    assert!(repo.find_active_containing(far).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn sliders_and_feedback_round_trip() {
    let harness = Neo4jTestHarness::start()
        .await
        .expect("Failed to start Neo4j harness");
    harness.clean().await.expect("Failed to clean db");
    let sliders = Neo4jSliderRepo::new(harness.graph());
    let feedback = Neo4jFeedbackRepo::new(harness.graph());

    let mut late = Slider::new("/b.png", Some("B".into()), Some(1), t(1)).unwrap();
    let early = Slider::new("/a.png", None, Some(1), t(0)).unwrap();
    sliders.save(&late).await.unwrap();
    sliders.save(&early).await.unwrap();

    let listed = sliders.list_active().await.unwrap();
    assert_eq!(listed[0].id(), late.id());
    assert_eq!(listed[1].title(), None);

    late.set_active(false, t(2));
    sliders.save(&late).await.unwrap();
    assert_eq!(sliders.list_active().await.unwrap().len(), 1);
    assert_eq!(sliders.list_all().await.unwrap().len(), 2);

    sliders.delete(early.id()).await.unwrap();
    assert!(sliders.delete(early.id()).await.unwrap_err().is_not_found());

    let first = Feedback::new("Ana", "Great", None, t(0)).unwrap();
    let second = Feedback::new("Ben", "Slow map", Some("u-2".into()), t(1)).unwrap();
    feedback.save(&first).await.unwrap();
    feedback.save(&second).await.unwrap();

    let listed = feedback.list().await.unwrap();
    assert_eq!(listed, vec![second.clone(), first.clone()]);

    feedback.delete(first.id).await.unwrap();
    assert!(feedback.delete(first.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn content_cards_round_trip() {
    let harness = Neo4jTestHarness::start()
        .await
        .expect("Failed to start Neo4j harness");
    harness.clean().await.expect("Failed to clean db");
    let repo = Neo4jContentRepo::new(harness.graph());

    let mut hours = Content::new("Hours", "open daily from nine", Some(1), t(0)).unwrap();
    let notice = Content::new("Notice", "gate closed", Some(0), t(1)).unwrap();
    repo.save(&hours).await.unwrap();
    repo.save(&notice).await.unwrap();

    let stored = repo.get(hours.id()).await.unwrap().expect("card exists");
    assert_eq!(stored, hours);
    assert_eq!(stored.word_count(), 4);

    hours.set_active(false, t(2));
    repo.save(&hours).await.unwrap();

    let active = repo.list_active().await.unwrap();
    assert_eq!(active, vec![notice.clone()]);
    let all: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .iter()
        .map(|c| c.title().to_string())
        .collect();
    assert_eq!(all, vec!["Notice", "Hours"]);

    repo.delete(hours.id()).await.unwrap();
    assert!(repo.delete(hours.id()).await.unwrap_err().is_not_found());
}
