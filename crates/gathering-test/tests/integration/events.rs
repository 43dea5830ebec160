//! Upcoming events for a single group.

use chrono::TimeDelta;

use gathering_test::model::event::EventDraft;
use gathering_test::directory::upcoming_events;
use gathering_test::error::ServiceError;
use gathering_test::roster::schedule_event;

use super::helpers::{TestDb, create_event_ending, create_group, reference_now};

#[test_log::test(tokio::test)]
async fn upcoming_events_are_scoped_to_the_group() -> anyhow::Result<()> {
    let db = TestDb::create().await?;
    let mut conn = db.conn().await?;
    let now = reference_now();

    let group = create_group(&mut conn, "SF iOS Coffee").await?;
    let other = create_group(&mut conn, "Other Group").await?;

    let later = create_event_ending(&mut conn, group.id, now + TimeDelta::days(7)).await?;
    let sooner = create_event_ending(&mut conn, group.id, now + TimeDelta::hours(2)).await?;
    create_event_ending(&mut conn, group.id, now - TimeDelta::days(1)).await?;
    create_event_ending(&mut conn, other.id, now + TimeDelta::days(1)).await?;

    let upcoming = upcoming_events(&mut conn, group.id, now).await?;
    let upcoming_ids: Vec<_> = upcoming.iter().map(|e| e.id).collect();

    assert_eq!(upcoming_ids, vec![sooner.id, later.id]);

    let empty = create_group(&mut conn, "Empty").await?;
    assert!(upcoming_events(&mut conn, empty.id, now).await?.is_empty());

    Ok(())
}

#[test_log::test(tokio::test)]
async fn event_times_render_in_group_zone() -> anyhow::Result<()> {
    let db = TestDb::create().await?;
    let mut conn = db.conn().await?;
    let start_at = reference_now();

    let group = create_group(&mut conn, "SF iOS Coffee").await?;
    let draft = EventDraft::new("Coffee", start_at, start_at + TimeDelta::hours(2))
        .at_location("Blue Bottle Coffee", Some("https://bluebottlecoffee.com".to_string()));
    let event = schedule_event(&mut conn, group.id, draft).await?;

    let local = event.local_start(group.time_zone);
    assert_eq!(
        local.format("%A, %B %-d, %Y, %-I:%M %p").to_string(),
        "Wednesday, December 13, 2017, 8:30 AM"
    );
    assert_eq!(event.location_url.as_deref(), Some("https://bluebottlecoffee.com"));

    Ok(())
}

#[test_log::test(tokio::test)]
async fn scheduling_for_missing_group_is_not_found() -> anyhow::Result<()> {
    let db = TestDb::create().await?;
    let mut conn = db.conn().await?;
    let now = reference_now();

    let draft = EventDraft::new("Coffee", now, now + TimeDelta::hours(1));
    let result = schedule_event(&mut conn, uuid::Uuid::new_v4(), draft).await;

    assert!(matches!(result, Err(ServiceError::NotFound(_))));

    Ok(())
}
