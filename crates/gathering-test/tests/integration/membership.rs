//! Membership-scoped group queries.

use gathering_test::directory::groups_with_member;
use gathering_test::error::ServiceError;
use gathering_test::roster::{add_member, remove_member};

use super::helpers::{TestDb, create_group, create_user, ids};

#[test_log::test(tokio::test)]
async fn returns_only_the_members_groups() -> anyhow::Result<()> {
    let db = TestDb::create().await?;
    let mut conn = db.conn().await?;

    let g1 = create_group(&mut conn, "Group One").await?;
    let _g2 = create_group(&mut conn, "Group Two").await?;
    let user = create_user(&mut conn, "Ada Lovelace").await?;
    add_member(&mut conn, g1.id, user.id).await?;

    let groups = groups_with_member(&mut conn, user.id).await?;

    assert_eq!(ids(&groups), vec![g1.id]);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn count_matches_memberships_not_total_groups() -> anyhow::Result<()> {
    let db = TestDb::create().await?;
    let mut conn = db.conn().await?;

    let user = create_user(&mut conn, "Grace Hopper").await?;
    let other = create_user(&mut conn, "Alan Turing").await?;
    let mut joined = Vec::new();
    for name in ["Alpha", "Beta", "Gamma", "Delta"] {
        let group = create_group(&mut conn, name).await?;
        if name != "Delta" {
            add_member(&mut conn, group.id, user.id).await?;
            joined.push(group.id);
        }
        add_member(&mut conn, group.id, other.id).await?;
    }
    joined.sort();

    let groups = groups_with_member(&mut conn, user.id).await?;

    assert_eq!(groups.len(), 3);
    assert_eq!(ids(&groups), joined);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn repeated_membership_is_not_duplicated() -> anyhow::Result<()> {
    let db = TestDb::create().await?;
    let mut conn = db.conn().await?;

    let group = create_group(&mut conn, "Group One").await?;
    let user = create_user(&mut conn, "Ada Lovelace").await?;

    assert!(add_member(&mut conn, group.id, user.id).await?);
    assert!(!add_member(&mut conn, group.id, user.id).await?);

    assert_eq!(groups_with_member(&mut conn, user.id).await?.len(), 1);

    Ok(())
}

#[test_log::test(tokio::test)]
async fn removed_member_sees_no_groups() -> anyhow::Result<()> {
    let db = TestDb::create().await?;
    let mut conn = db.conn().await?;

    let group = create_group(&mut conn, "Group One").await?;
    let user = create_user(&mut conn, "Ada Lovelace").await?;
    add_member(&mut conn, group.id, user.id).await?;

    assert!(remove_member(&mut conn, group.id, user.id).await?);
    assert!(!remove_member(&mut conn, group.id, user.id).await?);
    assert!(groups_with_member(&mut conn, user.id).await?.is_empty());

    Ok(())
}

#[test_log::test(tokio::test)]
async fn membership_for_unknown_group_is_not_found() -> anyhow::Result<()> {
    let db = TestDb::create().await?;
    let mut conn = db.conn().await?;

    let user = create_user(&mut conn, "Ada Lovelace").await?;
    let result = add_member(&mut conn, uuid::Uuid::new_v4(), user.id).await;

    assert!(matches!(result, Err(ServiceError::NotFound(_))));

    Ok(())
}
