use super::*;

/// Tests the follower and following listings.
///
/// Expected: each side of the edge appears in the right list
#[tokio::test]
async fn lists_both_sides_of_the_graph() -> Result<(), DbErr> {
    let test = follow_context().await;
    let db = test.db.as_ref().unwrap();

    let alice = create_user(db).await?;
    let bob = create_user(db).await?;
    let carol = create_user(db).await?;

    let repo = FollowRepository::new(db);
    repo.toggle(alice.id, bob.id).await?;
    repo.toggle(carol.id, bob.id).await?;

    let followers = repo.followers(bob.id).await?;
    let mut follower_ids: Vec<i32> = followers.iter().map(|u| u.id).collect();
    follower_ids.sort_unstable();
    let mut expected = vec![alice.id, carol.id];
    expected.sort_unstable();
    assert_eq!(follower_ids, expected);

    let following = repo.following(alice.id).await?;
    assert_eq!(following.len(), 1);
    assert_eq!(following[0].id, bob.id);

    Ok(())
}

/// Tests listings for a user with no edges.
///
/// Expected: both lists empty
#[tokio::test]
async fn empty_lists_for_lonely_user() -> Result<(), DbErr> {
    let test = follow_context().await;
    let db = test.db.as_ref().unwrap();

    let alice = create_user(db).await?;

    let repo = FollowRepository::new(db);

    assert!(repo.followers(alice.id).await?.is_empty());
    assert!(repo.following(alice.id).await?.is_empty());

    Ok(())
}
