use super::*;

/// Tests adding and removing a follow edge.
///
/// Expected: true on first toggle, false on second, counts follow suit
#[tokio::test]
async fn toggles_edge_both_ways() -> Result<(), DbErr> {
    let test = follow_context().await;
    let db = test.db.as_ref().unwrap();

    let alice = create_user(db).await?;
    let bob = create_user(db).await?;

    let repo = FollowRepository::new(db);

    assert!(repo.toggle(alice.id, bob.id).await?);
    assert!(repo.is_following(alice.id, bob.id).await?);
    assert_eq!(repo.followers_count(bob.id).await?, 1);

    assert!(!repo.toggle(alice.id, bob.id).await?);
    assert!(!repo.is_following(alice.id, bob.id).await?);
    assert_eq!(repo.followers_count(bob.id).await?, 0);

    Ok(())
}

/// Tests that the edge is directional.
///
/// Expected: following one way does not imply the reverse
#[tokio::test]
async fn edge_is_directional() -> Result<(), DbErr> {
    let test = follow_context().await;
    let db = test.db.as_ref().unwrap();

    let alice = create_user(db).await?;
    let bob = create_user(db).await?;

    let repo = FollowRepository::new(db);
    repo.toggle(alice.id, bob.id).await?;

    assert!(repo.is_following(alice.id, bob.id).await?);
    assert!(!repo.is_following(bob.id, alice.id).await?);

    Ok(())
}
