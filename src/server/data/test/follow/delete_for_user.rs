use super::*;

/// Tests removing every edge touching a user.
///
/// Expected: edges in both directions are gone, unrelated edges survive
#[tokio::test]
async fn removes_edges_in_both_directions() -> Result<(), DbErr> {
    let test = follow_context().await;
    let db = test.db.as_ref().unwrap();

    let target = create_user(db).await?;
    let alice = create_user(db).await?;
    let bob = create_user(db).await?;

    let repo = FollowRepository::new(db);
    repo.toggle(alice.id, target.id).await?;
    repo.toggle(target.id, bob.id).await?;
    repo.toggle(alice.id, bob.id).await?;

    repo.delete_for_user(target.id).await?;

    assert_eq!(repo.followers_count(target.id).await?, 0);
    assert_eq!(repo.following_count(target.id).await?, 0);
    assert!(repo.is_following(alice.id, bob.id).await?);

    Ok(())
}
