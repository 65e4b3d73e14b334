use super::*;

/// Tests that soft deletion keeps the row but deactivates it.
///
/// Expected: row still present with is_active false
#[tokio::test]
async fn keeps_row_marked_inactive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let blog = create_published_blog(db, author.id).await?;
    let comment = create_comment(db, blog.id, author.id).await?;

    let repo = CommentRepository::new(db);
    repo.soft_delete(comment.clone()).await?;

    let stored = repo.find_by_id(comment.id).await?.unwrap();
    assert!(!stored.is_active);

    Ok(())
}

/// Tests that replies keep their anchor after the parent is soft deleted.
///
/// Expected: reply row untouched, parent_id intact
#[tokio::test]
async fn replies_keep_their_anchor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let blog = create_published_blog(db, author.id).await?;
    let parent = create_comment(db, blog.id, author.id).await?;
    let reply = create_reply(db, blog.id, author.id, parent.id).await?;

    let repo = CommentRepository::new(db);
    repo.soft_delete(parent.clone()).await?;

    let stored = repo.find_by_id(reply.id).await?.unwrap();
    assert_eq!(stored.parent_id, Some(parent.id));
    assert!(stored.is_active);

    Ok(())
}
