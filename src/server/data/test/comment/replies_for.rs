use super::*;

/// Tests fetching replies for several parents at once.
///
/// Expected: replies for both parents, none for an unrelated comment
#[tokio::test]
async fn fetches_replies_for_parents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let blog = create_published_blog(db, author.id).await?;

    let first = create_comment(db, blog.id, author.id).await?;
    let second = create_comment(db, blog.id, author.id).await?;
    let lonely = create_comment(db, blog.id, author.id).await?;

    create_reply(db, blog.id, author.id, first.id).await?;
    create_reply(db, blog.id, author.id, first.id).await?;
    create_reply(db, blog.id, author.id, second.id).await?;

    let repo = CommentRepository::new(db);
    let replies = repo.replies_for(&[first.id, second.id, lonely.id]).await?;

    assert_eq!(replies.len(), 3);
    assert!(replies.iter().all(|r| r.parent_id != Some(lonely.id)));

    Ok(())
}

/// Tests the empty-parents shortcut.
///
/// Expected: empty result without touching the database
#[tokio::test]
async fn empty_parents_yield_no_replies() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let replies = repo.replies_for(&[]).await?;

    assert!(replies.is_empty());

    Ok(())
}
