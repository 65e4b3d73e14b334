use super::*;

/// Tests that only active top-level comments for the blog are returned.
///
/// Expected: replies and soft-deleted comments excluded
#[tokio::test]
async fn returns_active_top_level_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let blog = create_published_blog(db, author.id).await?;

    let kept = create_comment(db, blog.id, author.id).await?;
    create_reply(db, blog.id, author.id, kept.id).await?;

    let repo = CommentRepository::new(db);
    let deleted = create_comment(db, blog.id, author.id).await?;
    repo.soft_delete(deleted).await?;

    let top_level = repo.top_level_for_blog(blog.id).await?;

    assert_eq!(top_level.len(), 1);
    assert_eq!(top_level[0].id, kept.id);

    Ok(())
}

/// Tests that comments on other blogs are not mixed in.
///
/// Expected: empty result for a blog without comments
#[tokio::test]
async fn scoped_to_the_blog() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let commented = create_published_blog(db, author.id).await?;
    let quiet = create_published_blog(db, author.id).await?;
    create_comment(db, commented.id, author.id).await?;

    let repo = CommentRepository::new(db);
    let top_level = repo.top_level_for_blog(quiet.id).await?;

    assert!(top_level.is_empty());

    Ok(())
}
