use super::*;
use test_utils::factory::create_user;

/// Tests inserting a blog with tags.
///
/// Expected: Ok(Model) with tags persisted and published_at unset for drafts
#[tokio::test]
async fn creates_draft_with_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let repo = BlogRepository::new(db);

    let mut params = blog_params("Hello", author.id, BlogStatus::Draft);
    params.tags = vec!["rust".to_string(), "web".to_string()];

    let blog = repo.create(params, "hello".to_string(), 1).await?;

    assert_eq!(blog.slug, "hello");
    assert!(blog.published_at.is_none());

    let tags = repo.tags_for(&[blog.id]).await?;
    assert_eq!(tags.get(&blog.id).map(Vec::len), Some(2));

    Ok(())
}

/// Tests that creating as published stamps published_at.
///
/// Expected: published_at set at insert time
#[tokio::test]
async fn published_insert_sets_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let repo = BlogRepository::new(db);

    let blog = repo
        .create(
            blog_params("Live", author.id, BlogStatus::Published),
            "live".to_string(),
            1,
        )
        .await?;

    assert!(blog.published_at.is_some());

    Ok(())
}
