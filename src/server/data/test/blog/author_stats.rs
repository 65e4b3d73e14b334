use super::*;
use test_utils::factory::blog::BlogFactory;
use test_utils::factory::{create_blog, create_user};

/// Tests the aggregate publishing stats for an author.
///
/// Expected: drafts excluded, views and likes summed over published blogs
#[tokio::test]
async fn sums_published_blogs_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let reader = create_user(db).await?;

    let first = BlogFactory::new(db, author.id).published().views(7).build().await?;
    BlogFactory::new(db, author.id).published().views(3).build().await?;
    create_blog(db, author.id).await?;

    let repo = BlogRepository::new(db);
    repo.toggle_like(first.id, reader.id).await?;

    let (total_blogs, total_views, total_likes) = repo.author_stats(author.id).await?;

    assert_eq!(total_blogs, 2);
    assert_eq!(total_views, 10);
    assert_eq!(total_likes, 1);

    Ok(())
}

/// Tests stats for an author with no published blogs.
///
/// Expected: all zeros
#[tokio::test]
async fn zero_for_no_published_blogs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    create_blog(db, author.id).await?;

    let repo = BlogRepository::new(db);
    let (total_blogs, total_views, total_likes) = repo.author_stats(author.id).await?;

    assert_eq!((total_blogs, total_views, total_likes), (0, 0, 0));

    Ok(())
}
