use super::*;
use test_utils::factory::{create_published_blog, create_user};

/// Tests that toggling twice returns to the unliked state.
///
/// Expected: true then false, count back to zero
#[tokio::test]
async fn toggle_is_an_involution() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let reader = create_user(db).await?;
    let blog = create_published_blog(db, author.id).await?;

    let repo = BlogRepository::new(db);

    assert!(repo.toggle_like(blog.id, reader.id).await?);
    let likes = repo.likes_counts(&[blog.id]).await?;
    assert_eq!(likes.get(&blog.id).copied(), Some(1));

    assert!(!repo.toggle_like(blog.id, reader.id).await?);
    let likes = repo.likes_counts(&[blog.id]).await?;
    assert_eq!(likes.get(&blog.id).copied().unwrap_or(0), 0);

    Ok(())
}

/// Tests the liked-id lookup for a specific user.
///
/// Expected: only blogs that user liked are reported
#[tokio::test]
async fn reports_liked_ids_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let alice = create_user(db).await?;
    let bob = create_user(db).await?;
    let blog = create_published_blog(db, author.id).await?;

    let repo = BlogRepository::new(db);
    repo.toggle_like(blog.id, alice.id).await?;

    let liked = repo.liked_blog_ids(&[blog.id], alice.id).await?;
    assert!(liked.contains(&blog.id));

    let liked = repo.liked_blog_ids(&[blog.id], bob.id).await?;
    assert!(liked.is_empty());

    Ok(())
}
