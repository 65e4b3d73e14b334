use super::*;
use test_utils::factory::{create_published_blog, create_user};

/// Tests that deleting a blog removes its likes and tags.
///
/// Expected: blog row, like rows, and tag rows all gone
#[tokio::test]
async fn deletes_blog_with_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let reader = create_user(db).await?;
    let repo = BlogRepository::new(db);

    let mut params = blog_params("Doomed", author.id, BlogStatus::Published);
    params.tags = vec!["ephemeral".to_string()];
    let blog = repo.create(params, "doomed".to_string(), 1).await?;
    repo.toggle_like(blog.id, reader.id).await?;

    repo.delete(blog.id).await?;

    assert!(repo.find_by_id(blog.id).await?.is_none());
    assert!(repo.likes_counts(&[blog.id]).await?.is_empty());
    assert!(repo.tags_for(&[blog.id]).await?.is_empty());

    Ok(())
}

/// Tests that deleting one blog leaves others untouched.
///
/// Expected: the sibling blog survives
#[tokio::test]
async fn leaves_other_blogs_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let doomed = create_published_blog(db, author.id).await?;
    let survivor = create_published_blog(db, author.id).await?;

    let repo = BlogRepository::new(db);
    repo.delete(doomed.id).await?;

    assert!(repo.find_by_id(survivor.id).await?.is_some());

    Ok(())
}
