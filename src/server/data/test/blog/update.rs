use super::*;
use test_utils::factory::{create_blog, create_user};

/// Tests that the slug survives a title change.
///
/// Expected: new title, original slug
#[tokio::test]
async fn title_change_keeps_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let blog = create_blog(db, author.id).await?;
    let original_slug = blog.slug.clone();

    let repo = BlogRepository::new(db);
    let updated = repo
        .update(
            blog,
            UpdateBlogParams {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
            None,
            None,
        )
        .await?;

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.slug, original_slug);

    Ok(())
}

/// Tests that the tag set is replaced when present.
///
/// Expected: old tags gone, new tags stored
#[tokio::test]
async fn replaces_tag_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let repo = BlogRepository::new(db);

    let mut params = blog_params("Tagged", author.id, BlogStatus::Draft);
    params.tags = vec!["old".to_string()];
    let blog = repo.create(params, "tagged".to_string(), 1).await?;

    let updated = repo
        .update(
            blog,
            UpdateBlogParams {
                tags: Some(vec!["new".to_string(), "fresh".to_string()]),
                ..Default::default()
            },
            None,
            None,
        )
        .await?;

    let tags = repo.tags_for(&[updated.id]).await?;
    let mut stored = tags.get(&updated.id).cloned().unwrap_or_default();
    stored.sort();
    assert_eq!(stored, vec!["fresh".to_string(), "new".to_string()]);

    Ok(())
}
