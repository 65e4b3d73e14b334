use super::*;
use test_utils::factory::blog::BlogFactory;
use test_utils::factory::{create_blog, create_published_blog, create_user};

/// Tests that drafts never appear in the public listing.
///
/// Expected: only the published blog is returned
#[tokio::test]
async fn excludes_drafts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let published = create_published_blog(db, author.id).await?;
    create_blog(db, author.id).await?;

    let repo = BlogRepository::new(db);
    let (blogs, total) = repo.get_published_paginated(&listing()).await?;

    assert_eq!(total, 1);
    assert_eq!(blogs[0].id, published.id);

    Ok(())
}

/// Tests the views sort in descending order.
///
/// Expected: most viewed first
#[tokio::test]
async fn sorts_by_views() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let quiet = BlogFactory::new(db, author.id).published().views(3).build().await?;
    let popular = BlogFactory::new(db, author.id).published().views(10).build().await?;

    let repo = BlogRepository::new(db);
    let (blogs, _) = repo
        .get_published_paginated(&BlogQuery {
            sort_by: BlogSort::Views,
            ..listing()
        })
        .await?;

    assert_eq!(blogs[0].id, popular.id);
    assert_eq!(blogs[1].id, quiet.id);

    Ok(())
}

/// Tests the tag filter keeps blogs carrying at least one requested tag.
///
/// Expected: only the tagged blog, no duplicate rows for multi-tag matches
#[tokio::test]
async fn filters_by_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let repo = BlogRepository::new(db);

    let mut params = blog_params("Tagged", author.id, BlogStatus::Published);
    params.tags = vec!["rust".to_string(), "web".to_string()];
    let tagged = repo.create(params, "tagged".to_string(), 1).await?;

    create_published_blog(db, author.id).await?;

    let (blogs, total) = repo
        .get_published_paginated(&BlogQuery {
            tags: vec!["rust".to_string(), "web".to_string()],
            ..listing()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(blogs[0].id, tagged.id);

    Ok(())
}

/// Tests substring search over title and content.
///
/// Expected: a content match is found as well as a title match
#[tokio::test]
async fn searches_title_and_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    BlogFactory::new(db, author.id)
        .published()
        .title("Cooking pasta")
        .build()
        .await?;
    BlogFactory::new(db, author.id)
        .published()
        .content("A story about pasta and sauce.")
        .build()
        .await?;
    create_published_blog(db, author.id).await?;

    let repo = BlogRepository::new(db);
    let (_, total) = repo
        .get_published_paginated(&BlogQuery {
            search: Some("pasta".to_string()),
            ..listing()
        })
        .await?;

    assert_eq!(total, 2);

    Ok(())
}
