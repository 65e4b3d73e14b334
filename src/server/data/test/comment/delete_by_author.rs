use super::*;

/// Tests that an author's comments are hard deleted along with replies under them.
///
/// Expected: the author's comment and the bystander reply beneath it are gone
#[tokio::test]
async fn removes_comments_and_replies_under_them() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = create_user(db).await?;
    let bystander = create_user(db).await?;
    let blog = create_published_blog(db, bystander.id).await?;

    let targets_comment = create_comment(db, blog.id, target.id).await?;
    let reply_under_target = create_reply(db, blog.id, bystander.id, targets_comment.id).await?;
    let bystanders_comment = create_comment(db, blog.id, bystander.id).await?;

    let repo = CommentRepository::new(db);
    repo.delete_by_author(target.id).await?;

    assert!(repo.find_by_id(targets_comment.id).await?.is_none());
    assert!(repo.find_by_id(reply_under_target.id).await?.is_none());
    assert!(repo.find_by_id(bystanders_comment.id).await?.is_some());

    Ok(())
}

/// Tests the author's replies elsewhere are removed too.
///
/// Expected: target's reply under another user's comment is gone
#[tokio::test]
async fn removes_replies_by_the_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = create_user(db).await?;
    let bystander = create_user(db).await?;
    let blog = create_published_blog(db, bystander.id).await?;

    let parent = create_comment(db, blog.id, bystander.id).await?;
    let targets_reply = create_reply(db, blog.id, target.id, parent.id).await?;

    let repo = CommentRepository::new(db);
    repo.delete_by_author(target.id).await?;

    assert!(repo.find_by_id(targets_reply.id).await?.is_none());
    assert!(repo.find_by_id(parent.id).await?.is_some());

    Ok(())
}
