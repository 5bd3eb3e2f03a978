use super::*;

/// Tests deleting an existing comment.
///
/// Expected: Ok(()) and the comment no longer appears on its article
#[tokio::test]
async fn deletes_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::helpers::seed_news(db).await?;
    let deleted = &seeded.comments[0];

    let repo = CommentRepository::new(db);
    repo.delete(deleted.comment_id).await?;

    let remaining = repo.get_by_article(deleted.article_id).await?;
    assert_eq!(remaining.len(), 3);
    assert!(remaining.iter().all(|c| c.comment_id != deleted.comment_id));

    Ok(())
}

/// Tests deleting a well-formed ID that matches no comment.
///
/// Expected: Err(AppError::Domain(CommentNotFound))
#[tokio::test]
async fn fails_for_nonexistent_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::seed_news(db).await?;

    let result = CommentRepository::new(db).delete(1111111).await;

    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::CommentNotFound))
    ));

    Ok(())
}

/// Tests that deleting the same comment twice fails the second time.
#[tokio::test]
async fn fails_on_second_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let comment = factory::create_comment(db, article.article_id, &user.username).await?;

    let repo = CommentRepository::new(db);
    repo.delete(comment.comment_id).await?;

    assert!(matches!(
        repo.delete(comment.comment_id).await,
        Err(AppError::Domain(DomainError::CommentNotFound))
    ));

    Ok(())
}
