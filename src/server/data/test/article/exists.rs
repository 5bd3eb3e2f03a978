use super::*;

#[tokio::test]
async fn reports_existing_and_missing_articles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);
    assert!(repo.exists(article.article_id).await?);
    assert!(!repo.exists(1111111).await?);

    Ok(())
}
