use super::*;

/// Tests listing every seeded topic.
///
/// Expected: Ok with the three seeded topics ordered by slug
#[tokio::test]
async fn returns_all_topics() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::seed_news(db).await?;

    let topics = TopicRepository::new(db).get_all().await?;

    let slugs: Vec<_> = topics.iter().map(|topic| topic.slug.as_str()).collect();
    assert_eq!(slugs, vec!["cats", "mitch", "paper"]);
    assert_eq!(topics[1].description, "The man, the Mitch, the legend");

    Ok(())
}

/// Tests listing topics from an empty table.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_when_no_topics() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let topics = TopicRepository::new(db).get_all().await?;

    assert!(topics.is_empty());

    Ok(())
}
