use std::cmp::Ordering;

use super::*;
use crate::server::model::article::ArticleListItem;

fn compare(column: SortColumn, a: &ArticleListItem, b: &ArticleListItem) -> Ordering {
    match column {
        SortColumn::Author => a.author.cmp(&b.author),
        SortColumn::Title => a.title.cmp(&b.title),
        SortColumn::ArticleId => a.article_id.cmp(&b.article_id),
        SortColumn::Topic => a.topic.cmp(&b.topic),
        SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        SortColumn::Votes => a.votes.cmp(&b.votes),
        SortColumn::ArticleImgUrl => a.article_img_url.cmp(&b.article_img_url),
        SortColumn::CommentCount => a.comment_count.cmp(&b.comment_count),
    }
}

/// Tests the default listing: every article, newest first.
///
/// Expected: Ok with all five seeded articles in descending created_at order
#[tokio::test]
async fn lists_newest_first_by_default() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::helpers::seed_news(db).await?;

    let articles = ArticleRepository::new(db)
        .get_listing(&ArticleListingParams::default())
        .await?;

    let ids: Vec<_> = articles.iter().map(|a| a.article_id).collect();
    let expected: Vec<_> = seeded.articles.iter().map(|a| a.article_id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests that comment counts are aggregated per article in the listing.
#[tokio::test]
async fn includes_comment_counts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::seed_news(db).await?;

    let articles = ArticleRepository::new(db)
        .get_listing(&ArticleListingParams::default())
        .await?;

    let counts: Vec<_> = articles.iter().map(|a| a.comment_count).collect();
    assert_eq!(counts, vec![4, 0, 1, 0, 0]);

    Ok(())
}

/// Tests every sortable column in both directions.
///
/// Verifies that each adjacent pair of results respects the requested column and
/// direction.
#[tokio::test]
async fn sorts_by_every_column_in_both_directions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::seed_news(db).await?;

    let repo = ArticleRepository::new(db);

    for column in SortColumn::ALL {
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let articles = repo
                .get_listing(&ArticleListingParams {
                    sort_by: column,
                    order,
                    topic: None,
                })
                .await?;

            assert_eq!(articles.len(), 5);
            for pair in articles.windows(2) {
                let ordering = compare(column, &pair[0], &pair[1]);
                let expected = match order {
                    SortOrder::Asc => ordering != Ordering::Greater,
                    SortOrder::Desc => ordering != Ordering::Less,
                };
                assert!(expected, "{:?} {:?}: {:?}", column, order, pair);
            }
        }
    }

    Ok(())
}

/// Tests sorting by votes ascending.
///
/// Expected: 0, 3, 7, 42, 100
#[tokio::test]
async fn sorts_by_votes_ascending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::seed_news(db).await?;

    let articles = ArticleRepository::new(db)
        .get_listing(&ArticleListingParams {
            sort_by: SortColumn::Votes,
            order: SortOrder::Asc,
            topic: None,
        })
        .await?;

    let votes: Vec<_> = articles.iter().map(|a| a.votes).collect();
    assert_eq!(votes, vec![0, 3, 7, 42, 100]);

    Ok(())
}

/// Tests that ties on the sort column fall back to ascending article ID.
#[tokio::test]
async fn breaks_ties_by_article_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::helpers::seed_news(db).await?;

    let articles = ArticleRepository::new(db)
        .get_listing(&ArticleListingParams {
            sort_by: SortColumn::CommentCount,
            order: SortOrder::Desc,
            topic: None,
        })
        .await?;

    let ids: Vec<_> = articles.iter().map(|a| a.article_id).collect();
    let by_index = |i: usize| seeded.articles[i].article_id;
    assert_eq!(
        ids,
        vec![by_index(0), by_index(2), by_index(1), by_index(3), by_index(4)]
    );

    Ok(())
}

/// Tests filtering the listing by topic.
///
/// Expected: only the single `cats` article
#[tokio::test]
async fn filters_by_topic() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::helpers::seed_news(db).await?;

    let articles = ArticleRepository::new(db)
        .get_listing(&ArticleListingParams {
            topic: Some("cats".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].article_id, seeded.articles[3].article_id);
    assert_eq!(articles[0].topic, "cats");

    Ok(())
}

/// Tests filtering by a topic that exists but has no articles.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_for_topic_without_articles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::seed_news(db).await?;

    let articles = ArticleRepository::new(db)
        .get_listing(&ArticleListingParams {
            topic: Some("paper".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(articles.is_empty());

    Ok(())
}
