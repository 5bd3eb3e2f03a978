use super::*;

/// Tests the default listing.
///
/// Expected: 200 with every article, newest first, without bodies
#[tokio::test]
async fn lists_articles_newest_first() {
    let (app, seeded, _test) = seeded_app().await;

    let (status, body) = send(&app, get("/api/articles")).await;

    assert_eq!(status, StatusCode::OK);
    let articles = body["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 5);
    assert_eq!(articles[0]["article_id"], json!(seeded.articles[0].article_id));
    assert_eq!(articles[0]["comment_count"], json!(4));

    for article in articles {
        assert!(article.get("body").is_none());
        for key in [
            "author",
            "title",
            "article_id",
            "topic",
            "created_at",
            "votes",
            "article_img_url",
            "comment_count",
        ] {
            assert!(article.get(key).is_some(), "missing {}", key);
        }
    }
}

/// Tests sorting by a column in ascending order.
///
/// Expected: 200 with votes 0, 3, 7, 42, 100
#[tokio::test]
async fn sorts_by_query() {
    let (app, _, _test) = seeded_app().await;

    let (status, body) = send(&app, get("/api/articles?sort_by=votes&order=asc")).await;

    assert_eq!(status, StatusCode::OK);
    let votes: Vec<_> = body["articles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["votes"].as_i64().unwrap())
        .collect();
    assert_eq!(votes, vec![0, 3, 7, 42, 100]);
}

/// Tests filtering by topic.
#[tokio::test]
async fn filters_by_topic() {
    let (app, _, _test) = seeded_app().await;

    let (status, body) = send(&app, get("/api/articles?topic=cats")).await;

    assert_eq!(status, StatusCode::OK);
    let articles = body["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["topic"], "cats");
}

/// Tests filtering by an existing topic with no articles.
///
/// Expected: 200 with an empty array
#[tokio::test]
async fn returns_empty_for_topic_without_articles() {
    let (app, _, _test) = seeded_app().await;

    let (status, body) = send(&app, get("/api/articles?topic=paper")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "articles": [] }));
}

#[tokio::test]
async fn rejects_unknown_sort_column() {
    let (app, _, _test) = seeded_app().await;

    let (status, body) = send(&app, get("/api/articles?sort_by=body")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "msg": "Invalid sort_by query" }));
}

#[tokio::test]
async fn rejects_unknown_order() {
    let (app, _, _test) = seeded_app().await;

    let (status, body) = send(&app, get("/api/articles?order=ASC")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "msg": "Invalid order query" }));
}

#[tokio::test]
async fn rejects_unknown_topic() {
    let (app, _, _test) = seeded_app().await;

    let (status, body) = send(&app, get("/api/articles?topic=dogs")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "msg": "Invalid topic query" }));
}
