use super::*;

/// Tests applying +1 and -5, each to a freshly seeded article with 100 votes.
///
/// Expected: 200 with 101, then 200 with 95
#[tokio::test]
async fn applies_vote_delta() {
    for (inc_votes, expected) in [(1, 101), (-5, 95)] {
        let (app, seeded, _test) = seeded_app().await;
        let uri = format!("/api/articles/{}", seeded.articles[0].article_id);

        let (status, body) = send(
            &app,
            with_json(Method::PATCH, &uri, json!({ "inc_votes": inc_votes })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["article"]["votes"], expected);
        assert_eq!(body["article"]["comment_count"], 4);
    }
}

/// Tests a delta that would push votes past the integer range.
///
/// Expected: 400, and the article and listing still read back normally
#[tokio::test]
async fn rejects_overflowing_delta() {
    let (app, seeded, _test) = seeded_app().await;
    let uri = format!("/api/articles/{}", seeded.articles[0].article_id);

    let (status, body) = send(
        &app,
        with_json(Method::PATCH, &uri, json!({ "inc_votes": i32::MAX })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "msg": "400: Bad request" }));

    let (status, body) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["article"]["votes"], 100);

    let (status, body) = send(&app, get("/api/articles?sort_by=comment_count&order=asc")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["articles"].as_array().map(Vec::len),
        Some(seeded.articles.len())
    );
}

/// Tests bodies whose `inc_votes` is missing or not an integer.
///
/// Expected: 400 for each
#[tokio::test]
async fn rejects_malformed_body() {
    let (app, seeded, _test) = seeded_app().await;
    let uri = format!("/api/articles/{}", seeded.articles[0].article_id);

    for payload in [
        json!({}),
        json!({ "inc_votes": "1" }),
        json!({ "inc_votes": 1.5 }),
        json!({ "votes": 1 }),
    ] {
        let (status, body) = send(&app, with_json(Method::PATCH, &uri, payload.clone())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", payload);
        assert_eq!(body, json!({ "msg": "400: Bad request" }));
    }
}

#[tokio::test]
async fn rejects_invalid_json() {
    let (app, seeded, _test) = seeded_app().await;
    let uri = format!("/api/articles/{}", seeded.articles[0].article_id);

    let (status, body) = send(&app, with_raw_json(Method::PATCH, &uri, "{\"inc_votes\": ")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "msg": "400: Bad request" }));
}

#[tokio::test]
async fn rejects_malformed_id() {
    let (app, _, _test) = seeded_app().await;

    let (status, body) = send(
        &app,
        with_json(Method::PATCH, "/api/articles/NaN", json!({ "inc_votes": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "msg": "400: Bad request" }));
}

#[tokio::test]
async fn returns_404_for_nonexistent_article() {
    let (app, _, _test) = seeded_app().await;

    let (status, body) = send(
        &app,
        with_json(Method::PATCH, "/api/articles/1111111", json!({ "inc_votes": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "Article not found" }));
}
