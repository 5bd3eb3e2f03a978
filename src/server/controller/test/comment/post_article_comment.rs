use super::*;

/// Tests posting a comment by an existing user.
///
/// Expected: 201 with the new comment, zero votes
#[tokio::test]
async fn creates_comment() {
    let (app, seeded, _test) = seeded_app().await;
    let article_id = seeded.articles[1].article_id;
    let uri = format!("/api/articles/{}/comments", article_id);

    let (status, body) = send(
        &app,
        with_json(
            Method::POST,
            &uri,
            json!({ "username": "butter_bridge", "body": "Great read" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let comment = &body["comment"];
    assert_eq!(comment["article_id"], json!(article_id));
    assert_eq!(comment["author"], "butter_bridge");
    assert_eq!(comment["body"], "Great read");
    assert_eq!(comment["votes"], 0);
    assert!(comment["comment_id"].is_i64());
    assert!(comment["created_at"].is_string());

    let (_, body) = send(&app, get(&uri)).await;
    assert_eq!(body["comments"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn returns_404_for_nonexistent_user() {
    let (app, seeded, _test) = seeded_app().await;
    let uri = format!("/api/articles/{}/comments", seeded.articles[0].article_id);

    let (status, body) = send(
        &app,
        with_json(Method::POST, &uri, json!({ "username": "nobody", "body": "Hi" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "User not found" }));
}

#[tokio::test]
async fn returns_404_for_nonexistent_article() {
    let (app, _, _test) = seeded_app().await;

    let (status, body) = send(
        &app,
        with_json(
            Method::POST,
            "/api/articles/1111111/comments",
            json!({ "username": "butter_bridge", "body": "Hi" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "Article not found" }));
}

/// Tests bodies with missing, mistyped or empty fields.
///
/// Expected: 400 for each
#[tokio::test]
async fn rejects_malformed_body() {
    let (app, seeded, _test) = seeded_app().await;
    let uri = format!("/api/articles/{}/comments", seeded.articles[0].article_id);

    for payload in [
        json!({}),
        json!({ "username": "butter_bridge" }),
        json!({ "body": "Hi" }),
        json!({ "username": "butter_bridge", "body": "" }),
        json!({ "username": "butter_bridge", "body": 5 }),
    ] {
        let (status, body) = send(&app, with_json(Method::POST, &uri, payload.clone())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", payload);
        assert_eq!(body, json!({ "msg": "400: Bad request" }));
    }
}

#[tokio::test]
async fn rejects_malformed_id() {
    let (app, _, _test) = seeded_app().await;

    let (status, body) = send(
        &app,
        with_json(
            Method::POST,
            "/api/articles/NaN/comments",
            json!({ "username": "butter_bridge", "body": "Hi" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "msg": "400: Bad request" }));
}
