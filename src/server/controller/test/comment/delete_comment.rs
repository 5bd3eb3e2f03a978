use super::*;

/// Tests deleting an existing comment.
///
/// Expected: 204 with no body, and the comment is gone from its article
#[tokio::test]
async fn deletes_comment() {
    let (app, seeded, _test) = seeded_app().await;
    let comment = &seeded.comments[0];

    let (status, body) = send(&app, delete(&format!("/api/comments/{}", comment.comment_id))).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, body) = send(
        &app,
        get(&format!("/api/articles/{}/comments", comment.article_id)),
    )
    .await;
    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 3);
    assert!(comments
        .iter()
        .all(|c| c["comment_id"] != json!(comment.comment_id)));
}

#[tokio::test]
async fn returns_404_for_nonexistent_comment() {
    let (app, _, _test) = seeded_app().await;

    let (status, body) = send(&app, delete("/api/comments/1111111")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "Comment not found" }));
}

#[tokio::test]
async fn rejects_malformed_id() {
    let (app, _, _test) = seeded_app().await;

    let (status, body) = send(&app, delete("/api/comments/NaN")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "msg": "400: Bad request" }));
}

#[tokio::test]
async fn returns_404_for_out_of_range_comment_id() {
    let (app, _, _test) = seeded_app().await;

    let (status, body) = send(&app, delete("/api/comments/99999999999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "Comment not found" }));
}
