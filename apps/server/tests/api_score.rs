//! Score API tests.

mod common;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::TestContext;

/// Test the score starts at zero.
#[tokio::test]
async fn test_initial_score() {
    let ctx = TestContext::new();

    let body: Value = ctx.server.get("/api/score").await.json();

    assert_eq!(
        body,
        json!({ "correct": 0, "incorrect": 0, "total": 0, "percentage_correct": 0.0 })
    );
}

/// Test answers feed the score and error log.
#[tokio::test]
async fn test_score_and_error_log() {
    let ctx = TestContext::new();
    let first = ctx.start(&["Animals"]).await;
    let prompt = first["question"]["prompt"].as_str().unwrap().to_string();

    ctx.server
        .post("/api/quiz/answer")
        .json(&json!({ "answer": "wrong" }))
        .await
        .assert_status_ok();
    ctx.server.post("/api/quiz/next").await.assert_status_ok();
    ctx.server
        .post("/api/quiz/answer")
        .json(&json!({ "answer": ctx.correct_option() }))
        .await
        .assert_status_ok();

    let score: Value = ctx.server.get("/api/score").await.json();
    assert_eq!(score["correct"], 1);
    assert_eq!(score["incorrect"], 1);
    assert_eq!(score["percentage_correct"], 50.0);

    let body: Value = ctx.server.get("/api/score/errors").await.json();
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["question_text"], prompt);
    assert_eq!(errors[0]["given_answer_text"], "wrong");
}

/// Test resetting clears counters and the error log together.
#[tokio::test]
async fn test_reset_score() {
    let ctx = TestContext::new();
    ctx.start(&["Colors"]).await;
    ctx.server
        .post("/api/quiz/answer")
        .json(&json!({ "answer": "wrong" }))
        .await
        .assert_status_ok();

    let body: Value = ctx.server.delete("/api/score").await.json();
    assert_eq!(body["total"], 0);

    let body: Value = ctx.server.get("/api/score/errors").await.json();
    assert!(body["errors"].as_array().unwrap().is_empty());
}
