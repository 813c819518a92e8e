mod common;

use actix_web::{test, App};
use serde_json::json;

use common::TestApp;
use star_forum::routes::configure_routes;

#[actix_rt::test]
async fn create_question_returns_created_row() {
    let test_app = TestApp::new();

    let service = test::init_service(
        App::new()
            .app_data(test_app.app_state().clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/questions")
        .insert_header(("X-User-Id", "7"))
        .set_json(json!({ "question": "Tell me about yourself" }))
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["userId"], 7);
    assert_eq!(body["body"], "Tell me about yourself");

    let questions = test_app.db().get_all_questions().unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].user_id, 7);
}

#[actix_rt::test]
async fn create_question_without_identity_is_server_error() {
    let test_app = TestApp::new();

    let service = test::init_service(
        App::new()
            .app_data(test_app.app_state().clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/questions")
        .set_json(json!({ "question": "Tell me about yourself" }))
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), 500);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No User attached to the Request");
    assert_eq!(test_app.count_rows("questions"), 0);
}

#[actix_rt::test]
async fn create_question_without_body_is_rejected() {
    let test_app = TestApp::new();

    let service = test::init_service(
        App::new()
            .app_data(test_app.app_state().clone())
            .configure(configure_routes),
    )
    .await;

    for payload in [json!({}), json!({ "question": "" })] {
        let req = test::TestRequest::post()
            .uri("/api/questions")
            .insert_header(("X-User-Id", "7"))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&service, req).await;

        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "No Question on the Request Body");
    }

    assert_eq!(test_app.count_rows("questions"), 0);
}

#[actix_rt::test]
async fn list_all_questions_returns_every_row() {
    let test_app = TestApp::new();
    test_app.db().create_question(1, "First question").unwrap();
    test_app.db().create_question(2, "Second question").unwrap();

    let service = test::init_service(
        App::new()
            .app_data(test_app.app_state().clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/questions").to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let questions = body.as_array().unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0]["body"], "First question");
    assert_eq!(questions[1]["body"], "Second question");
}

#[actix_rt::test]
async fn list_questions_by_user_filters_on_owner() {
    let test_app = TestApp::new();
    test_app.db().create_question(1, "Mine").unwrap();
    test_app.db().create_question(1, "Also mine").unwrap();
    test_app.db().create_question(2, "Someone else's").unwrap();

    let service = test::init_service(
        App::new()
            .app_data(test_app.app_state().clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/users/1/questions")
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let questions = body.as_array().unwrap();
    assert_eq!(questions.len(), 2);
    for question in questions {
        assert_eq!(question["userId"], 1);
    }
}

#[actix_rt::test]
async fn list_questions_by_unknown_user_is_empty() {
    let test_app = TestApp::new();
    test_app.db().create_question(1, "Mine").unwrap();

    let service = test::init_service(
        App::new()
            .app_data(test_app.app_state().clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/users/42/questions")
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[actix_rt::test]
async fn list_questions_by_user_rejects_non_numeric_id() {
    let test_app = TestApp::new();

    let service = test::init_service(
        App::new()
            .app_data(test_app.app_state().clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/users/abc/questions")
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid userId format");
}

#[actix_rt::test]
async fn get_one_question_nests_answers_and_comments() {
    let test_app = TestApp::new();
    let question = test_app.db().create_question(1, "Tell me about a conflict").unwrap();
    let answer = test_app
        .db()
        .create_answer(question.id, "Two services", "Pick one", "Benchmarked", "Kept both")
        .unwrap();
    test_app.db().create_comment(answer.id, "Good story").unwrap();
    test_app.db().create_comment(answer.id, "More detail please").unwrap();

    let service = test::init_service(
        App::new()
            .app_data(test_app.app_state().clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/questions/{}", question.id))
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], question.id);
    assert_eq!(body["userId"], 1);
    assert_eq!(body["body"], "Tell me about a conflict");

    let answers = body["answers"].as_array().unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0]["questionId"], question.id);
    assert_eq!(answers[0]["situation"], "Two services");

    let comments = answers[0]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["answerId"], answer.id);
    assert_eq!(comments[0]["comment"], "Good story");
}

#[actix_rt::test]
async fn get_one_missing_question_is_not_found() {
    let test_app = TestApp::new();

    let service = test::init_service(
        App::new()
            .app_data(test_app.app_state().clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/questions/999")
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No Question Found");
}

#[actix_rt::test]
async fn get_one_question_rejects_non_numeric_id() {
    let test_app = TestApp::new();

    let service = test::init_service(
        App::new()
            .app_data(test_app.app_state().clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/questions/abc")
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid questionId format");
}

#[actix_rt::test]
async fn delete_question_is_idempotent() {
    let test_app = TestApp::new();
    let question = test_app.db().create_question(1, "Short lived").unwrap();

    let service = test::init_service(
        App::new()
            .app_data(test_app.app_state().clone())
            .configure(configure_routes),
    )
    .await;

    for _ in 0..2 {
        let req = test::TestRequest::delete()
            .uri(&format!("/api/questions/{}", question.id))
            .to_request();
        let resp = test::call_service(&service, req).await;

        assert_eq!(resp.status(), 204);

        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }

    assert_eq!(test_app.count_rows("questions"), 0);
}

#[actix_rt::test]
async fn delete_question_removes_answers_and_comments() {
    let test_app = TestApp::new();
    let question = test_app.db().create_question(1, "Cascade me").unwrap();
    let answer = test_app
        .db()
        .create_answer(question.id, "S", "T", "A", "R")
        .unwrap();
    test_app.db().create_comment(answer.id, "A comment").unwrap();

    let service = test::init_service(
        App::new()
            .app_data(test_app.app_state().clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/questions/{}", question.id))
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), 204);
    assert_eq!(test_app.count_rows("questions"), 0);
    assert_eq!(test_app.count_rows("answers"), 0);
    assert_eq!(test_app.count_rows("comments"), 0);
}

#[actix_rt::test]
async fn delete_question_rejects_non_numeric_id() {
    let test_app = TestApp::new();

    let service = test::init_service(
        App::new()
            .app_data(test_app.app_state().clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::delete()
        .uri("/api/questions/abc")
        .to_request();
    let resp = test::call_service(&service, req).await;

    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid questionId format");
}
