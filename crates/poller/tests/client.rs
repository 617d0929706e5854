//! Homework API client and full iterations against mock HTTP servers.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use herald_common::BotError;
use herald_notifier::TelegramNotifier;
use herald_poller::client::{HomeworkSource, PracticumClient};
use herald_poller::poller::StatusPoller;

const HOMEWORK_PATH: &str = "/api/user_api/homework_statuses/";

fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), HOMEWORK_PATH)
}

#[tokio::test]
async fn test_get_api_answer_sends_token_and_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(HOMEWORK_PATH))
        .and(header("Authorization", "OAuth secret-token"))
        .and(query_param("from_date", "1600000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "homeworks": [],
            "current_date": 1600000600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PracticumClient::new(endpoint(&server), "secret-token");
    let body = client.get_api_answer(1_600_000_000).await.expect("fetch ok");

    assert_eq!(body, json!({"homeworks": [], "current_date": 1600000600}));
}

#[tokio::test]
async fn test_get_api_answer_returns_body_unmodified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["not", "a", "mapping"])))
        .mount(&server)
        .await;

    let client = PracticumClient::new(endpoint(&server), "t");
    let body = client.get_api_answer(0).await.unwrap();

    assert_eq!(body, json!(["not", "a", "mapping"]));
}

#[tokio::test]
async fn test_non_200_is_status_code_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = PracticumClient::new(endpoint(&server), "t");
    let err = client.get_api_answer(0).await.unwrap_err();

    assert_eq!(err, BotError::StatusCode { status: 503 });
}

#[tokio::test]
async fn test_other_success_codes_are_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = PracticumClient::new(endpoint(&server), "t");
    let err = client.get_api_answer(0).await.unwrap_err();

    assert_eq!(err, BotError::StatusCode { status: 204 });
}

#[tokio::test]
async fn test_malformed_json_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = PracticumClient::new(endpoint(&server), "t");
    let err = client.get_api_answer(0).await.unwrap_err();

    assert!(matches!(err, BotError::Transport(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let client = PracticumClient::new("http://127.0.0.1:1/homework_statuses/", "t");
    let err = client.get_api_answer(0).await.unwrap_err();

    assert!(matches!(err, BotError::Transport(_)));
}

// ============================================================
// Full iteration: homework API -> Telegram
// ============================================================

#[tokio::test]
async fn test_iteration_relays_approved_status_to_telegram() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(HOMEWORK_PATH))
        .and(query_param("from_date", "1699999000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1700000000
        })))
        .mount(&api)
        .await;

    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botBOT/sendMessage"))
        .and(body_json(json!({
            "chat_id": "777",
            "text": "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&telegram)
        .await;

    let mut poller = StatusPoller::new(
        PracticumClient::new(endpoint(&api), "token"),
        TelegramNotifier::new(&telegram.uri(), "BOT"),
        "777",
        Duration::from_secs(600),
    )
    .with_cursor(1_699_999_000);

    poller.poll_once().await.unwrap();

    assert_eq!(poller.cursor(), 1_700_000_000);
}

#[tokio::test]
async fn test_iteration_reports_server_error_to_telegram() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&api)
        .await;

    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botBOT/sendMessage"))
        .and(body_json(json!({
            "chat_id": "777",
            "text": "Сбой в работе программы: Статус сервера: 500"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&telegram)
        .await;

    let mut poller = StatusPoller::new(
        PracticumClient::new(endpoint(&api), "token"),
        TelegramNotifier::new(&telegram.uri(), "BOT"),
        "777",
        Duration::from_secs(600),
    )
    .with_cursor(1_699_999_000);

    let err = poller.poll_once().await.unwrap_err();

    assert_eq!(err, BotError::StatusCode { status: 500 });
    assert_eq!(poller.cursor(), 1_699_999_000);
}
