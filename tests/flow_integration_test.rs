use dream_reflect::core::FlowState;
use dream_reflect::{FlowController, HttpDreamService};
use httpmock::prelude::*;

fn controller_for(server: &MockServer) -> FlowController<HttpDreamService> {
    FlowController::new(HttpDreamService::new(server.base_url()), 200)
}

#[tokio::test]
async fn test_valid_dream_end_to_end() {
    let server = MockServer::start();
    let dream = "Travel the world and explore cultures";

    let validate_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/validate_dream")
            .json_body(serde_json::json!({"dreams": dream}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"content": "valid"}));
    });

    let generate_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/dreams")
            .json_body(serde_json::json!({"dreams": dream}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"content": "Dear present self, you made it."}));
    });

    let mut controller = controller_for(&server);
    controller.on_input_change(dream);
    controller.on_submit().await;

    validate_mock.assert();
    generate_mock.assert();
    assert_eq!(controller.flow_state(), FlowState::Reveal);
    assert_eq!(
        controller.reflection(),
        Some("Dear present self, you made it.")
    );
}

#[tokio::test]
async fn test_rejected_dream_never_calls_generation() {
    let server = MockServer::start();

    let validate_mock = server.mock(|when, then| {
        when.method(POST).path("/validate_dream");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"content": "no"}));
    });

    let generate_mock = server.mock(|when, then| {
        when.method(POST).path("/dreams");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"content": "should never be fetched"}));
    });

    let mut controller = controller_for(&server);
    controller.on_input_change("qwerty asdf");
    controller.on_submit().await;

    validate_mock.assert();
    generate_mock.assert_hits(0);
    assert_eq!(controller.flow_state(), FlowState::InvalidFeedback);
    assert!(controller.reflection().is_none());
    assert!(controller.feedback().is_some());
}

#[tokio::test]
async fn test_word_cap_blocks_any_request() {
    let server = MockServer::start();

    let validate_mock = server.mock(|when, then| {
        when.method(POST).path("/validate_dream");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"content": "valid"}));
    });

    let mut controller = controller_for(&server);
    let long_dream = "dream ".repeat(250).trim().to_string();
    controller.on_input_change(&long_dream);
    controller.on_submit().await;

    validate_mock.assert_hits(0);
    assert_eq!(controller.flow_state(), FlowState::InvalidFeedback);
}

#[tokio::test]
async fn test_server_error_returns_to_input() {
    let server = MockServer::start();

    let validate_mock = server.mock(|when, then| {
        when.method(POST).path("/validate_dream");
        then.status(500);
    });

    let mut controller = controller_for(&server);
    controller.on_input_change("travel the world");
    controller.on_submit().await;

    validate_mock.assert();
    assert_eq!(controller.flow_state(), FlowState::Input);
    assert!(controller.reflection().is_none());
}

#[tokio::test]
async fn test_generation_error_returns_to_input() {
    let server = MockServer::start();

    let validate_mock = server.mock(|when, then| {
        when.method(POST).path("/validate_dream");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"content": "valid"}));
    });

    let generate_mock = server.mock(|when, then| {
        when.method(POST).path("/dreams");
        then.status(502);
    });

    let mut controller = controller_for(&server);
    controller.on_input_change("write a novel");
    controller.on_submit().await;

    validate_mock.assert();
    generate_mock.assert();
    assert_eq!(controller.flow_state(), FlowState::Input);
    assert!(controller.reflection().is_none());
}

#[tokio::test]
async fn test_random_dream_prefills_input() {
    let server = MockServer::start();

    let random_mock = server.mock(|when, then| {
        when.method(GET).path("/random_dream");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"content": "Start a business that inspires change"}));
    });

    let mut controller = controller_for(&server);
    let prefilled = controller.on_generate_random().await;

    random_mock.assert();
    assert!(prefilled);
    assert_eq!(
        controller.input_text(),
        "Start a business that inspires change"
    );
    assert_eq!(controller.word_count(), 6);
    assert_eq!(controller.flow_state(), FlowState::Input);
}

#[tokio::test]
async fn test_full_cycle_with_reset() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/validate_dream");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"content": "valid"}));
    });

    server.mock(|when, then| {
        when.method(POST).path("/dreams");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"content": "Keep dreaming."}));
    });

    let mut controller = controller_for(&server);
    controller.on_input_change("master gourmet cooking");
    controller.on_submit().await;
    assert_eq!(controller.flow_state(), FlowState::Reveal);

    controller.on_reset();
    assert_eq!(controller.flow_state(), FlowState::Input);
    assert_eq!(controller.input_text(), "");
    assert_eq!(controller.word_count(), 0);
    assert!(controller.reflection().is_none());
}
