#![allow(dead_code)]

use papertrail_domain::{ApiConfig, SdkConfig};
use papertrail_infra::PaperTrail;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const GUILD_ID: &str = "123456789";
pub const CHANNEL_ID: &str = "987654321";
pub const MESSAGE_ID: &str = "123456789";
pub const AUTHOR_ID: &str = "987654321";

/// Config pointing at a mock server.
pub fn config_for(server: &MockServer) -> SdkConfig {
    SdkConfig {
        api: ApiConfig { base_url: Some(server.uri()), ..ApiConfig::default() },
        ..SdkConfig::default()
    }
}

pub fn papertrail_for(server: &MockServer) -> PaperTrail {
    PaperTrail::from_config(&config_for(server)).expect("sdk should build against mock server")
}

/// Conformant PaperTrail error body.
pub fn error_body(status: u16, error: &str, message: &str, request_path: &str) -> Value {
    json!({
        "status": status,
        "error": error,
        "message": message,
        "timeStamp": "2025-06-01T12:00:00.000Z",
        "path": request_path
    })
}

pub fn registration_body() -> Value {
    json!({"guildId": GUILD_ID, "channelId": CHANNEL_ID})
}

pub fn content_body(content: &str) -> Value {
    json!({"messageId": MESSAGE_ID, "messageContent": content, "authorId": AUTHOR_ID})
}

/// Mount a JSON response for `verb request_path`.
pub async fn mount_json(server: &MockServer, verb: &str, request_path: &str, status: u16, body: Value) {
    Mock::given(method(verb))
        .and(path(request_path))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount an empty-bodied response for `verb request_path`.
pub async fn mount_empty(server: &MockServer, verb: &str, request_path: &str, status: u16) {
    Mock::given(method(verb))
        .and(path(request_path))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
