// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::Router;
use chrono::NaiveDate;
use presence_tracker::config::Config;
use presence_tracker::models::{Role, User};
use presence_tracker::AppState;

/// Serve `router` on an ephemeral local port and return its `/api` base URL.
#[allow(dead_code)]
pub async fn spawn_api(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server failed");
    });
    format!("http://{}/api", addr)
}

/// A base URL nothing is listening on.
#[allow(dead_code)]
pub async fn dead_api() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{}/api", addr)
}

/// Client state pointed at `base_url`.
#[allow(dead_code)]
pub fn test_app(base_url: &str) -> AppState {
    let config = Config {
        api_base_url: base_url.to_string(),
        api_timeout: std::time::Duration::from_secs(5),
        ..Config::default()
    };
    AppState::new(config).expect("Failed to build client")
}

#[allow(dead_code)]
pub fn make_user(id: &str, name: &str, role: Role, attendance: u32) -> User {
    User {
        user_id: id.to_string(),
        username: name.to_string(),
        picture_url: None,
        birth_date: NaiveDate::from_ymd_opt(2000, 1, 1),
        room_name: None,
        role: Some(role),
        phone_number: None,
        attendance,
    }
}
