mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use futures::future::join_all;
use reqwest::StatusCode;
use serde_json::json;

fn counting_hook() -> (ops_gateway::client::ExpiryHook, Arc<AtomicUsize>) {
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    let hook: ops_gateway::client::ExpiryHook = Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (hook, fired)
}

#[tokio::test]
async fn concurrent_rejections_sign_out_and_redirect_once() -> Result<()> {
    let backend =
        common::spawn_backend(StatusCode::UNAUTHORIZED, json!({ "error": "expired" })).await?;
    let (hook, fired) = counting_hook();
    let state = common::state_with_hook(&backend.base_url, hook)?;
    common::signed_in(&state);
    let gateway = common::spawn_gateway_with_state(state).await?;

    let client = reqwest::Client::new();
    let calls = (0..5).map(|_| {
        let client = client.clone();
        let url = format!("{}/api/users", gateway.base_url);
        async move { client.get(url).send().await }
    });

    for res in join_all(calls).await {
        assert_eq!(res?.status(), StatusCode::UNAUTHORIZED);
    }

    assert!(gateway.state.sessions.current().is_none());
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn redirect_rearms_after_a_fresh_sign_in() -> Result<()> {
    let backend =
        common::spawn_backend(StatusCode::FORBIDDEN, json!({ "error": "forbidden" })).await?;
    let (hook, fired) = counting_hook();
    let state = common::state_with_hook(&backend.base_url, hook)?;
    common::signed_in(&state);
    let gateway = common::spawn_gateway_with_state(state).await?;
    let client = reqwest::Client::new();
    let url = format!("{}/api/incident", gateway.base_url);

    client.get(&url).send().await?;
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    common::signed_in(&gateway.state);
    client.get(&url).send().await?;
    assert_eq!(fired.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn failed_sign_in_attempts_do_not_trigger_redirects() -> Result<()> {
    let backend =
        common::spawn_backend(StatusCode::UNAUTHORIZED, json!({ "error": "bad credentials" }))
            .await?;
    let (hook, fired) = counting_hook();
    let state = common::state_with_hook(&backend.base_url, hook)?;
    let gateway = common::spawn_gateway_with_state(state).await?;
    let client = reqwest::Client::new();

    for _ in 0..3 {
        let res = client
            .post(format!("{}/api/auth/login", gateway.base_url))
            .json(&json!({ "email": "admin@example.com", "password": "wrong" }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    // Nobody was signed in, so there is nobody to redirect
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn non_auth_errors_never_fire_the_hook() -> Result<()> {
    let backend =
        common::spawn_backend(StatusCode::SERVICE_UNAVAILABLE, json!({ "error": "down" })).await?;
    let (hook, fired) = counting_hook();
    let state = common::state_with_hook(&backend.base_url, hook)?;
    common::signed_in(&state);
    let gateway = common::spawn_gateway_with_state(state).await?;

    let res = reqwest::Client::new()
        .get(format!("{}/api/config", gateway.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(gateway.state.sessions.current().is_some());
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    Ok(())
}
