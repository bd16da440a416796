//! Shared helpers for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use flagdesk_api::{app, AppContext};
use flagdesk_domain::{Config, ModerationConfig, Uid};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

pub const MODERATOR: Uid = Uid(1);
pub const MEMBER: Uid = Uid(10);
pub const AUTHOR: Uid = Uid(20);

/// Context with one moderator and a post `7` written by [`AUTHOR`].
pub fn test_context() -> Arc<AppContext> {
    let config = Config {
        moderation: ModerationConfig { privileged_uids: vec![MODERATOR] },
        ..Config::default()
    };
    let ctx = Arc::new(AppContext::new(config));
    ctx.store.register_post("7", AUTHOR);
    ctx.store.register_user(AUTHOR);
    ctx
}

pub fn request(method: &str, uri: &str, uid: Option<&str>, body: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(uid) = uid {
        builder = builder.header("x-uid", uid);
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(router: &Router, req: Request<Body>) -> Response<Body> {
    router.clone().oneshot(req).await.unwrap()
}

/// Read the response body as bytes and deserialize from JSON.
pub async fn body_json<T: DeserializeOwned>(resp: Response<Body>) -> T {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn router(ctx: &Arc<AppContext>) -> Router {
    app(Arc::clone(ctx))
}
