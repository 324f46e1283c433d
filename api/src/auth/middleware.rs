use axum::{
    body::Body,
    extract::{ConnectInfo, FromRequestParts},
    http::{Method, Request, StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::{Origin, UserAgent};
use std::net::SocketAddr;
use std::time::Instant;
use tracing::info;

use crate::auth::claims::{AuthUser, Claims, Role};

/// Request log line, one per call, written after the handler returns so the
/// status and latency are known.
///
/// The caller is `student:<matric>`, `department:<id>` or `anonymous`. An
/// expired or forged token logs as `anonymous`; the guards decide whether
/// that is a 401. Preflight `OPTIONS` requests pass through unlogged.
pub async fn log_request(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let (mut parts, body) = req.into_parts();

    if parts.method == Method::OPTIONS {
        return Ok(next.run(Request::from_parts(parts, body)).await);
    }

    let principal = AuthUser::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map_or_else(|| "anonymous".to_string(), |AuthUser(claims)| principal_label(&claims));
    let origin = header_text::<Origin>(&mut parts).await;
    let user_agent = header_text::<UserAgent>(&mut parts).await;

    let method = parts.method.clone();
    let path = parts.uri.path().to_owned();
    let started = Instant::now();

    let response = next.run(Request::from_parts(parts, body)).await;

    info!(
        %method,
        %path,
        ip = %addr.ip(),
        principal,
        origin,
        user_agent,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );

    Ok(response)
}

fn principal_label(claims: &Claims) -> String {
    match claims.role {
        Role::Student => format!("student:{}", claims.sub),
        Role::Department => format!("department:{}", claims.sub),
    }
}

async fn header_text<H>(parts: &mut Parts) -> String
where
    H: headers::Header + std::fmt::Display + Send + 'static,
{
    TypedHeader::<H>::from_request_parts(parts, &())
        .await
        .map_or_else(|_| "unknown".to_string(), |TypedHeader(h)| h.to_string())
}
