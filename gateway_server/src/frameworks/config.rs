use std::env;
use std::net::IpAddr;

// Runtime/server settings for the gateway.

pub const DEFAULT_HTTP_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_PORT: u16 = 8000;

pub fn http_port() -> u16 {
    env::var("GATEWAY_PORT")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT)
}

pub fn http_host() -> IpAddr {
    env::var("GATEWAY_HOST")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(IpAddr::from([127, 0, 0, 1]))
}

pub fn backend_url() -> String {
    resolve_backend_url(
        env::var("BACKEND_URL").ok().as_deref(),
        env::var("BACKEND_PORT").ok().as_deref(),
    )
}

/// `BACKEND_URL` wins when set; otherwise the backend is assumed on
/// localhost at `BACKEND_PORT` (8000 when unset or not a port).
pub fn resolve_backend_url(url_override: Option<&str>, port: Option<&str>) -> String {
    if let Some(url) = url_override.map(str::trim).filter(|url| !url.is_empty()) {
        return url.to_string();
    }

    let port = port
        .and_then(|value| value.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_BACKEND_PORT);
    format!("http://localhost:{port}")
}
