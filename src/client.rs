use axum::http::{HeaderMap, header};

pub const X_FORWARDED_FOR: &str = "x-forwarded-for";
pub const X_REAL_IP: &str = "x-real-ip";
pub const UNKNOWN: &str = "unknown";

/// Resolve the caller's IP address.
///
/// Priority: `X-Forwarded-For` verbatim, then `X-Real-IP` verbatim, then the
/// transport peer address with its port removed. IPv6 loopback is reported
/// as `127.0.0.1`.
pub fn client_ip(headers: &HeaderMap, remote_addr: Option<&str>) -> String {
    if let Some(ip) = header_value(headers, X_FORWARDED_FOR) {
        return ip;
    }

    if let Some(ip) = header_value(headers, X_REAL_IP) {
        return ip;
    }

    match remote_addr.filter(|addr| !addr.is_empty()) {
        Some(addr) => {
            // Fall back to the raw value when it is not host:port
            let host = split_host(addr).unwrap_or(addr);

            if host == "::1" || host == "[::1]" {
                return "127.0.0.1".to_string();
            }

            host.to_string()
        }
        None => UNKNOWN.to_string(),
    }
}

pub fn user_agent(headers: &HeaderMap) -> String {
    header_value(headers, header::USER_AGENT.as_str()).unwrap_or_else(|| UNKNOWN.to_string())
}

/// Raw header value, if present and non-empty. Invalid UTF-8 is replaced
/// rather than dropped.
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .filter(|v| !v.is_empty())
}

/// Host part of `host:port` or `[host]:port`.
///
/// Returns `None` when the address has no port, or when an unbracketed
/// host contains a colon (a bare IPv6 address).
fn split_host(addr: &str) -> Option<&str> {
    if let Some(rest) = addr.strip_prefix('[') {
        let (host, after) = rest.split_once(']')?;
        after.strip_prefix(':')?;
        return Some(host);
    }

    let (host, _port) = addr.rsplit_once(':')?;
    if host.contains(':') {
        return None;
    }

    Some(host)
}
