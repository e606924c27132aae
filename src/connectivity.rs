use std::time::Duration;

use reqwest::Url;

pub const CHECK_TIMEOUT: Duration = Duration::from_secs(3);

/// Cheap reachability probe run before a fetch: resolves the feed host.
///
/// Returns false when the URL has no host, resolution fails, or it takes
/// longer than `timeout`.
pub async fn is_online(url: &str, timeout: Duration) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let port = parsed.port_or_known_default().unwrap_or(80);
    // IPv6 hosts keep their brackets so the target parses as a socket address.
    let target = format!("{}:{}", host, port);

    let lookup = tokio::time::timeout(timeout, tokio::net::lookup_host(target.as_str())).await;
    match lookup {
        Ok(Ok(mut addrs)) => addrs.next().is_some(),
        Ok(Err(e)) => {
            tracing::warn!(host, error = %e, "connectivity check failed");
            false
        }
        Err(_) => {
            tracing::warn!(host, "connectivity check timed out");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loopback_is_reachable() {
        assert!(is_online("http://127.0.0.1:9/query", CHECK_TIMEOUT).await);
        assert!(is_online("http://[::1]:9/query", CHECK_TIMEOUT).await);
    }

    #[tokio::test]
    async fn urls_without_host_are_offline() {
        assert!(!is_online("", CHECK_TIMEOUT).await);
        assert!(!is_online("file:///tmp/feed.json", CHECK_TIMEOUT).await);
    }

    #[tokio::test]
    async fn explicit_port_is_kept_for_lookup() {
        assert!(is_online("https://localhost:8443/fdsnws/event/1/query", CHECK_TIMEOUT).await);
    }

    #[tokio::test]
    async fn unresolvable_host_is_offline() {
        assert!(!is_online("http://quakes.invalid/query", CHECK_TIMEOUT).await);
    }
}
