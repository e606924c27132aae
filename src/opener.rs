use std::io;

use reqwest::Url;

/// Hands an http(s) URL to the platform's default browser.
pub fn open_url(url: &str) -> io::Result<()> {
    let parsed = checked_url(url)?;
    tracing::info!(url = %parsed, "opening detail page");
    open::that_detached(parsed.as_str())
}

fn checked_url(url: &str) -> io::Result<Url> {
    let parsed = Url::parse(url)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}: {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("refusing to open {} url", scheme),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_web_urls_are_opened() {
        assert!(checked_url("https://earthquake.usgs.gov/earthquakes/eventpage/us7000abcd").is_ok());
        assert!(checked_url("http://127.0.0.1/x").is_ok());
        let query = checked_url("https://example.test/query?a=1&b=2").expect("web url");
        assert_eq!(query.as_str(), "https://example.test/query?a=1&b=2");
        assert!(checked_url("file:///etc/passwd").is_err());
        assert!(checked_url("").is_err());
        assert!(open_url("javascript:alert(1)").is_err());
        assert!(open_url("mailto:quakes@example.test").is_err());
    }
}
