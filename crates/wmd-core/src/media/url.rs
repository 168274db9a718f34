//! Raw listing URLs into absolute URLs.

/// Normalize a raw anchor URL against the wiki host.
///
/// - already has an explicit scheme: returned unchanged
/// - protocol-relative (`//upload.example.org/x`): `https:` prepended
/// - anything else is treated as host-relative: `https://{host}` prepended
pub fn absolutize(raw: &str, host: &str) -> String {
    if raw.starts_with("//") {
        format!("https:{raw}")
    } else if url::Url::parse(raw).is_ok() {
        raw.to_string()
    } else if raw.starts_with('/') {
        format!("https://{host}{raw}")
    } else {
        format!("https://{host}/{raw}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_unchanged() {
        assert_eq!(
            absolutize("https://images.example.org/a/b.png", "wiki.example.org"),
            "https://images.example.org/a/b.png"
        );
        assert_eq!(
            absolutize("http://images.example.org/a/b.png", "wiki.example.org"),
            "http://images.example.org/a/b.png"
        );
    }

    #[test]
    fn protocol_relative_gets_https() {
        assert_eq!(
            absolutize("//images.example.org/a/b.png", "wiki.example.org"),
            "https://images.example.org/a/b.png"
        );
    }

    #[test]
    fn root_relative_gets_scheme_and_host() {
        assert_eq!(
            absolutize("/images/a/b.png", "wiki.example.org"),
            "https://wiki.example.org/images/a/b.png"
        );
    }

    #[test]
    fn bare_relative_gets_separator_too() {
        assert_eq!(
            absolutize("images/a/b.png", "wiki.example.org"),
            "https://wiki.example.org/images/a/b.png"
        );
    }
}
