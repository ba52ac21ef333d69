use url::Url;

/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Add a scheme when one is missing and drop trailing slashes.
///
/// Users commonly type `localhost:8080`, which the HTTP client rejects.
pub fn normalize_server_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

/// Normalize then parse a server URL, rejecting non-HTTP schemes.
pub fn parse_server_url(raw: &str) -> Result<Url, String> {
    if raw.trim().is_empty() {
        return Err("server URL is empty".to_string());
    }
    let normalized = normalize_server_url(raw);
    let url = Url::parse(&normalized).map_err(|err| err.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_env_forms() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn normalize_adds_scheme_and_trims_slash() {
        assert_eq!(
            normalize_server_url("localhost:8080/"),
            "http://localhost:8080"
        );
        assert_eq!(
            normalize_server_url("https://movies.example.com//"),
            "https://movies.example.com"
        );
    }

    #[test]
    fn parse_server_url_rejects_garbage() {
        assert!(parse_server_url("").is_err());
        assert!(parse_server_url("http://exa mple.com").is_err());
        assert!(parse_server_url("localhost:8080").is_ok());
    }
}
