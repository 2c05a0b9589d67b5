use reqwest::Url;

/// Returns the trimmed value when it is an absolute http(s) URL with a host
/// and no embedded whitespace. Anything else is rendered as plain text.
pub fn as_link(text: &str) -> Option<&str> {
    let candidate = text.trim();
    if candidate.is_empty() || candidate.chars().any(char::is_whitespace) {
        return None;
    }
    let url = Url::parse(candidate).ok()?;
    let web_scheme = matches!(url.scheme(), "http" | "https");
    let has_host = url.host_str().is_some_and(|host| !host.is_empty());
    (web_scheme && has_host).then_some(candidate)
}
