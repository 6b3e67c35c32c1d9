use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything outside RFC 3986 unreserved gets percent-encoded, so the
/// resulting link survives both mail clients and query-string parsing.
const MAILTO_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Builds the body used for share emails and share links.
#[must_use]
pub fn share_body(article_title: &str, article_content: &str) -> String {
    format!(
        "Check out this article: {}\n\n---\n\n{}",
        article_title, article_content
    )
}

/// Builds a prefilled `mailto:` link for sharing an article.
///
/// This is the no-server-dependency share path: the user's own mail client
/// takes over, so there is no failure mode beyond link construction.
///
/// # Examples
///
/// ```
/// use insights_hub::utils::links::share_link;
///
/// let link = share_link("a@example.com", "AI News", "Body text");
/// assert!(link.starts_with("mailto:a%40example.com?subject=AI%20News&body="));
/// ```
#[must_use]
pub fn share_link(recipient: &str, article_title: &str, article_content: &str) -> String {
    let subject = utf8_percent_encode(article_title, MAILTO_COMPONENT);
    let body_raw = share_body(article_title, article_content);
    let body = utf8_percent_encode(&body_raw, MAILTO_COMPONENT);
    let to = utf8_percent_encode(recipient, MAILTO_COMPONENT);

    format!("mailto:{}?subject={}&body={}", to, subject, body)
}
