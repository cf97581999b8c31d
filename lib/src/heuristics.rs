use reqwest::header::{
    ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, SET_COOKIE, USER_AGENT,
};

/// Headers of a regular desktop browser.
/// Requests without them are more likely to be rejected as automated traffic.
pub(crate) fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 6.1; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/56.0.2924.87 Safari/537.36",
        ),
    );
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, sdch, br"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.8"));
    headers
}

/// Gmail answers the `gxlu` endpoint with a cookie only when the
/// address belongs to an existing mailbox. Nothing else in the
/// response (status, body) carries a signal.
pub(crate) fn mailbox_disclosed(headers: &HeaderMap) -> bool {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .any(|cookie| !cookie.is_empty())
}
