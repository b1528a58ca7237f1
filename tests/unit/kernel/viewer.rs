use super::*;

#[test]
fn bare_hosts_get_https_prefix() {
    assert_eq!(normalize_url("example.com").unwrap(), "https://example.com");
    assert_eq!(
        normalize_url("  neverssl.com/path?q=1 ").unwrap(),
        "https://neverssl.com/path?q=1"
    );
}

#[test]
fn existing_scheme_is_kept_case_insensitively() {
    assert_eq!(normalize_url("http://a.b").unwrap(), "http://a.b");
    assert_eq!(normalize_url("HTTPS://A.B").unwrap(), "HTTPS://A.B");
}

#[test]
fn self_keyword_resolves_to_desktop() {
    assert_eq!(normalize_url("self").unwrap(), SELF_URL);
}

#[test]
fn malformed_addresses_are_rejected() {
    for raw in [
        "",
        "exa mple.com",
        "https://",
        "a<b",
        "example.com:abc",
        "https://host:99999",
    ] {
        assert_eq!(
            normalize_url(raw),
            Err(ViewerError::InvalidUrl(raw.trim().to_string())),
            "{raw:?}"
        );
    }
}

#[test]
fn percent_encoded_hosts_are_accepted_as_typed() {
    assert_eq!(
        normalize_url("ex%41mple.com").unwrap(),
        "https://ex%41mple.com"
    );
    assert_eq!(
        normalize_url("example.com:8080/a").unwrap(),
        "https://example.com:8080/a"
    );
}

#[test]
fn go_tracks_current_url_and_fills_address() {
    let mut viewer = ViewerState::new();
    assert_eq!(viewer.go(Some("example.com")), Some("https://example.com".into()));
    assert_eq!(viewer.current_url(), Some("https://example.com"));
    assert_eq!(viewer.address(), "https://example.com");
    assert_eq!(viewer.message(), None);
}

#[test]
fn invalid_address_keeps_previous_page() {
    let mut viewer = ViewerState::new();
    viewer.go(Some("example.com"));
    viewer.insert_text(" bad host");
    assert_eq!(viewer.go(None), None);
    assert_eq!(viewer.message(), Some("Invalid URL"));
    assert_eq!(viewer.current_url(), Some("https://example.com"));
}

#[test]
fn typed_address_is_used_when_none_given() {
    let mut viewer = ViewerState::new();
    viewer.insert_text("lite.cnn.comx");
    viewer.delete_backward();
    assert_eq!(viewer.go(None), Some("https://lite.cnn.com".into()));
}
