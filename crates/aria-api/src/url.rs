//! Request URL construction.
//!
//! Pure helpers so URL shape is unit-testable apart from the failover
//! walk.

use url::Url;

use crate::error::ApiResult;

/// Join a mirror base URL, a request path, and query parameters.
///
/// Mirror bases are bare origins; the path replaces whatever the base
/// carries. Query values are percent-encoded by the `url` crate.
pub(crate) fn build_request_url(
    base_url: &str,
    path: &str,
    params: &[(&str, String)],
) -> ApiResult<Url> {
    let mut url = Url::parse(base_url)?;
    url.set_path(path);

    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_path_and_query() {
        let url = build_request_url(
            "https://kraken.squid.wtf",
            "/search/",
            &[("s", "artist name".to_string())],
        )
        .unwrap();

        assert_eq!(
            url.as_str(),
            "https://kraken.squid.wtf/search/?s=artist+name"
        );
    }

    #[test]
    fn test_no_params_leaves_query_absent() {
        let url = build_request_url("https://zeus.squid.wtf", "/album/tracks", &[]).unwrap();
        assert_eq!(url.as_str(), "https://zeus.squid.wtf/album/tracks");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_multiple_params_preserve_order() {
        let url = build_request_url(
            "https://maus.qqdl.site",
            "/track/",
            &[("id", "42".to_string()), ("quality", "LOSSLESS".to_string())],
        )
        .unwrap();

        assert_eq!(
            url.as_str(),
            "https://maus.qqdl.site/track/?id=42&quality=LOSSLESS"
        );
    }

    #[test]
    fn test_invalid_base_is_an_error() {
        assert!(build_request_url("not a url", "/search/", &[]).is_err());
    }
}
