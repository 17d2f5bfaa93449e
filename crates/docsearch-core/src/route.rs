use url::Url;

use crate::error::{Error, Result};

pub const SEARCH_PARAM: &str = "search";

/// Initial free text from a navigation URL's `search` parameter.
/// Accepts absolute URLs as well as site-relative ones like `/search?search=button`.
pub fn initial_query(location: &str) -> Result<Option<String>> {
    let base = Url::parse("http://localhost/").map_err(|e| Error::InvalidRoute(e.to_string()))?;
    let url = Url::options()
        .base_url(Some(&base))
        .parse(location)
        .map_err(|e| Error::InvalidRoute(format!("{}: {}", location, e)))?;
    Ok(url.query_pairs().find(|(key, _)| key == SEARCH_PARAM).map(|(_, value)| value.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_decoded_search_param() {
        assert_eq!(initial_query("/search?search=date%20picker").unwrap().as_deref(), Some("date picker"));
        assert_eq!(initial_query("https://example.com/search?x=1&search=nav+bar").unwrap().as_deref(), Some("nav bar"));
    }

    #[test]
    fn missing_param_is_none() {
        assert_eq!(initial_query("/search").unwrap(), None);
        assert_eq!(initial_query("/search?q=button").unwrap(), None);
    }

    #[test]
    fn empty_param_is_empty_text() {
        assert_eq!(initial_query("/search?search=").unwrap().as_deref(), Some(""));
    }
}
