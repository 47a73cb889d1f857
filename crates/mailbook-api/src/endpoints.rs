//! Endpoint URL construction.
//!
//! Path parameters are always pushed as whole segments so reserved
//! characters (slashes, spaces, `@`) end up percent-encoded instead of
//! splitting the path.

use url::Url;

use crate::error::{Error, Result};

/// Joins `segments` onto `base`, percent-encoding each one.
fn with_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // parse_base only admits http(s) URLs, which can always be a base,
    // so this branch is always taken.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty();
        for segment in segments {
            path.push(segment);
        }
    }
    url
}

/// `GET /clientes/guardar/{dni}/{nombre}/{apellido}`
pub fn create_customer(base: &Url, key: &str, first_name: &str, last_name: &str) -> Url {
    with_segments(base, &["clientes", "guardar", key, first_name, last_name])
}

/// `GET /clientes/listartodos`
pub fn list_customers(base: &Url) -> Url {
    with_segments(base, &["clientes", "listartodos"])
}

/// `GET /clientes/buscarpordni?dni={dni}`
pub fn find_customer(base: &Url, key: &str) -> Url {
    let mut url = with_segments(base, &["clientes", "buscarpordni"]);
    url.query_pairs_mut().append_pair("dni", key);
    url
}

/// `DELETE /clientes/borrar/{dni}`
pub fn delete_customer(base: &Url, key: &str) -> Url {
    with_segments(base, &["clientes", "borrar", key])
}

/// `GET /correos/guardar/{dni}/{correo}`
pub fn create_email(base: &Url, key: &str, address: &str) -> Url {
    with_segments(base, &["correos", "guardar", key, address])
}

/// `GET /correos/listartodos`
pub fn list_emails(base: &Url) -> Url {
    with_segments(base, &["correos", "listartodos"])
}

/// `POST /correos/actualizar/{idCorreo}/{correo}`
pub fn update_email(base: &Url, id: u32, address: &str) -> Url {
    with_segments(base, &["correos", "actualizar", &id.to_string(), address])
}

/// `DELETE /correos/borrar/{idCorreo}`
pub fn delete_email(base: &Url, id: u32) -> Url {
    with_segments(base, &["correos", "borrar", &id.to_string()])
}

/// Parses and normalizes a base URL string.
///
/// # Errors
///
/// Returns an error if `base` is not a valid URL, or not an http(s) URL
/// that endpoint paths can be joined onto. The latter catches typos like
/// `localhost:8083`, which parses with scheme `localhost` and would
/// otherwise send every request to a truncated URL.
pub fn parse_base(base: &str) -> Result<Url> {
    let url = Url::parse(base)?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::UnsupportedBase(url.into()));
    }
    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:8083").unwrap()
    }

    #[test]
    fn create_customer_path() {
        let url = create_customer(&base(), "12345678", "Ana", "Li");
        assert_eq!(
            url.as_str(),
            "http://localhost:8083/clientes/guardar/12345678/Ana/Li"
        );
    }

    #[test]
    fn segments_are_percent_encoded() {
        let url = create_email(&base(), "1", "a b@c.com");
        assert_eq!(
            url.as_str(),
            "http://localhost:8083/correos/guardar/1/a%20b@c.com"
        );
    }

    #[test]
    fn slash_in_segment_does_not_split_path() {
        let url = create_customer(&base(), "1/2", "A", "B");
        assert_eq!(
            url.as_str(),
            "http://localhost:8083/clientes/guardar/1%2F2/A/B"
        );
    }

    #[test]
    fn base_with_path_prefix_is_preserved() {
        let api = Url::parse("http://localhost:3000/api/").unwrap();
        let url = list_emails(&api);
        assert_eq!(url.as_str(), "http://localhost:3000/api/correos/listartodos");
    }

    #[test]
    fn delete_email_path() {
        let url = delete_email(&base(), 5);
        assert_eq!(url.as_str(), "http://localhost:8083/correos/borrar/5");
    }

    #[test]
    fn parse_base_rejects_missing_scheme_typo() {
        // "localhost:8083" parses with scheme "localhost" and no host;
        // joining segments onto it would silently produce garbage URLs.
        assert!(matches!(
            parse_base("localhost:8083"),
            Err(Error::UnsupportedBase(_))
        ));
        assert!(matches!(
            parse_base("mailto:x@y.com"),
            Err(Error::UnsupportedBase(_))
        ));
        assert!(matches!(parse_base("ftp://host/"), Err(Error::UnsupportedBase(_))));
    }

    #[test]
    fn parse_base_accepts_http_and_https() {
        assert!(parse_base("http://localhost:8083").is_ok());
        assert!(parse_base("https://backend.example.com/api/").is_ok());
    }

    #[test]
    fn find_customer_query() {
        let url = find_customer(&base(), "12345678");
        assert_eq!(
            url.as_str(),
            "http://localhost:8083/clientes/buscarpordni?dni=12345678"
        );
    }
}
