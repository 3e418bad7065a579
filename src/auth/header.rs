use super::AuthError;
use http::header::AUTHORIZATION;
use http::HeaderMap;

/// Pulls the bearer credential out of the Authorization header.
///
/// Pure parsing: the scheme must be `Bearer` (case-insensitive) followed by
/// exactly one token segment.
pub(super) fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers.get(AUTHORIZATION).ok_or(AuthError::MissingHeader)?;
    let value = value
        .to_str()
        .map_err(|_| AuthError::MalformedHeader("Authorization header is not valid text"))?;

    let mut parts = value.split_whitespace();
    let scheme = parts.next().unwrap_or("");
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MalformedHeader(
            "Authorization header must start with \"Bearer\"",
        ));
    }
    let token = parts
        .next()
        .ok_or(AuthError::MalformedHeader("Token not found"))?;
    if parts.next().is_some() {
        return Err(AuthError::MalformedHeader(
            "Authorization header must be a bearer token",
        ));
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(
            extract_bearer_token(&HeaderMap::new()),
            Err(AuthError::MissingHeader)
        );
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with("Basic abc123");
        let result = extract_bearer_token(&headers);
        assert!(matches!(result, Err(AuthError::MalformedHeader(_))));
    }

    #[test]
    fn test_scheme_without_token() {
        let headers = headers_with("Bearer");
        let result = extract_bearer_token(&headers);
        assert!(matches!(result, Err(AuthError::MalformedHeader(_))));
    }

    #[test]
    fn test_too_many_segments() {
        let headers = headers_with("Bearer abc def");
        let result = extract_bearer_token(&headers);
        assert!(matches!(result, Err(AuthError::MalformedHeader(_))));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert_eq!(
            extract_bearer_token(&headers_with("bearer abc.def.ghi")),
            Ok("abc.def.ghi")
        );
        assert_eq!(
            extract_bearer_token(&headers_with("BEARER abc.def.ghi")),
            Ok("abc.def.ghi")
        );
    }
}
