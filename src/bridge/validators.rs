use super::{Error, Result};
use ring::constant_time::verify_slices_are_equal;

/// Ensure that the authorization header carries the configured bearer token
pub fn bearer(header: Option<&str>, token: Option<&str>) -> Result<()> {
    // Nothing can authenticate against an unset token
    let token = token
        .filter(|t| !t.is_empty())
        .ok_or(Error::Unauthorized)?;
    let header = header.ok_or(Error::Unauthorized)?;

    let expected = format!("Bearer {}", token);
    verify_slices_are_equal(header.as_bytes(), expected.as_bytes())
        .map_err(|_| Error::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::bearer;

    #[test]
    fn validate_bearer_token() {
        assert!(bearer(Some("Bearer the-amazing-token"), Some("the-amazing-token")).is_ok());
    }

    #[test]
    fn reject_mismatched_token() {
        assert!(bearer(Some("Bearer wrong"), Some("the-amazing-token")).is_err());
        assert!(bearer(Some("Bearer the-amazing-token "), Some("the-amazing-token")).is_err());
        assert!(bearer(Some("the-amazing-token"), Some("the-amazing-token")).is_err());
    }

    #[test]
    fn scheme_is_case_sensitive() {
        assert!(bearer(Some("bearer the-amazing-token"), Some("the-amazing-token")).is_err());
    }

    #[test]
    fn reject_missing_header() {
        assert!(bearer(None, Some("the-amazing-token")).is_err());
    }

    #[test]
    fn reject_when_token_unset() {
        assert!(bearer(Some("Bearer "), Some("")).is_err());
        assert!(bearer(Some("Bearer "), None).is_err());
        assert!(bearer(None, None).is_err());
    }
}
