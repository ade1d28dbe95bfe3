use crate::jwt::TokenError;

pub const BEARER_SCHEME: &str = "Bearer";

/// Extract the token from an `Authorization` header value.
///
/// The value must be exactly two tokens separated by a single space, the
/// first being `Bearer`. Anything else (missing header, empty value, other
/// schemes, extra segments, an empty token) is rejected.
///
/// # Errors
/// * `MalformedAuthHeader` - Header does not have the form `Bearer <token>`
pub fn extract_bearer(header: Option<&str>) -> Result<&str, TokenError> {
    let header = header.ok_or(TokenError::MalformedAuthHeader)?;

    let parts: Vec<&str> = header.split(' ').collect();
    match parts.as_slice() {
        [scheme, token] if *scheme == BEARER_SCHEME && !token.is_empty() => Ok(*token),
        _ => Err(TokenError::MalformedAuthHeader),
    }
}
