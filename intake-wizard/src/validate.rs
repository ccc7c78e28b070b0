/// Check a value against the standard `local@domain.tld` shape.
///
/// Same acceptance as the usual `^[^\s@]+@[^\s@]+\.[^\s@]+$` form check:
/// exactly one `@`, no whitespace, and a dot in the domain with a non-empty
/// tail. Not a full RFC 5321 parse; this gates typos, not deliverability.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}
