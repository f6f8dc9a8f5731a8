use reqwest::header::HeaderMap;
use showcase_core::model::SourceError;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub(crate) const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your internet connection.";

pub(crate) fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
}

pub(crate) fn ratelimit_exhausted(headers: &HeaderMap) -> bool {
    header_u64(headers, "x-ratelimit-remaining") == Some(0)
}

/// `x-ratelimit-reset` (epoch seconds) rendered as RFC 3339 UTC.
pub(crate) fn ratelimit_reset_label(headers: &HeaderMap) -> Option<String> {
    let reset = header_u64(headers, "x-ratelimit-reset")?;
    let reset = i64::try_from(reset).ok()?;
    OffsetDateTime::from_unix_timestamp(reset)
        .ok()?
        .format(&Rfc3339)
        .ok()
}

pub(crate) fn is_network_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}

/// Transport failures become network errors; anything else passes through.
pub(crate) fn classify_transport(err: reqwest::Error) -> SourceError {
    if is_network_error(&err) {
        return SourceError::network(NETWORK_ERROR_MESSAGE);
    }
    SourceError::Unknown(err.into())
}
