//! User-Agent header handling
//!
//! Every request identifies the calling service instance through the
//! `User-Agent` header so the service can attribute traffic.

use crate::error::SlsError;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

/// Set the `User-Agent` header to the given service instance name.
///
/// Replaces any existing value. An empty instance name leaves the headers
/// untouched so the transport's own default applies.
pub fn set_user_agent(headers: &mut HeaderMap, instance_name: &str) -> Result<(), SlsError> {
    if instance_name.is_empty() {
        return Ok(());
    }

    let value = HeaderValue::from_str(instance_name).map_err(|e| {
        SlsError::Construction(format!("invalid instance name {instance_name:?} for User-Agent: {e}"))
    })?;
    headers.insert(USER_AGENT, value);
    Ok(())
}
