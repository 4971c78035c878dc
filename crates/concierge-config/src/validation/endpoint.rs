//! Validation for the `[endpoint]` section.

use crate::schema::ConciergeConfig;

use super::helpers::validate_range;

pub(crate) fn validate_endpoint(errors: &mut Vec<String>, config: &ConciergeConfig) {
    let endpoint = &config.endpoint;

    let url = endpoint.url.trim();
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));
    match rest {
        Some(host_and_path) if !host_and_path.is_empty() && !host_and_path.starts_with('/') => {}
        _ => errors.push(format!(
            "endpoint.url = {:?} must be an absolute http(s) URL",
            endpoint.url
        )),
    }

    validate_range(errors, "endpoint.timeout_secs", endpoint.timeout_secs, 1, 300);
    validate_range(
        errors,
        "endpoint.connect_timeout_secs",
        endpoint.connect_timeout_secs,
        1,
        60,
    );
}
