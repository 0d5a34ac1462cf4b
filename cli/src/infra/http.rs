//! Shared ureq plumbing for manifest and archive requests.

use std::time::Duration;

/// Connection establishment limit; transfers themselves are not bounded.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Issue a GET tagged with the launcher's client identifier.
///
/// Non-2xx responses are errors. The error is a one-line description
/// suitable for an operator log.
pub(crate) fn get(url: &str, user_agent: &str) -> Result<ureq::Response, String> {
    tracing::debug!(url, user_agent, "GET");
    ureq::AgentBuilder::new()
        .timeout_connect(CONNECT_TIMEOUT)
        .build()
        .get(url)
        .set("User-Agent", user_agent)
        .call()
        .map_err(describe)
}

fn describe(err: ureq::Error) -> String {
    match err {
        ureq::Error::Status(code, response) => {
            format!("HTTP {code} {}", response.status_text())
        }
        ureq::Error::Transport(transport) => transport.to_string(),
    }
}
