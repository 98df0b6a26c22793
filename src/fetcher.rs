//! Authenticated download of a puzzle input

use log::debug;

use crate::error::AppError;
use crate::puzzle::Puzzle;

pub(crate) trait Fetch {
    /// Raw body of the puzzle's input, authenticated with `token`
    fn fetch(&self, puzzle: Puzzle, token: &[u8]) -> Result<Vec<u8>, AppError>;
}

pub(crate) struct UreqFetcher {
    agent: ureq::Agent,
    base_url: String,
}

impl UreqFetcher {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        // No timeout, no retries and no proxy from the environment;
        // statuses are checked below.
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .proxy(None)
            .build()
            .into();
        Self {
            agent,
            base_url: base_url.into(),
        }
    }
}

impl Fetch for UreqFetcher {
    fn fetch(&self, puzzle: Puzzle, token: &[u8]) -> Result<Vec<u8>, AppError> {
        let url = puzzle.input_url(&self.base_url);
        debug!("GET {url}");

        let response = self
            .agent
            .get(&url)
            .header("Cookie", cookie_value(token))
            .call()
            .map_err(|source| AppError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let mut body = response.into_body();
        let bytes = body
            .read_to_vec()
            .map_err(|source| AppError::Network {
                url: url.clone(),
                source,
            })?;
        debug!("{url} returned {} bytes", bytes.len());
        Ok(bytes)
    }
}

/// `session=<token>` with trailing line terminators removed, since a header
/// value cannot carry them. Everything else is kept as-is.
pub(crate) fn cookie_value(token: &[u8]) -> Vec<u8> {
    let end = token
        .iter()
        .rposition(|&b| b != b'\n' && b != b'\r')
        .map_or(0, |i| i + 1);
    let mut value = b"session=".to_vec();
    value.extend_from_slice(&token[..end]);
    value
}
