//! Remote dictionary lookups over HTTP
//!
//! A candidate is looked up as `GET <endpoint><word>`. The word is accepted when
//! the service answers with a 2xx status and the body does not carry the
//! service's "not found" marker. Any other status or transport failure rejects
//! the word for this run; there are no retries.

use super::{Verdict, WordValidator};
use crate::output::log;
use std::io;
use std::time::Duration;

/// Free dictionary API, one JSON document per headword
pub const DEFAULT_ENDPOINT: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

/// Body text the default endpoint returns for unknown words
pub const NOT_FOUND_MARKER: &str = "No Definitions Found";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`RemoteValidator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// URL prefix the word is appended to
    pub endpoint: String,
    /// Body text meaning "no such word" even on a 2xx response
    pub not_found_marker: String,
    /// Upper bound for one whole request, connect to last body byte
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            not_found_marker: NOT_FOUND_MARKER.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl RemoteConfig {
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Verdict of one remote lookup plus the HTTP status, if one was received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    pub verdict: Verdict,
    pub status: Option<u16>,
}

/// Validator that asks a remote dictionary service
///
/// Holds no mutable state, so one instance can serve every worker thread.
pub struct RemoteValidator {
    agent: ureq::Agent,
    config: RemoteConfig,
}

impl RemoteValidator {
    #[must_use]
    pub fn new(config: RemoteConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        Self { agent, config }
    }

    #[must_use]
    pub const fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Look up `word` and report the status code alongside the verdict
    #[must_use]
    pub fn lookup(&self, word: &str) -> Lookup {
        let url = format!("{}{word}", self.config.endpoint);

        match self.agent.get(&url).call() {
            Ok(response) => {
                let status = response.status();
                let verdict = match response.into_string() {
                    Ok(body) => classify(status, &body, &self.config.not_found_marker),
                    Err(e) if is_timeout(&e) => Verdict::Timeout,
                    Err(e) => {
                        log::warn(&format!("reading response for '{word}' failed: {e}"));
                        Verdict::Rejected
                    }
                };
                Lookup {
                    verdict,
                    status: Some(status),
                }
            }
            Err(ureq::Error::Status(status, _)) => Lookup {
                verdict: Verdict::Rejected,
                status: Some(status),
            },
            Err(ureq::Error::Transport(transport)) => {
                let verdict = if transport_timed_out(&transport) {
                    Verdict::Timeout
                } else {
                    log::warn(&format!("lookup of '{word}' failed: {transport}"));
                    Verdict::Rejected
                };
                Lookup {
                    verdict,
                    status: None,
                }
            }
        }
    }
}

impl WordValidator for RemoteValidator {
    fn validate(&self, word: &str) -> Verdict {
        self.lookup(word).verdict
    }

    fn name(&self) -> &str {
        "remote"
    }
}

/// Classify a received response
///
/// # Examples
/// ```
/// use word_squares::validator::Verdict;
/// use word_squares::validator::remote::{NOT_FOUND_MARKER, classify};
///
/// assert_eq!(classify(200, "[{\"word\":\"road\"}]", NOT_FOUND_MARKER), Verdict::Accepted);
/// assert_eq!(classify(200, "No Definitions Found", NOT_FOUND_MARKER), Verdict::Rejected);
/// assert_eq!(classify(404, "", NOT_FOUND_MARKER), Verdict::Rejected);
/// ```
#[must_use]
pub fn classify(status: u16, body: &str, not_found_marker: &str) -> Verdict {
    let success = (200..300).contains(&status);
    let marked_missing = !not_found_marker.is_empty() && body.contains(not_found_marker);
    if success && !marked_missing {
        Verdict::Accepted
    } else {
        Verdict::Rejected
    }
}

fn is_timeout(e: &io::Error) -> bool {
    matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}

fn transport_timed_out(transport: &ureq::Transport) -> bool {
    let mut source = std::error::Error::source(transport);
    while let Some(err) = source {
        if err.downcast_ref::<io::Error>().is_some_and(is_timeout) {
            return true;
        }
        source = err.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread;

    /// Serve `connections` requests, answering each with `respond(path)`
    fn stub_server(connections: usize, respond: fn(&str) -> (u16, String)) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            for stream in listener.incoming().take(connections) {
                let mut stream = stream.unwrap();
                // Each request is answered on its own thread so concurrent
                // clients overlap
                thread::spawn(move || {
                    let path = read_request_path(&mut stream);
                    let (status, body) = respond(&path);
                    let reason = match status {
                        200 => "OK",
                        404 => "Not Found",
                        _ => "Internal Server Error",
                    };
                    let response = format!(
                        "HTTP/1.1 {status} {reason}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = stream.write_all(response.as_bytes());
                });
            }
        });

        format!("http://{addr}/")
    }

    fn read_request_path(stream: &mut TcpStream) -> String {
        let mut request = Vec::new();
        let mut buf = [0u8; 512];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let request = String::from_utf8_lossy(&request);
        request
            .split_whitespace()
            .nth(1)
            .unwrap_or("/")
            .trim_start_matches('/')
            .to_string()
    }

    fn validator(endpoint: String) -> RemoteValidator {
        RemoteValidator::new(
            RemoteConfig::default()
                .with_endpoint(endpoint)
                .with_timeout(Duration::from_secs(5)),
        )
    }

    #[test]
    fn ok_with_definition_is_accepted() {
        let endpoint = stub_server(1, |word| (200, format!("[{{\"word\":\"{word}\"}}]")));
        let lookup = validator(endpoint).lookup("road");
        assert_eq!(lookup.verdict, Verdict::Accepted);
        assert_eq!(lookup.status, Some(200));
    }

    #[test]
    fn ok_with_not_found_marker_is_rejected() {
        let endpoint = stub_server(1, |_| (200, "No Definitions Found".to_string()));
        let lookup = validator(endpoint).lookup("qwzx");
        assert_eq!(lookup.verdict, Verdict::Rejected);
        assert_eq!(lookup.status, Some(200));
    }

    #[test]
    fn not_found_status_is_rejected() {
        let endpoint = stub_server(1, |_| (404, "{\"title\":\"nope\"}".to_string()));
        let lookup = validator(endpoint).lookup("qwzx");
        assert_eq!(lookup.verdict, Verdict::Rejected);
        assert_eq!(lookup.status, Some(404));
    }

    #[test]
    fn server_error_is_rejected() {
        let endpoint = stub_server(1, |_| (500, String::new()));
        assert_eq!(validator(endpoint).validate("road"), Verdict::Rejected);
    }

    #[test]
    fn request_path_carries_the_word() {
        let endpoint = stub_server(2, |word| {
            if word == "boar" {
                (200, "definition".to_string())
            } else {
                (404, String::new())
            }
        });
        let validator = validator(endpoint);
        assert_eq!(validator.validate("boar"), Verdict::Accepted);
        assert_eq!(validator.validate("boat"), Verdict::Rejected);
    }

    #[test]
    fn connection_refused_is_rejected() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let lookup = validator(format!("http://{addr}/")).lookup("road");
        assert_eq!(lookup.verdict, Verdict::Rejected);
        assert_eq!(lookup.status, None);
    }

    #[test]
    fn slow_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let _ = read_request_path(&mut stream);
                thread::sleep(Duration::from_secs(3));
            }
        });

        let validator = RemoteValidator::new(
            RemoteConfig::default()
                .with_endpoint(format!("http://{addr}/"))
                .with_timeout(Duration::from_millis(200)),
        );
        let lookup = validator.lookup("road");
        assert_eq!(lookup.verdict, Verdict::Timeout);
        assert_eq!(lookup.status, None);
    }

    #[test]
    fn classify_requires_success_status() {
        assert_eq!(classify(204, "", NOT_FOUND_MARKER), Verdict::Accepted);
        assert_eq!(classify(301, "", NOT_FOUND_MARKER), Verdict::Rejected);
        assert_eq!(classify(200, "fine", ""), Verdict::Accepted);
    }

    #[test]
    fn default_config_targets_dictionary_api() {
        let config = RemoteConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.not_found_marker, NOT_FOUND_MARKER);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn concurrent_batch_validation_against_server() {
        use crate::core::Grid;
        use crate::search::{Mode, SearchConfig, Solver};

        // Every two-letter path on a 2x2 grid spells a distinct word
        let endpoint = stub_server(12, |word| {
            if word.starts_with('a') {
                (200, format!("[{{\"word\":\"{word}\"}}]"))
            } else {
                (404, String::new())
            }
        });
        let validator = validator(endpoint);
        let grid = Grid::new(&["ab", "cd"]).unwrap();
        let config = SearchConfig::new(2)
            .with_min_word_len(2)
            .with_mode(Mode::Batch)
            .with_threads(4);

        let mut solver = Solver::new(&grid, &config, &validator).unwrap();
        let outcome = solver.run();

        let words: Vec<&str> = outcome.words.entries().map(|e| e.word()).collect();
        assert_eq!(words, ["ab", "ac", "ad"]);
        assert_eq!(outcome.words.total_paths(), 3);
        assert_eq!(outcome.stats.checked, 12);
        assert_eq!(outcome.stats.accepted, 3);
        assert_eq!(outcome.stats.rejected, 9);
        assert_eq!(solver.calls_issued(), 12);
    }
}
