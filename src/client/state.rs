//! View state of a single search interaction.

use std::process::ExitCode;

use tracing::debug;

use super::ClientError;
use crate::lookup::CompanyInfo;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a company name";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch company information. Please try again.";

/// What the client is currently showing. Exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading {
        query: String,
    },
    Result(CompanyInfo),
    Error {
        message: String,
    },
}

impl ViewState {
    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error { .. })
    }
}

/// Drives [`ViewState`] transitions for one input/response cycle.
#[derive(Debug, Default)]
pub struct SearchSession {
    state: ViewState,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Process exit status for the current state: failure when it is an error.
    pub fn exit_code(&self) -> ExitCode {
        if self.state.is_error() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }

    /// Validate user input.
    ///
    /// Returns the trimmed query to send, or `None` when the input is blank
    /// and the session moved to the error state instead.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        let query = input.trim();
        if query.is_empty() {
            self.state = ViewState::Error {
                message: EMPTY_INPUT_MESSAGE.to_string(),
            };
            return None;
        }

        self.state = ViewState::Loading {
            query: query.to_string(),
        };
        Some(query.to_string())
    }

    /// Apply the outcome of the request started by [`submit`](Self::submit).
    ///
    /// Outcomes arriving while no request is in flight are ignored.
    pub fn complete(&mut self, outcome: Result<CompanyInfo, ClientError>) {
        if !matches!(self.state, ViewState::Loading { .. }) {
            debug!("Ignoring response received outside the loading state");
            return;
        }

        self.state = match outcome {
            Ok(info) => ViewState::Result(info),
            Err(e) => {
                debug!("Search failed: {}", e);
                ViewState::Error {
                    message: FETCH_FAILED_MESSAGE.to_string(),
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::LookupStatus;

    #[test]
    fn test_blank_input_is_rejected_locally() {
        let mut session = SearchSession::new();
        assert_eq!(session.state(), &ViewState::Idle);

        for input in ["", "   ", "\t\n"] {
            assert!(session.submit(input).is_none());
            assert_eq!(
                session.state(),
                &ViewState::Error {
                    message: EMPTY_INPUT_MESSAGE.to_string()
                }
            );
        }
    }

    #[test]
    fn test_submit_then_result() {
        let mut session = SearchSession::new();
        assert_eq!(session.submit("  Foo Bar Inc ").as_deref(), Some("Foo Bar Inc"));
        assert_eq!(
            session.state(),
            &ViewState::Loading {
                query: "Foo Bar Inc".to_string()
            }
        );

        let info = CompanyInfo::not_found("Foo Bar Inc");
        session.complete(Ok(info.clone()));
        assert_eq!(session.state(), &ViewState::Result(info));
    }

    #[test]
    fn test_transport_failure_is_distinct_from_not_found() {
        let mut session = SearchSession::new();
        session.submit("Tesla");
        session.complete(Err(ClientError::Status(500)));

        assert_eq!(
            session.state(),
            &ViewState::Error {
                message: FETCH_FAILED_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_exit_code_follows_final_state() {
        let failure = format!("{:?}", ExitCode::FAILURE);
        let success = format!("{:?}", ExitCode::SUCCESS);

        let mut session = SearchSession::new();
        assert!(!session.state().is_error());
        assert_eq!(format!("{:?}", session.exit_code()), success);

        session.submit("  ");
        assert!(session.state().is_error());
        assert_eq!(format!("{:?}", session.exit_code()), failure);

        session.submit("Tesla");
        session.complete(Err(ClientError::Transport("connection refused".to_string())));
        assert!(session.state().is_error());
        assert_eq!(format!("{:?}", session.exit_code()), failure);

        session.submit("Foo Bar Inc");
        session.complete(Ok(CompanyInfo::not_found("Foo Bar Inc")));
        assert!(!session.state().is_error());
        assert_eq!(format!("{:?}", session.exit_code()), success);
    }

    #[test]
    fn test_stale_outcome_is_ignored() {
        let mut session = SearchSession::new();
        session.complete(Ok(CompanyInfo::not_found("late")));
        assert_eq!(session.state(), &ViewState::Idle);

        session.submit("Tesla");
        session.complete(Ok(CompanyInfo::not_found("tesla")));
        session.complete(Err(ClientError::Status(502)));
        assert!(matches!(
            session.state(),
            ViewState::Result(info) if info.status == LookupStatus::NotFound
        ));
    }
}
