use hubclean_hubspot::FetchError;
use hubclean_slack::DispatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Terminal state of a run: it either completed or failed with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed(String),
}

impl Outcome {
    #[must_use]
    pub fn from_result<T>(result: &Result<T, PipelineError>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}
