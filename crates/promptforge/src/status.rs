//! User-visible status of the active generation or enhancement action.

use serde::{Deserialize, Serialize};

/// Exactly one value holds at any time for the active action.
///
/// Transitions: `Idle --start--> Loading --> Success | Error`; a new start
/// from `Success` or `Error` returns to `Loading`. There is no cancel
/// transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl ApiStatus {
    /// Marks a new action as started, clearing any prior terminal state.
    pub fn start(&mut self) {
        *self = ApiStatus::Loading;
    }

    pub fn succeed(&mut self) {
        *self = ApiStatus::Success;
    }

    pub fn fail(&mut self) {
        *self = ApiStatus::Error;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ApiStatus::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restart_from_terminal_states_returns_to_loading() {
        let mut status = ApiStatus::Idle;
        status.start();
        assert!(status.is_loading());

        status.succeed();
        assert_eq!(status, ApiStatus::Success);
        status.start();
        assert!(status.is_loading());

        status.fail();
        assert_eq!(status, ApiStatus::Error);
        status.start();
        assert!(status.is_loading());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ApiStatus::Loading).unwrap(),
            r#""loading""#
        );
    }
}
