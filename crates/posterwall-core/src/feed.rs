//! Feed state for the collection gallery
//!
//! `CollectionsFeed` owns the displayed collections list and arbitrates
//! which fetch result is allowed to become state. Each fetch is keyed by a
//! `RequestToken`; a response whose token is no longer the latest issued
//! one is stale and is discarded wholesale, so rapid URL changes can never
//! apply an out-of-order response.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::{FetchError, FetchResult};
use crate::types::MovieCollection;

/// Key identifying one fetch attempt.
///
/// Tokens are issued in monotonically increasing order; only the most
/// recently issued token may resolve into state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// What `CollectionsFeed::resolve` did with a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Success from the current request; collections replaced wholesale
    Applied,
    /// Failure from the current request; previous collections kept
    Failed,
    /// Result belonged to a superseded request; ignored entirely
    Stale,
}

/// What the gallery shows when a fetch fails.
///
/// Either way the previous collections stay on screen (empty on first
/// load); the policy only controls whether the failure itself is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureVisibility {
    /// Log the failure and render nothing about it
    #[default]
    Silent,
    /// Log the failure and render a one-line banner above the gallery
    Banner,
}

impl fmt::Display for FailureVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureVisibility::Silent => write!(f, "silent"),
            FailureVisibility::Banner => write!(f, "banner"),
        }
    }
}

impl FromStr for FailureVisibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "silent" => Ok(FailureVisibility::Silent),
            "banner" => Ok(FailureVisibility::Banner),
            other => Err(format!(
                "unknown failure visibility {other:?} (expected \"silent\" or \"banner\")"
            )),
        }
    }
}

/// Token-guarded holder of the displayed collections list
#[derive(Debug, Default)]
pub struct CollectionsFeed {
    collections: Vec<MovieCollection>,
    latest: u64,
    last_error: Option<FetchError>,
}

impl CollectionsFeed {
    /// Empty feed; nothing fetched yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch attempt, superseding any still in flight.
    pub fn begin_request(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Apply the result of a fetch attempt.
    ///
    /// Stale results are ignored in both directions: a late success may not
    /// overwrite a newer request's state, and a late failure may not mark a
    /// newer request as failed.
    pub fn resolve(
        &mut self,
        token: RequestToken,
        result: FetchResult<Vec<MovieCollection>>,
    ) -> ResolveOutcome {
        if token.0 != self.latest {
            warn!(
                token = token.0,
                latest = self.latest,
                "discarding stale collections response"
            );
            return ResolveOutcome::Stale;
        }
        match result {
            Ok(collections) => {
                self.collections = collections;
                self.last_error = None;
                ResolveOutcome::Applied
            }
            Err(err) => {
                self.last_error = Some(err);
                ResolveOutcome::Failed
            }
        }
    }

    /// Currently displayed collections, in received order.
    pub fn collections(&self) -> &[MovieCollection] {
        &self.collections
    }

    /// Error from the most recent settled request, if it failed.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(title: &str) -> MovieCollection {
        MovieCollection {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_success_replaces_state_wholesale() {
        let mut feed = CollectionsFeed::new();

        let token = feed.begin_request();
        let outcome = feed.resolve(token, Ok(vec![collection("Action"), collection("Drama")]));
        assert_eq!(outcome, ResolveOutcome::Applied);
        assert_eq!(feed.collections().len(), 2);
        assert_eq!(feed.collections()[0].title, "Action");

        let token = feed.begin_request();
        feed.resolve(token, Ok(vec![collection("Horror")]));
        // Replaced, not merged
        assert_eq!(feed.collections().len(), 1);
        assert_eq!(feed.collections()[0].title, "Horror");
    }

    #[test]
    fn test_failure_keeps_previous_state() {
        let mut feed = CollectionsFeed::new();

        let token = feed.begin_request();
        feed.resolve(token, Ok(vec![collection("Action")]));

        let token = feed.begin_request();
        let outcome = feed.resolve(
            token,
            Err(FetchError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            }),
        );
        assert_eq!(outcome, ResolveOutcome::Failed);
        assert_eq!(feed.collections().len(), 1);
        assert_eq!(feed.collections()[0].title, "Action");
        assert!(feed.last_error().is_some());
    }

    #[test]
    fn test_first_load_failure_leaves_feed_empty() {
        let mut feed = CollectionsFeed::new();

        let token = feed.begin_request();
        feed.resolve(
            token,
            Err(FetchError::Status {
                status: reqwest::StatusCode::BAD_GATEWAY,
            }),
        );
        assert!(feed.collections().is_empty());
        assert!(feed.last_error().is_some());
    }

    #[test]
    fn test_stale_success_is_discarded() {
        let mut feed = CollectionsFeed::new();

        let old = feed.begin_request();
        let new = feed.begin_request();

        feed.resolve(new, Ok(vec![collection("Current")]));
        let outcome = feed.resolve(old, Ok(vec![collection("Stale")]));

        assert_eq!(outcome, ResolveOutcome::Stale);
        assert_eq!(feed.collections()[0].title, "Current");
    }

    #[test]
    fn test_stale_failure_does_not_mark_newer_request_failed() {
        let mut feed = CollectionsFeed::new();

        let old = feed.begin_request();
        let new = feed.begin_request();

        feed.resolve(new, Ok(vec![collection("Current")]));
        let outcome = feed.resolve(
            old,
            Err(FetchError::Status {
                status: reqwest::StatusCode::GATEWAY_TIMEOUT,
            }),
        );

        assert_eq!(outcome, ResolveOutcome::Stale);
        assert!(feed.last_error().is_none());
        assert_eq!(feed.collections()[0].title, "Current");
    }

    #[test]
    fn test_success_clears_recorded_error() {
        let mut feed = CollectionsFeed::new();

        let token = feed.begin_request();
        feed.resolve(
            token,
            Err(FetchError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            }),
        );
        assert!(feed.last_error().is_some());

        let token = feed.begin_request();
        feed.resolve(token, Ok(vec![collection("Recovered")]));
        assert!(feed.last_error().is_none());
    }

    #[test]
    fn test_empty_array_applies_as_zero_sections() {
        let mut feed = CollectionsFeed::new();

        let token = feed.begin_request();
        feed.resolve(token, Ok(vec![collection("Action")]));

        let token = feed.begin_request();
        let outcome = feed.resolve(token, Ok(vec![]));
        assert_eq!(outcome, ResolveOutcome::Applied);
        assert!(feed.collections().is_empty());
        assert!(feed.last_error().is_none());
    }

    #[test]
    fn test_failure_visibility_round_trip() {
        assert_eq!(
            "silent".parse::<FailureVisibility>().unwrap(),
            FailureVisibility::Silent
        );
        assert_eq!(
            "banner".parse::<FailureVisibility>().unwrap(),
            FailureVisibility::Banner
        );
        assert!("loud".parse::<FailureVisibility>().is_err());
        assert_eq!(FailureVisibility::Banner.to_string(), "banner");
        assert_eq!(FailureVisibility::default(), FailureVisibility::Silent);
    }
}
