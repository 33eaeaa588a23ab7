//! In-process doubles for the collaborator traits.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use rentshield_ai::{AiError, Analyst, GenerateRequest};

use crate::device::{GeoError, Geolocator, Notifier, Permission, Position};

/// Answers requests from a queue. An empty queue answers with an error.
pub(crate) struct ScriptedAnalyst {
    replies: Mutex<VecDeque<Result<String, AiError>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedAnalyst {
    pub(crate) fn replies<I>(replies: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| Ok(r.into())).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Prompts seen so far, oldest first.
    pub(crate) fn prompts(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Analyst for ScriptedAnalyst {
    async fn generate(&self, request: &GenerateRequest<'_>) -> Result<String, AiError> {
        self.calls.lock().unwrap().push(request.prompt.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AiError::Other("script exhausted".into())))
    }
}

pub(crate) struct StubGeolocator(Result<Position, GeoError>);

impl StubGeolocator {
    pub(crate) fn failing(error: GeoError) -> Self {
        Self(Err(error))
    }
}

#[async_trait]
impl Geolocator for StubGeolocator {
    async fn current_position(&self) -> Result<Position, GeoError> {
        self.0.clone()
    }
}

/// Answers every permission prompt the same way and records what was shown.
pub(crate) struct RecordingNotifier {
    answer: Permission,
    prompts: Mutex<usize>,
    shown: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub(crate) fn answering(answer: Permission) -> Self {
        Self {
            answer,
            prompts: Mutex::new(0),
            shown: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn prompts(&self) -> usize {
        *self.prompts.lock().unwrap()
    }

    pub(crate) fn shown(&self) -> Vec<(String, String)> {
        self.shown.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn request_permission(&self) -> Permission {
        *self.prompts.lock().unwrap() += 1;
        self.answer
    }

    fn notify(&self, title: &str, body: &str) {
        self.shown
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
    }
}
