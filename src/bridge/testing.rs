use crate::github::{Forwarder, Outcome, Result};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::Mutex;

/// A call received by the [`Recorder`]
#[derive(Debug, PartialEq)]
pub enum Call {
    Comment {
        repository: String,
        issue: String,
        token: String,
        payload: Value,
    },
    Dispatch {
        repository: String,
        token: String,
        payload: Value,
    },
}

/// Records every forwarded request and answers with a fixed outcome
pub struct Recorder {
    outcome: Outcome,
    calls: Mutex<Vec<Call>>,
}

impl Recorder {
    pub fn respond(status: u16, body: &str) -> Recorder {
        Recorder {
            outcome: Outcome {
                status,
                body: body.to_owned(),
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }
}

#[async_trait]
impl Forwarder for Recorder {
    async fn comment(
        &self,
        repository: &str,
        issue: &str,
        token: &str,
        body: &str,
    ) -> Result<Outcome> {
        self.calls.lock().unwrap().push(Call::Comment {
            repository: repository.to_owned(),
            issue: issue.to_owned(),
            token: token.to_owned(),
            payload: json!({ "body": body }),
        });
        Ok(self.outcome.clone())
    }

    async fn dispatch(
        &self,
        repository: &str,
        token: &str,
        event_type: &str,
        text: &str,
        meta: &Map<String, Value>,
    ) -> Result<Outcome> {
        self.calls.lock().unwrap().push(Call::Dispatch {
            repository: repository.to_owned(),
            token: token.to_owned(),
            payload: json!({
                "event_type": event_type,
                "client_payload": { "text": text, "meta": meta },
            }),
        });
        Ok(self.outcome.clone())
    }
}
