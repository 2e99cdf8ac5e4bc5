use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

static DEFAULT_EVENT_TYPE: &str = "jinn_trigger";

/// An inbound request to be relayed to GitHub
#[derive(Debug, Deserialize)]
pub struct Request {
    pub text: String,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    event_type: Option<String>,
    #[serde(default)]
    client_meta: Option<Map<String, Value>>,
}

impl Request {
    /// The event type to dispatch, falling back to the default when unset
    pub fn event_type(&self) -> &str {
        match self.event_type.as_deref() {
            Some(event_type) if !event_type.is_empty() => event_type,
            _ => DEFAULT_EVENT_TYPE,
        }
    }

    /// Consume the request, returning the text and the metadata to forward
    pub fn into_parts(self) -> (String, Map<String, Value>) {
        (self.text, self.client_meta.unwrap_or_default())
    }
}

/// Where a request gets forwarded to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Comment on the configured issue
    #[default]
    Issue,
    /// Trigger a repository dispatch event
    Dispatch,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::Dispatch => "dispatch",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Anything other than "dispatch", including null, falls back to commenting
impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> Result<Mode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref() {
            Some("dispatch") => Mode::Dispatch,
            _ => Mode::Issue,
        })
    }
}

/// The normalized result of forwarding a request
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Response {
    pub ok: bool,
    pub status: u16,
    pub body: Option<String>,
}
