use std::borrow::Cow;
use std::collections::HashMap;

/// One unit of work taken from a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl Event {
    #[must_use]
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self {
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Body decoded as UTF-8; invalid sequences become U+FFFD.
    #[must_use]
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Acknowledgement returned by the queue for a delivered message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendReceipt {
    pub message_id: Option<String>,
    pub md5_of_body: Option<String>,
}
