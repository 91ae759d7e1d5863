use std::time::Duration;

use axum::body::Body;
use http_body_util::BodyExt;

/// One parsed `text/event-stream` unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    pub event: String,
    pub data: String,
}

impl SseEvent {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.data).expect("event data is JSON")
    }
}

/// Incremental reader over a streaming response body
pub struct SseReader {
    body: Body,
    buffer: String,
}

impl SseReader {
    pub fn new(body: Body) -> Self {
        Self {
            body,
            buffer: String::new(),
        }
    }

    /// Next complete event; panics if none arrives within two seconds
    pub async fn next_event(&mut self) -> SseEvent {
        tokio::time::timeout(Duration::from_secs(2), self.read_event())
            .await
            .expect("timed out waiting for event")
            .expect("stream ended before next event")
    }

    /// `None` if the stream ends, `Some` if an event arrives first
    pub async fn read_event(&mut self) -> Option<SseEvent> {
        loop {
            if let Some(end) = self.buffer.find("\n\n") {
                let raw: String = self.buffer.drain(..end + 2).collect();
                return Some(parse_event(&raw));
            }

            let frame = self.body.frame().await?.expect("body frame");
            if let Ok(data) = frame.into_data() {
                self.buffer
                    .push_str(std::str::from_utf8(&data).expect("utf-8 body"));
            }
        }
    }
}

fn parse_event(raw: &str) -> SseEvent {
    let mut event = String::new();
    let mut data = Vec::new();

    for line in raw.lines() {
        if let Some(value) = line.strip_prefix("event:") {
            event = value.trim_start().to_string();
        } else if let Some(value) = line.strip_prefix("data:") {
            data.push(value.trim_start().to_string());
        }
    }

    SseEvent {
        event,
        data: data.join("\n"),
    }
}
