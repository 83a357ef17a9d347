use serde::Serialize;

/// Acknowledgement returned by append-only endpoints.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub status: &'static str,
    pub id: i64,
}

impl Ack {
    pub fn ok(id: i64) -> Self {
        Self { status: "ok", id }
    }
}
