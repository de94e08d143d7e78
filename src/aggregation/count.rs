use luma_api::{ApiError, ListEnvelope};

/// Normalized result of one resource fetch.
///
/// A failed fetch becomes `succeeded = false, count = 0, items = []`; the error
/// itself is only logged by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceResult<T> {
    pub succeeded: bool,
    pub count: u64,
    pub items: Vec<T>,
}

impl<T> ResourceResult<T> {
    pub fn failed() -> Self {
        Self {
            succeeded: false,
            count: 0,
            items: Vec::new(),
        }
    }

    pub fn from_envelope(envelope: ListEnvelope<T>) -> Self {
        let count = extract_count(&envelope);
        Self {
            succeeded: true,
            count,
            items: envelope.into_items(),
        }
    }

    pub fn from_outcome(outcome: Result<ListEnvelope<T>, ApiError>) -> Self {
        match outcome {
            Ok(envelope) => Self::from_envelope(envelope),
            Err(_) => Self::failed(),
        }
    }
}

/// The count a list envelope stands for.
///
/// Tried in order: a non-zero `count`, a non-empty `data` length, then `0`.
/// A zero `count` alongside items yields the item count.
pub fn extract_count<T>(envelope: &ListEnvelope<T>) -> u64 {
    let explicit = envelope.count.filter(|count| *count > 0);
    let listed = envelope
        .data
        .as_ref()
        .map(|items| items.len() as u64)
        .filter(|len| *len > 0);
    explicit.or(listed).unwrap_or(0)
}
