use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("SerializationError: {0}")]
    SerializationError(#[source] serde_json::Error),

    #[error("Kube Error: {0}")]
    KubeError(#[source] kube::Error),

    #[error("Cancelled: {0}")]
    Cancelled(String),

    #[error("Deadline Exceeded: {0}")]
    DeadlineExceeded(String),

    /// NB: this is a catch-all for any other errors
    #[error("Other Error: {0}")]
    OtherError(String),
}
pub type Result<T, E = Error> = std::result::Result<T, E>;

mod macros;

pub mod context;
pub mod crd;
pub mod events;

pub use crate::context::PublishContext;
pub use crate::events::{EventPublisher, EventSink, EventSubject, Subject};

/// Log and trace integrations
pub mod telemetry;
