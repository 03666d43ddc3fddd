use crate::types::ValueKind;
use std::io;
use thiserror::Error;

/// Errors that abort an encode call.
///
/// Bytes already handed to the sink before the failure are not rolled back.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The sink rejected a write. The underlying error is kept as-is.
    #[error("sink write failed: {0}")]
    Sink(#[from] io::Error),

    /// The kind exists in the AMQP type catalogue but has no encoding rule here.
    #[error("no encoding rule for {0:?} values")]
    Unimplemented(ValueKind),

    /// A payload, composite size or composite count exceeds the 32-bit length field.
    #[error("{kind:?} of length {len} does not fit a 32-bit length field")]
    TooLong { kind: ValueKind, len: usize },
}

impl EncodeError {
    pub fn too_long(kind: ValueKind, len: usize) -> Self {
        Self::TooLong { kind, len }
    }
}

/// A byte that is not a format code emitted by this encoder.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown format code {0:#04x}")]
pub struct UnknownFormatCode(pub u8);
