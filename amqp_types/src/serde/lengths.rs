use crate::serde::EncodeError;
use crate::types::ValueKind;
use derive_more::Deref;

/// The largest body, in bytes, that still fits the one-byte-length form.
pub const SMALL_FORM_MAX: usize = u8::MAX as usize;

/// The width of the length (and, for composites, count) fields following a format code.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Width {
    Small,
    Large,
}
impl Width {
    pub fn of(body_len: BodyLen) -> Self {
        if *body_len as usize <= SMALL_FORM_MAX {
            Self::Small
        } else {
            Self::Large
        }
    }

    /// Appends `int` as a one-byte or a four-byte big-endian field.
    ///
    /// In the small form `int` never exceeds [`SMALL_FORM_MAX`]:
    /// a body length is checked by [`Width::of`], and a member count is bounded by its body length.
    pub fn put_field(self, int: u32, header: &mut Vec<u8>) {
        match self {
            Self::Small => header.push(int as u8),
            Self::Large => header.extend_from_slice(&int.to_be_bytes()),
        }
    }
}

/// Byte length of a variable-width payload, or of a composite's encoded members.
#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct BodyLen(u32);
impl BodyLen {
    pub fn from_body(kind: ValueKind, buf: &[u8]) -> Result<Self, EncodeError> {
        let int = u32::try_from(buf.len()).map_err(|_| EncodeError::too_long(kind, buf.len()))?;
        Ok(Self(int))
    }
}

/// Number of list elements, or of map entries (not keys and values separately).
#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct MembersCount(u32);
impl MembersCount {
    pub fn new(kind: ValueKind, count: usize) -> Result<Self, EncodeError> {
        let int = u32::try_from(count).map_err(|_| EncodeError::too_long(kind, count))?;
        Ok(Self(int))
    }
}
