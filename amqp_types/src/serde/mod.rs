//! # Serialization format
//!
//! Every [`Value`](crate::types::Value) is encoded as a `format_code`, one byte,
//! followed by whatever that code says follows. See [`FormatCode`] for the codes.
//!
//! Fixed-width kinds (null, booleans, integers, floats, timestamp, uuid) have no length field.
//! Integers and floats are big-endian; a timestamp is a big-endian `i64` of milliseconds since the epoch.
//!
//! Variable-width kinds (binary, string, symbol) and composites (list, map) come in
//! a small form and a large form, chosen by the byte length of the body:
//! up to [`SMALL_FORM_MAX`] bytes, length fields are one byte wide; beyond it, four bytes big-endian.
//!
//! ```text
//! struct Null or True or False or List0 {
//!     format_code:        u8,
//! }
//!
//! struct UInt {
//!     format_code:        u8,     // 0x70
//!     body:               [u8; 4],
//! }
//!
//! struct Str8 {
//!     format_code:        u8,     // 0xa1
//!     body_len:           u8,
//!     body:               [u8; body_len],
//! }
//!
//! struct Str32 {
//!     format_code:        u8,     // 0xb1
//!     body_len:           u32,
//!     body:               [u8; body_len],
//! }
//!
//! struct List8 or Map8 {
//!     format_code:        u8,     // 0xc0 or 0xc1
//!     body_len:           u8,
//!     members_count:      u8,
//!     body:               {
//!         member_0:           Value,
//!         member_1:           Value,
//!         ...
//!         // For a map, members alternate key, value, key, value, ...
//!         // members_count counts entries, i.e. key-value pairs.
//!     }
//! }
//!
//! struct List32 or Map32 {
//!     format_code:        u8,     // 0xd0 or 0xd1
//!     body_len:           u32,
//!     members_count:      u32,
//!     body:               { ... },
//! }
//!
//! struct Described {
//!     format_code:        u8,     // 0x00
//!     descriptor:         Value,
//!     value:              Value,
//! }
//! ```
//!
//! `body_len` never includes the `format_code` or the length fields themselves.
//! An empty list is always `List0`. An empty map is `Map8` with zero length and count.

mod encoder;
mod error;
mod format_code;
mod lengths;

pub use encoder::*;
pub use error::*;
pub use format_code::*;
pub use lengths::*;
