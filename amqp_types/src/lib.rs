//! Values of the AMQP 1.0 type system, and their tag-prefixed wire encoding.
//!
//! ```
//! use amqp_types::serde::marshal;
//! use amqp_types::types::{Described, Value};
//!
//! let value = Value::from(Described::new(1u8, 0x0100u16));
//! assert_eq!(marshal(&value).unwrap(), vec![0x00, 0x50, 0x01, 0x60, 0x01, 0x00]);
//! ```

pub mod serde;
pub mod types;
