use crate::types::{Described, Map, Symbol, Uuid};
use chrono::{DateTime, Utc};
use derive_more::From;
use std::collections::{BTreeMap, HashMap};
use std::time::SystemTime;

/// A value of the AMQP 1.0 type system.
///
/// Native values convert in via `From`. Two native types have no AMQP counterpart of their own:
/// `usize` widens to [`Value::ULong`] and `isize` to [`Value::Long`].
///
/// The decimal and char members are part of the catalogue but cannot be encoded;
/// see [`crate::serde::EncodeError::Unimplemented`].
#[derive(From, PartialEq, Clone, Debug)]
pub enum Value {
    #[from(ignore)]
    Null,
    Bool(bool),

    UByte(u8),
    UShort(u16),
    UInt(u32),
    ULong(u64),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),

    Float(f32),
    Double(f64),
    /// IEEE 754-2008 decimal32, raw bits.
    #[from(ignore)]
    Decimal32([u8; 4]),
    /// IEEE 754-2008 decimal64, raw bits.
    #[from(ignore)]
    Decimal64([u8; 8]),
    /// IEEE 754-2008 decimal128, raw bits.
    #[from(ignore)]
    Decimal128([u8; 16]),

    #[from(ignore)]
    Char(char),
    Timestamp(DateTime<Utc>),
    Uuid(Uuid),

    Binary(Vec<u8>),
    String(String),
    Symbol(Symbol),

    List(Vec<Value>),
    Map(Map),
    #[from(ignore)]
    Described(Box<Described>),
}

impl From<usize> for Value {
    fn from(u: usize) -> Self {
        Self::ULong(u as u64)
    }
}
impl From<isize> for Value {
    fn from(i: isize) -> Self {
        Self::Long(i as i64)
    }
}
impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Self::Binary(b.to_vec())
    }
}
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}
impl From<SystemTime> for Value {
    fn from(t: SystemTime) -> Self {
        Self::Timestamp(DateTime::<Utc>::from(t))
    }
}
impl From<Described> for Value {
    fn from(described: Described) -> Self {
        Self::Described(Box::new(described))
    }
}
impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            None => Self::Null,
            Some(t) => t.into(),
        }
    }
}
impl<K, V, S> From<HashMap<K, V, S>> for Value
where
    K: Into<Value>,
    V: Into<Value>,
{
    fn from(hm: HashMap<K, V, S>) -> Self {
        Self::Map(hm.into_iter().collect())
    }
}
impl<K, V> From<BTreeMap<K, V>> for Value
where
    K: Into<Value>,
    V: Into<Value>,
{
    fn from(bm: BTreeMap<K, V>) -> Self {
        Self::Map(bm.into_iter().collect())
    }
}

/// Collects into a [`Value::List`].
impl<T> FromIterator<T> for Value
where
    T: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

/// The member of [`Value`], without its payload.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub enum ValueKind {
    Null,
    Bool,
    UByte,
    UShort,
    UInt,
    ULong,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Decimal32,
    Decimal64,
    Decimal128,
    Char,
    Timestamp,
    Uuid,
    Binary,
    String,
    Symbol,
    List,
    Map,
    Described,
}
impl From<&Value> for ValueKind {
    fn from(val: &Value) -> Self {
        match val {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::UByte(_) => Self::UByte,
            Value::UShort(_) => Self::UShort,
            Value::UInt(_) => Self::UInt,
            Value::ULong(_) => Self::ULong,
            Value::Byte(_) => Self::Byte,
            Value::Short(_) => Self::Short,
            Value::Int(_) => Self::Int,
            Value::Long(_) => Self::Long,
            Value::Float(_) => Self::Float,
            Value::Double(_) => Self::Double,
            Value::Decimal32(_) => Self::Decimal32,
            Value::Decimal64(_) => Self::Decimal64,
            Value::Decimal128(_) => Self::Decimal128,
            Value::Char(_) => Self::Char,
            Value::Timestamp(_) => Self::Timestamp,
            Value::Uuid(_) => Self::Uuid,
            Value::Binary(_) => Self::Binary,
            Value::String(_) => Self::String,
            Value::Symbol(_) => Self::Symbol,
            Value::List(_) => Self::List,
            Value::Map(_) => Self::Map,
            Value::Described(_) => Self::Described,
        }
    }
}
