use crate::serde::epoch_millis;
use crate::types::Value;
use std::slice;

/// A polymorphic mapping from distinct keys to values.
///
/// Entries keep insertion order; that order is the order they are encoded in.
/// Values have no total order or hash (floats), so key lookup is a linear scan.
///
/// Keys are compared by what they encode to, not by `Value`'s `PartialEq`:
/// `NaN` is the same key as itself, and `0.0` and `-0.0` are different keys.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct Map(Vec<(Value, Value)>);

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry. A same key keeps its position and has its value replaced;
    /// the old value is returned.
    pub fn insert(&mut self, key: impl Into<Value>, val: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let val = val.into();
        match self.0.iter_mut().find(|(k, _)| same_key(k, &key)) {
            Some((_, v)) => Some(std::mem::replace(v, val)),
            None => {
                self.0.push((key, val));
                None
            }
        }
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.0.iter().find(|(k, _)| same_key(k, key)).map(|(_, v)| v)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, (Value, Value)> {
        self.0.iter()
    }
}

/// Whether two keys encode to the same bytes.
fn same_key(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Float(x), Value::Float(y)) => x.to_bits() == y.to_bits(),
        (Value::Double(x), Value::Double(y)) => x.to_bits() == y.to_bits(),
        (Value::Timestamp(x), Value::Timestamp(y)) => epoch_millis(x) == epoch_millis(y),
        (Value::List(xs), Value::List(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| same_key(x, y))
        }
        (Value::Map(xm), Value::Map(ym)) => {
            xm.len() == ym.len()
                && xm
                    .iter()
                    .zip(ym)
                    .all(|((xk, xv), (yk, yv))| same_key(xk, yk) && same_key(xv, yv))
        }
        (Value::Described(x), Value::Described(y)) => {
            same_key(&x.descriptor, &y.descriptor) && same_key(&x.value, &y.value)
        }
        _ => a == b,
    }
}

impl<K, V> FromIterator<(K, V)> for Map
where
    K: Into<Value>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = &'a (Value, Value);
    type IntoIter = slice::Iter<'a, (Value, Value)>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
