use crate::types::Value;

/// A value annotated with a descriptor, itself any value.
#[derive(PartialEq, Clone, Debug)]
pub struct Described {
    pub descriptor: Value,
    pub value: Value,
}

impl Described {
    pub fn new(descriptor: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            descriptor: descriptor.into(),
            value: value.into(),
        }
    }
}
