use crate::serde::{EncodeError, Encoder, WriteLen};
use crate::types::Value;
use std::borrow::Borrow;
use std::io::Write;

pub trait Encode {
    fn encode<W: Write>(&self, w: &mut W) -> Result<WriteLen, EncodeError>;

    fn encode_solo(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buf = vec![];
        self.encode(&mut buf)?;
        Ok(buf)
    }
}

/* Blanket impl for Encode */
impl<T> Encode for T
where
    T: Borrow<Value>,
{
    fn encode<W: Write>(&self, w: &mut W) -> Result<WriteLen, EncodeError> {
        let val: &Value = self.borrow();
        Encoder::new(w).encode(val)
    }
}
