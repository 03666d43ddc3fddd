use super::helpers::gen_properties;
use amqp_types::serde::{marshal, EncodeError, Encoder};
use amqp_types::types::{Encode, Value};
use anyhow::{anyhow, Result};
use std::io::{self, BufWriter, ErrorKind, Write};

pub fn test_sinks() -> Result<()> {
    buffered_sink()?;
    closed_sink()?;
    Ok(())
}

fn buffered_sink() -> Result<()> {
    let val = gen_properties();

    let mut w = BufWriter::new(Vec::<u8>::new());
    let w_len = val.encode(&mut w)?;
    w.flush()?;
    let encoded = w.into_inner().map_err(|e| anyhow!(e.to_string()))?;

    assert_eq!(*w_len, encoded.len());
    assert_eq!(encoded, marshal(&val)?);
    Ok(())
}

struct ClosedSink;
impl Write for ClosedSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn closed_sink() -> Result<()> {
    let mut enc = Encoder::new(ClosedSink);
    for val in [Value::Null, gen_properties()] {
        match enc.encode(&val) {
            Err(EncodeError::Sink(e)) => assert_eq!(ErrorKind::BrokenPipe, e.kind()),
            other => return Err(anyhow!("{:?}", other)),
        }
    }
    Ok(())
}
