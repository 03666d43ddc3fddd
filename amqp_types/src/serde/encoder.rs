use crate::serde::{BodyLen, EncodeError, FormatCode, Forms, MembersCount, Width};
use crate::types::{Described, Map, Value, ValueKind};
use chrono::{DateTime, Utc};
use derive_more::{Deref, DerefMut, From};
use std::io::Write;
use tracing::{debug, trace};

/// Count of bytes handed to the sink by one encode call.
#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WriteLen(usize);

/// Encodes one value into a fresh buffer.
pub fn marshal(val: &Value) -> Result<Vec<u8>, EncodeError> {
    let mut enc = Encoder::new(Vec::new());
    enc.encode(val)?;
    Ok(enc.into_inner())
}

/// Appends the encodings of values to a sink.
///
/// The encoder holds nothing but the sink, and does not buffer:
/// each fixed-width value reaches the sink as soon as it is encoded.
#[derive(From, Deref, DerefMut)]
pub struct Encoder<W> {
    w: W,
}

impl<W: Write> Encoder<W> {
    pub fn new(w: W) -> Self {
        Self { w }
    }

    pub fn into_inner(self) -> W {
        self.w
    }

    pub fn encode(&mut self, val: &Value) -> Result<WriteLen, EncodeError> {
        let w_len = match val {
            Value::Null => self.put_fixed(FormatCode::Null, []),
            Value::Bool(true) => self.put_fixed(FormatCode::True, []),
            Value::Bool(false) => self.put_fixed(FormatCode::False, []),

            Value::UByte(u) => self.put_fixed(FormatCode::UByte, u.to_be_bytes()),
            Value::UShort(u) => self.put_fixed(FormatCode::UShort, u.to_be_bytes()),
            Value::UInt(u) => self.put_fixed(FormatCode::UInt, u.to_be_bytes()),
            Value::ULong(u) => self.put_fixed(FormatCode::ULong, u.to_be_bytes()),
            Value::Byte(i) => self.put_fixed(FormatCode::Byte, i.to_be_bytes()),
            Value::Short(i) => self.put_fixed(FormatCode::Short, i.to_be_bytes()),
            Value::Int(i) => self.put_fixed(FormatCode::Int, i.to_be_bytes()),
            Value::Long(i) => self.put_fixed(FormatCode::Long, i.to_be_bytes()),

            Value::Float(f) => self.put_fixed(FormatCode::Float, f.to_bits().to_be_bytes()),
            Value::Double(f) => self.put_fixed(FormatCode::Double, f.to_bits().to_be_bytes()),
            Value::Timestamp(ts) => {
                self.put_fixed(FormatCode::Timestamp, epoch_millis(ts).to_be_bytes())
            }
            Value::Uuid(id) => self.put_fixed(FormatCode::Uuid, *id.as_bytes()),

            Value::Binary(b) => self.put_variable(ValueKind::Binary, Forms::BINARY, b),
            Value::String(s) => self.put_variable(ValueKind::String, Forms::STRING, s.as_bytes()),
            Value::Symbol(s) => self.put_variable(ValueKind::Symbol, Forms::SYMBOL, s.as_bytes()),

            Value::List(members) => self.put_list(members),
            Value::Map(map) => self.put_map(map),
            Value::Described(described) => self.put_described(described),

            Value::Decimal32(_)
            | Value::Decimal64(_)
            | Value::Decimal128(_)
            | Value::Char(_) => {
                let kind = ValueKind::from(val);
                debug!(?kind, "Rejecting a value that has no encoding rule.");
                Err(EncodeError::Unimplemented(kind))
            }
        }?;

        trace!(kind = ?ValueKind::from(val), w_len = *w_len, "Encoded.");
        Ok(w_len)
    }

    fn put(&mut self, buf: &[u8]) -> Result<usize, EncodeError> {
        self.w.write_all(buf)?;
        Ok(buf.len())
    }

    fn put_fixed<const LEN: usize>(
        &mut self,
        code: FormatCode,
        body: [u8; LEN],
    ) -> Result<WriteLen, EncodeError> {
        let mut w_len = 0;
        w_len += self.put(&[code.to_byte()])?;
        w_len += self.put(&body)?;
        Ok(WriteLen(w_len))
    }

    fn put_variable(
        &mut self,
        kind: ValueKind,
        forms: Forms,
        body: &[u8],
    ) -> Result<WriteLen, EncodeError> {
        let body_len = BodyLen::from_body(kind, body)?;
        let width = Width::of(body_len);
        let code = forms.pick(width);
        if code.is_large_form() {
            debug!(?kind, ?code, body_len = *body_len, "Using the large form.");
        }

        /* format_code, body_len */
        let mut header = vec![code.to_byte()];
        width.put_field(*body_len, &mut header);

        let mut w_len = 0;
        w_len += self.put(&header)?;
        w_len += self.put(body)?;
        Ok(WriteLen(w_len))
    }

    fn put_list(&mut self, members: &[Value]) -> Result<WriteLen, EncodeError> {
        let mut nested = Encoder::new(Vec::<u8>::new());
        for member in members {
            nested.encode(member)?;
        }
        let body = nested.into_inner();

        if body.is_empty() {
            return self.put_fixed(FormatCode::List0, []);
        }
        self.put_composite(ValueKind::List, Forms::LIST, members.len(), &body)
    }

    fn put_map(&mut self, map: &Map) -> Result<WriteLen, EncodeError> {
        let mut nested = Encoder::new(Vec::<u8>::new());
        for (k, v) in map {
            nested.encode(k)?;
            nested.encode(v)?;
        }
        let body = nested.into_inner();

        self.put_composite(ValueKind::Map, Forms::MAP, map.len(), &body)
    }

    /// Writes a composite whose members are already encoded in `body`.
    fn put_composite(
        &mut self,
        kind: ValueKind,
        forms: Forms,
        members_count: usize,
        body: &[u8],
    ) -> Result<WriteLen, EncodeError> {
        let body_len = BodyLen::from_body(kind, body)?;
        let membs_ct = MembersCount::new(kind, members_count)?;
        let width = Width::of(body_len);
        let code = forms.pick(width);
        if code.is_large_form() {
            debug!(?kind, ?code, body_len = *body_len, membs_ct = *membs_ct, "Using the large form.");
        }

        /* format_code, body_len, members_count */
        let mut header = vec![code.to_byte()];
        width.put_field(*body_len, &mut header);
        width.put_field(*membs_ct, &mut header);

        let mut w_len = 0;
        w_len += self.put(&header)?;
        w_len += self.put(body)?;
        Ok(WriteLen(w_len))
    }

    fn put_described(&mut self, described: &Described) -> Result<WriteLen, EncodeError> {
        let mut w_len = 0;
        w_len += self.put(&[FormatCode::Described.to_byte()])?;
        w_len += *self.encode(&described.descriptor)?;
        w_len += *self.encode(&described.value)?;
        Ok(WriteLen(w_len))
    }
}

/// Milliseconds since the epoch, truncated toward zero.
pub(crate) fn epoch_millis(ts: &DateTime<Utc>) -> i64 {
    // `timestamp_millis` floors. Before the epoch, floor and truncation differ
    // whenever a sub-millisecond remainder exists.
    let millis = ts.timestamp_millis();
    if millis < 0 && ts.timestamp_subsec_nanos() % 1_000_000 != 0 {
        millis + 1
    } else {
        millis
    }
}
