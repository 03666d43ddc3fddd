use amqp_types::types::{Described, Map, Symbol, Uuid, Value};
use chrono::{TimeZone, Utc};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_TRACING: Once = Once::new();

/// Log verbosity follows `RUST_LOG`, e.g. `RUST_LOG=amqp_types=trace`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn cat(parts: &[&[u8]]) -> Vec<u8> {
    parts.concat()
}

pub fn gen_uuid() -> Uuid {
    let mut b = [0u8; 16];
    for (i, x) in b.iter_mut().enumerate() {
        *x = i as u8 + 1;
    }
    Uuid::from(b)
}

pub fn gen_properties() -> Value {
    let ts = Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap();
    let fields = vec![
        Value::from(gen_uuid()),
        Value::from(&b"user"[..]),
        Value::from("queue"),
        Value::Null,
        Value::from(ts),
    ];
    Value::from(Described::new(
        Symbol::from("amqp:properties:list"),
        Value::List(fields),
    ))
}

pub fn gen_application_properties(entries_ct: u32) -> Value {
    let map = (0..entries_ct)
        .map(|i| (format!("key-{i:03}"), Value::from(i)))
        .collect::<Map>();
    Value::from(Described::new(0x74u64, map))
}
