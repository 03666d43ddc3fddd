use super::helpers::{gen_application_properties, gen_properties};
use amqp_types::serde::{marshal, Encoder};
use amqp_types::types::{Uuid, Value};
use anyhow::{anyhow, Result};
use std::thread;

/// Encoders bound to independent sinks run on separate threads without coordination.
pub fn test_concurrent_encoders() -> Result<()> {
    let threads_ct = 8;

    let vals = (0..threads_ct)
        .map(|i| -> Result<Value> {
            Ok(Value::List(vec![
                gen_properties(),
                gen_application_properties(i * 10),
                Value::from(Uuid::generate()?),
            ]))
        })
        .collect::<Result<Vec<_>>>()?;

    let encodeds = thread::scope(|s| {
        let handles = vals
            .iter()
            .map(|val| {
                s.spawn(move || -> Result<Vec<u8>> {
                    let mut enc = Encoder::new(Vec::<u8>::new());
                    for _ in 0..100 {
                        enc.encode(val)?;
                    }
                    Ok(enc.into_inner())
                })
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(res) => res,
                Err(_) => Err(anyhow!("Encoder thread panicked.")),
            })
            .collect::<Result<Vec<_>>>()
    })?;

    for (val, encoded) in vals.iter().zip(encodeds.iter()) {
        let solo = marshal(val)?;
        assert_eq!(encoded.len(), solo.len() * 100);
        assert!(encoded.chunks(solo.len()).all(|chunk| chunk == &solo[..]));
    }

    Ok(())
}
