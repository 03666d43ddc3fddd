use super::helpers::{cat, gen_application_properties, gen_properties, gen_uuid};
use amqp_types::serde::{marshal, Encoder};
use amqp_types::types::{Encode, Value};
use anyhow::Result;

pub fn test_message_sections() -> Result<()> {
    properties()?;
    application_properties_small()?;
    application_properties_large()?;
    sections_in_one_sink()?;
    Ok(())
}

fn properties() -> Result<()> {
    let id = gen_uuid();
    let exp = cat(&[
        &[0x00],
        &[0xa3, 20],
        b"amqp:properties:list",
        &[0xc0, 40, 5],
        &[0x98],
        id.as_bytes(),
        &[0xa0, 4],
        b"user",
        &[0xa1, 5],
        b"queue",
        &[0x40],
        &[0x83, 0x00, 0x00, 0x01, 0x24, 0xE0, 0x53, 0x35, 0x80],
    ]);
    assert_eq!(exp, marshal(&gen_properties())?);
    Ok(())
}

fn application_properties_small() -> Result<()> {
    let mut body = vec![];
    for i in 0..3u32 {
        body.extend(cat(&[
            &[0xa1, 7],
            format!("key-{i:03}").as_bytes(),
            &[0x70],
            &i.to_be_bytes(),
        ]));
    }
    assert_eq!(body.len(), 42);

    let exp = cat(&[
        &[0x00],
        &[0x80, 0, 0, 0, 0, 0, 0, 0, 0x74],
        &[0xc1, 42, 3],
        &body,
    ]);
    assert_eq!(exp, marshal(&gen_application_properties(3))?);
    Ok(())
}

fn application_properties_large() -> Result<()> {
    let encoded = marshal(&gen_application_properties(40))?;

    // 40 entries of 14 bytes each
    let header_at = 1 + 9;
    assert_eq!(
        encoded[header_at..header_at + 9],
        [0xd1, 0x00, 0x00, 0x02, 0x30, 0x00, 0x00, 0x00, 40]
    );
    assert_eq!(encoded.len(), header_at + 9 + 560);
    Ok(())
}

fn sections_in_one_sink() -> Result<()> {
    let sections = vec![
        gen_properties(),
        gen_application_properties(40),
        Value::from(&b"payload"[..]),
    ];

    let mut enc = Encoder::new(Vec::<u8>::new());
    let mut w_len = 0;
    for section in sections.iter() {
        w_len += *enc.encode(section)?;
    }
    let encoded = enc.into_inner();
    assert_eq!(w_len, encoded.len());

    let mut exp = vec![];
    for section in sections.iter() {
        exp.extend(section.encode_solo()?);
    }
    assert_eq!(exp, encoded);
    Ok(())
}
