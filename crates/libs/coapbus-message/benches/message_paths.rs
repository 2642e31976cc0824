use criterion::{criterion_group, criterion_main, Criterion};

use coapbus_message::options::{self, Options};
use coapbus_message::RequestMessage;

fn bench_payload_text(c: &mut Criterion) {
    let mut message = RequestMessage::new();
    message.set_payload_text(Some("21.5 C"));
    c.bench_function("payload_text", |b| b.iter(|| message.payload_text().unwrap().len()));
}

fn bench_wire_roundtrip(c: &mut Criterion) {
    let mut opts = Options::new();
    opts.insert(options::URI_PATH, b"sensors".to_vec());
    opts.insert(options::URI_PATH, b"temperature".to_vec());
    let mut message = RequestMessage::new();
    message.set_options(&opts);
    message.set_payload(Some(vec![0u8; 64]));

    c.bench_function("wire_roundtrip", |b| {
        b.iter(|| {
            let bytes = message.to_msgpack().unwrap();
            RequestMessage::from_msgpack(&bytes).unwrap()
        })
    });
}

criterion_group!(benches, bench_payload_text, bench_wire_roundtrip);
criterion_main!(benches);
