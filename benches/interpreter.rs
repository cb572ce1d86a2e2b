//! Interpreter benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gridwire::parser::{encode_stream, Command, FrameDecoder};
use gridwire::renderer::{MemorySink, NullSink};
use gridwire::Interpreter;

fn drawing_stream() -> Vec<u8> {
    let mut commands = vec![Command::Setup {
        width: 80,
        height: 24,
        color_mode: 1,
    }];
    for i in 0..200u8 {
        commands.push(Command::DrawChar {
            x: i % 80,
            y: i % 24,
            ch: b'A' + i % 26,
        });
        commands.push(Command::DrawLine {
            x1: 0,
            y1: i % 24,
            x2: 79,
            y2: i % 24,
            color: 0,
            ch: b'-',
        });
        commands.push(Command::RenderText {
            x: i % 40,
            y: i % 24,
            color: 0,
            text: b"The quick brown fox".to_vec(),
        });
    }
    commands.push(Command::End);
    encode_stream(&commands).expect("frames fit")
}

fn bench_decode(c: &mut Criterion) {
    let stream = drawing_stream();
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(stream.len() as u64));

    group.bench_function("frames", |b| {
        b.iter(|| {
            let count = FrameDecoder::new(black_box(&stream))
                .filter_map(Result::ok)
                .count();
            black_box(count)
        })
    });

    group.finish();
}

fn bench_run(c: &mut Criterion) {
    let stream = drawing_stream();
    let mut group = c.benchmark_group("interpreter");
    group.throughput(Throughput::Bytes(stream.len() as u64));

    group.bench_function("run_null_sink", |b| {
        b.iter(|| {
            let mut interpreter = Interpreter::new();
            let summary = interpreter.run(black_box(&stream), &mut NullSink);
            black_box(summary)
        })
    });

    group.bench_function("run_memory_sink", |b| {
        b.iter(|| {
            let mut interpreter = Interpreter::new();
            let mut sink = MemorySink::new();
            let summary = interpreter.run(black_box(&stream), &mut sink);
            black_box((summary, sink.frames().len()))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_run);
criterion_main!(benches);
