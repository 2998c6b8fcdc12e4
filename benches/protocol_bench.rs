use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uttt::protocol::parse_command;
use uttt::strategy::FirstFreeStrategy;
use uttt::{MatchDriver, ProtocolChannel};

const LINES: [&str; 5] = [
    "S R",
    "R 0,1,2,3,4,5,6,7,8",
    "P B 4 4",
    "G S 7",
    "P R 8 0",
];

/// Transcript of alternating requests and opponent replies in fresh tiles.
fn transcript() -> String {
    let mut out = String::from("S R\n");
    for board in 0..9 {
        out.push_str(&format!("R {}\n", board));
        out.push_str(&format!("P B {} 8\n", board));
    }
    out
}

fn parse_benchmark(c: &mut Criterion) {
    c.bench_function("parse_commands", |b| {
        b.iter(|| {
            for line in LINES {
                black_box(parse_command(black_box(line)).ok());
            }
        })
    });
}

fn match_benchmark(c: &mut Criterion) {
    let input = transcript();

    c.bench_function("drive_nine_requests", |b| {
        b.iter(|| {
            let mut channel = ProtocolChannel::new(input.as_bytes(), Vec::new());
            let mut driver = MatchDriver::new(FirstFreeStrategy);
            black_box(driver.run(&mut channel).ok())
        })
    });
}

criterion_group!(benches, parse_benchmark, match_benchmark);
criterion_main!(benches);
