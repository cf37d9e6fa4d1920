use criterion::{criterion_group, criterion_main};

mod config;
mod shell;

criterion_group!(
    benches,
    shell::bench_parse_args,
    shell::bench_dispatch,
    config::bench_tokenize,
    config::bench_load
);
criterion_main!(benches);
