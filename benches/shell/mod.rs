use core::fmt::Write;
use std::hint::black_box;

use criterion::Criterion;

use coreshell::error::Error;
use coreshell::shell::dispatch::{dispatch, Args};
use coreshell::shell::registry::Registry;
use coreshell::shell::CommandSpec;

/// Output sink that drops everything, so formatting cost stays out of the
/// measurements as much as possible.
struct Discard;

impl Write for Discard {
    fn write_str(&mut self, _s: &str) -> core::fmt::Result {
        Ok(())
    }
}

fn noop(_: &mut (), _: &Args<'_>, _: &mut dyn Write) -> Result<(), Error> {
    Ok(())
}

type Handler = fn(&mut (), &Args<'_>, &mut dyn Write) -> Result<(), Error>;

pub fn bench_parse_args(c: &mut Criterion) {
    c.bench_function("args_parse_gpio_line", |b| {
        b.iter(|| Args::parse(black_box("gpio:8:mode:output")))
    });
}

pub fn bench_dispatch(c: &mut Criterion) {
    let mut handlers: Vec<Handler> = vec![noop; 16];
    let mut registry: Registry<'_, ()> = Registry::new();
    for (i, handler) in handlers.iter_mut().enumerate() {
        let name: &'static str = format!("cmd{}", i).leak();
        registry
            .register(CommandSpec::new(name, "Bench command", name), handler)
            .unwrap();
    }

    let mut sink = Discard;
    c.bench_function("dispatch_last_of_16", |b| {
        b.iter(|| dispatch(&mut registry, &mut (), black_box("cmd15:1:2:3"), &mut sink))
    });
}
