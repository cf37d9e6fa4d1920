use std::hint::black_box;

use criterion::Criterion;

use coreshell::config::json::tokenize;
use coreshell::config::loader::{self, ConfigLoader};
use coreshell::config::Settings;
use coreshell::storage::RamFileStore;

const SAMPLE: &str = r#"{
  "version": "7.0",
  "device_name": "CorESP32",
  "config_mode": "auto_init",
  "uart": {
    "console": {
      "num": 0,
      "baudrate": 115200
    }
  },
  "features": {
    "shell": true,
    "logging": true
  }
}"#;

pub fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_config_document", |b| {
        b.iter(|| tokenize::<128>(black_box(SAMPLE)))
    });
}

pub fn bench_load(c: &mut Criterion) {
    let mut store: RamFileStore = RamFileStore::new();
    loader::save(&mut store, "config/system.json", &Settings::default()).unwrap();
    let mut loader = ConfigLoader::new();

    c.bench_function("load_config_from_store", |b| {
        b.iter(|| loader.load(&mut store, black_box("config/system.json")))
    });
}
