//! Benchmarks for running complete scripts.

use std::fmt::Write;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use warboard::core::config::SimulationConfig;
use warboard::engine::simulate;
use warboard::transcript::MemoryTranscript;

/// A script with `factions` factions, one unit each, then `rounds` of mixed actions
fn generate_script(factions: u32, rounds: u32) -> String {
    let size = factions.max(4) as i32;
    let mut script = format!("{size} {size}\n{factions}\n");
    for f in 0..factions {
        let _ = writeln!(script, "F{f} pos {f} 0");
    }
    for f in 0..factions {
        let _ = writeln!(script, "{f}u pos {} {f} 1", f % 2 + 1);
    }
    for r in 0..rounds {
        let a = r % factions;
        let b = (r + 1) % factions;
        let _ = writeln!(script, "F{a} ataca F{b}");
        let _ = writeln!(script, "{a}u move 0 {} {}", r as i32 % size, (r as i32 + 1) % size);
        let _ = writeln!(script, "{a}u coleta 0 0");
        let _ = writeln!(script, "F{b} defende 0 0");
        let _ = writeln!(script, "F{a} constroi {} 0 {a} {a}", r % 3 + 1);
    }
    script.push_str("FIM\n");
    script
}

fn bench_small_script(c: &mut Criterion) {
    let script = generate_script(4, 50);
    let config = SimulationConfig::default().with_seed(42);

    c.bench_function("script_4f_50r", |b| {
        b.iter(|| {
            let mut sink = MemoryTranscript::new();
            let outcome = simulate(black_box(&script), black_box(&config), &mut sink);
            black_box(outcome)
        });
    });
}

fn bench_without_snapshots(c: &mut Criterion) {
    let script = generate_script(9, 500);
    let config = SimulationConfig {
        board_snapshots: false,
        ..SimulationConfig::default().with_seed(42)
    };

    c.bench_function("script_9f_500r_no_snapshots", |b| {
        b.iter(|| {
            let mut sink = MemoryTranscript::new();
            let outcome = simulate(black_box(&script), black_box(&config), &mut sink);
            black_box(outcome)
        });
    });
}

criterion_group!(benches, bench_small_script, bench_without_snapshots);
criterion_main!(benches);
