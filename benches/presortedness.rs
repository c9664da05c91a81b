//! The classic measurement: every sort across linearly spaced sizes and a
//! handful of presortedness levels, naive wall-clock timing, mean over a few
//! repetitions. Prints every record and writes `<sort>_results.txt` per
//! algorithm. Parameters are literals below, edit in source.

use std::io;

use sort_bench_rs::bench::{run, BenchConfig};
use sort_bench_rs::{report, stable, unstable, Sort};

fn bench_one<S: Sort>(config: &BenchConfig) -> io::Result<()> {
    let results = run::<S>(config);

    println!("--- {} ---", S::name());
    report::print_results(&results)?;
    report::write_results_file(&S::name(), &results)
}

fn main() -> io::Result<()> {
    let config = BenchConfig {
        start: 0,
        stop: 1000,
        step: 100,
        presortedness_levels: vec![0.0, 0.5, 1.0],
        reps: 5,
    };

    println!("Seed: {}", sort_bench_rs::patterns::random_init_seed());

    bench_one::<stable::insertion_sort::SortImpl>(&config)?;
    bench_one::<stable::merge_sort::SortImpl>(&config)?;
    bench_one::<unstable::heap_sort::SortImpl>(&config)?;
    bench_one::<unstable::quick_sort::SortImpl>(&config)?;
    bench_one::<unstable::selection_sort::SortImpl>(&config)?;

    Ok(())
}
