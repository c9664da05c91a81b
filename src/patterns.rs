//! Input patterns for tests and benchmarks.
//!
//! All random patterns derive from one per-process seed so that failures are
//! reproducible. Set `OVERRIDE_SEED` to pin it.

use std::cell::Cell;
use std::env;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Seed used by all random patterns in this process. Stable across calls.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => seed
            .parse()
            .expect("OVERRIDE_SEED must be a valid unsigned integer"),
        Err(_) => thread_rng().gen(),
    })
}

fn new_rng() -> StdRng {
    // Mix in a per-thread call counter so that consecutive patterns differ.
    // The counter must not be shared between threads: the test runner gives
    // every test its own thread, and a thread's pattern sequence has to be a
    // pure function of the seed, independent of whatever other tests did
    // first.
    thread_local! {
        static CALL_COUNT: Cell<u64> = Cell::new(0);
    }

    let call = CALL_COUNT.with(|count| {
        let call = count.get();
        count.set(call + 1);
        call
    });

    StdRng::seed_from_u64(random_init_seed().wrapping_add(call))
}

/// `0..len` in ascending order.
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// `0..len` fully reversed.
pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Fully random values.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Uniformly distributed values in `range`, duplicate-heavy for small ranges.
pub fn random_uniform(len: usize, range: std::ops::Range<i32>) -> Vec<i32> {
    if range.is_empty() {
        return vec![range.start; len];
    }

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Every element the same value.
pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// A permutation of `0..len` with a controlled amount of initial order.
///
/// `presortedness` is in `[0.0, 1.0]`: 1.0 yields the ascending identity,
/// 0.0 yields it fully reversed, and anything in between shuffles the whole
/// array and then re-sorts a prefix of length `floor(len * presortedness)`.
///
/// Note this is a sorted-prefix approximation of disorder, not a rigorous
/// presortedness metric. Values outside `[0.0, 1.0]` are not validated.
pub fn presorted(len: usize, presortedness: f64) -> Vec<i32> {
    let mut v = ascending(len);

    if presortedness == 1.0 {
        return v;
    }

    if presortedness == 0.0 {
        v.reverse();
        return v;
    }

    let mut rng = new_rng();
    v.shuffle(&mut rng);

    let prefix_len = (len as f64 * presortedness) as usize;
    v[..prefix_len].sort_unstable();

    v
}
