#![no_main]

use libfuzzer_sys::fuzz_target;

use trasa::{algo::ShortestPaths, store::GraphStore};

fuzz_target!(|input: &str| {
    let mut store = GraphStore::with_capacity(64);

    // A failed build leaves the store in a partial but valid state, so the
    // computation below must not panic either way.
    let _ = store.build(input.split_whitespace());

    let paths = ShortestPaths::compute(&store);

    for s in store.nodes() {
        for d in store.nodes() {
            if paths.dist(s, d).is_some() {
                paths.path(s, d).unwrap();
            }
        }
    }
});
