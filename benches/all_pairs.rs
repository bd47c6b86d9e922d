use fastrand::Rng;
use trasa::{algo::ShortestPaths, core::id::NodeId, store::GraphStore};

const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

fn main() {
    divan::main();
}

fn random_store(n: usize, density: f32, rng: &mut Rng) -> GraphStore {
    let mut store = GraphStore::with_capacity(n);

    for i in 1..=n {
        store.add_node(format!("v{i}")).unwrap();
    }

    for start in 1..=n as u32 {
        for end in 1..=n as u32 {
            if start != end && rng.f32() < density {
                store
                    .insert_edge(NodeId::new(start), NodeId::new(end), rng.u64(1..100))
                    .unwrap();
            }
        }
    }

    store
}

#[divan::bench(consts = [16, 64, 100], args = [0.25, 0.75])]
fn all_pairs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let store = random_store(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| ShortestPaths::compute(&store));
}

#[divan::bench(consts = [16, 64, 100], args = [0.25, 0.75])]
fn reconstruct_all_pairs<const N: usize>(bencher: divan::Bencher, density: f32) {
    let store = random_store(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let paths = ShortestPaths::compute(&store);

    bencher.bench(|| {
        for s in store.nodes() {
            for d in store.nodes() {
                if let Ok(route) = paths.path(s, d) {
                    divan::black_box(route);
                }
            }
        }
    });
}
