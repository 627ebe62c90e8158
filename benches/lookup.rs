// Lookup and insertion benchmarks for the skip list map.
//
// Lookups probe random keys (mostly misses) against maps of 16, 256 and
// 65536 random keys.

use std::collections::BTreeMap;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use skipmap::SkipMap;

const SIZES: [usize; 3] = [16, 256, 65536];

fn random_keys(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.r#gen()).collect()
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in SIZES {
        let keys = random_keys(size, 1);
        let map: SkipMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
        let tree: BTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
        // Half hits, half random probes.
        let mut probes = random_keys(1024, 2);
        for (probe, key) in probes.iter_mut().step_by(2).zip(keys.iter().cycle()) {
            *probe = *key;
        }

        group.bench_with_input(BenchmarkId::new("SkipMap", size), &probes, |b, probes| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % probes.len();
                black_box(map.get(&probes[i]))
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &probes, |b, probes| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % probes.len();
                black_box(tree.get(&probes[i]))
            });
        });
    }

    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [256, 4096] {
        let keys = random_keys(size, 3);
        group.bench_with_input(BenchmarkId::new("SkipMap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = SkipMap::new();
                for &key in keys {
                    map.insert(key, key);
                }
                black_box(map.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_insert);
criterion_main!(benches);
