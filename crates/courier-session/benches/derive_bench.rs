//! Benchmarks for Courier Session Derivation
//!
//! Measures performance of:
//! - Session key derivation
//! - World-state pool adaptation
//! - Full session derivation at realistic pool sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::HashSet;

use courier_chain::{ChainDescriptor, ChainFingerprint};
use courier_session::{adapt_pool, Node, Role, Seed, Session, SessionKey, BLOCK_HASH_LEN, DEV_ID_LEN};
use courier_worldstate::WorldStateNode;

fn bench_chain() -> ChainFingerprint {
    ChainDescriptor::new("eth", "1", "1").fingerprint().unwrap()
}

fn gid(i: usize) -> String {
    hex::encode(blake3::hash(format!("node{i}").as_bytes()).as_bytes())
}

/// World-state records with a 3:1 validator/servicer split.
fn synthetic_records(size: usize) -> Vec<WorldStateNode> {
    (0..size)
        .map(|i| WorldStateNode {
            enode: format!("enode://{}@10.0.{}.{}:30303", gid(i), i / 256, i % 256),
            stake: 15_000,
            active: true,
            is_val: i % 4 != 3,
            chains: vec![ChainDescriptor::new("eth", "1", "1")],
        })
        .collect()
}

/// A pre-adapted pool with the same 3:1 role split.
fn synthetic_pool(size: usize) -> Vec<Node> {
    let chains = HashSet::from([bench_chain()]);
    (0..size)
        .map(|i| {
            let role = if i % 4 != 3 { Role::Validate } else { Role::Service };
            Node::new(
                gid(i),
                format!("10.0.{}.{}", i / 256, i % 256),
                "30303",
                chains.clone(),
                role,
            )
        })
        .collect()
}

fn seed_for(nodes: Vec<Node>) -> Seed {
    Seed::new(
        vec![0x11; DEV_ID_LEN],
        nodes,
        &bench_chain(),
        vec![0xb1; BLOCK_HASH_LEN],
    )
}

/// Benchmark session key derivation alone
fn bench_key_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_derivation");
    group.throughput(Throughput::Elements(1));

    let dev_id = [0x11u8; DEV_ID_LEN];
    let block_hash = [0xb1u8; BLOCK_HASH_LEN];
    let chain = bench_chain();

    group.bench_function("derive", |b| {
        b.iter(|| {
            SessionKey::derive(
                black_box(&dev_id),
                black_box(&block_hash),
                black_box(chain.as_bytes()),
            )
        })
    });
    group.finish();
}

/// Benchmark world-state record adaptation
fn bench_pool_adaptation(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_adaptation");

    for &size in &[25usize, 500, 5000] {
        let records = synthetic_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| adapt_pool(black_box(records)).unwrap())
        });
    }
    group.finish();
}

/// Benchmark full derivation over increasing pool sizes
fn bench_session_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_derivation");
    group.sample_size(50); // Fewer samples for the large pools

    for &size in &[25usize, 500, 5000] {
        let seed = seed_for(synthetic_pool(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &seed, |b, seed| {
            b.iter(|| Session::derive(black_box(seed)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_key_derivation,
    bench_pool_adaptation,
    bench_session_derivation,
);

criterion_main!(benches);
