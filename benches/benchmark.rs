// Performance benchmarks for the scoutX retrieval pipeline
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use scoutx_core::{schema, FeatureVector, Foot, PlayerId, PlayerRecord, RoleClassifier, StandardScaler};
use scoutx_engine::QueryFilters;
use scoutx_storage::ScoutContext;

const POSITIONS: [&str; 4] = ["GK", "DEF", "MID", "FWD"];

fn random_record(rng: &mut impl Rng, id: u32) -> PlayerRecord {
    let features = FeatureVector::new(
        (0..schema::DIM)
            .map(|_| rng.random_range(30.0f32..95.0f32))
            .collect(),
    );
    PlayerRecord {
        id: PlayerId(id),
        name: format!("Player {id}"),
        club: "Bench FC".to_string(),
        nationality: "Benchland".to_string(),
        foot: if rng.random_bool(0.25) { Foot::Left } else { Foot::Right },
        position: POSITIONS[rng.random_range(0..POSITIONS.len())].to_string(),
        image_url: None,
        age: rng.random_range(17..38),
        height_cm: rng.random_range(160.0..200.0),
        weight_kg: rng.random_range(60.0..95.0),
        value_eur: rng.random_range(100_000.0..100_000_000.0),
        overall: rng.random_range(50..95),
        features,
    }
}

fn build_context(size: u32) -> ScoutContext {
    let mut rng = StdRng::seed_from_u64(42);
    let corpus: Vec<PlayerRecord> = (0..size).map(|i| random_record(&mut rng, i)).collect();
    let vectors: Vec<FeatureVector> = corpus.iter().map(|r| r.features.clone()).collect();
    let scaler = StandardScaler::fit(&vectors).unwrap();
    let classifier = RoleClassifier::new(
        POSITIONS.iter().map(|p| p.to_string()).collect(),
        POSITIONS
            .iter()
            .enumerate()
            .map(|(i, _)| FeatureVector::new(vec![40.0 + 10.0 * i as f32; schema::DIM]))
            .collect(),
    )
    .unwrap();
    ScoutContext::from_parts(corpus, scaler, classifier).unwrap()
}

fn benchmark_index_query(c: &mut Criterion) {
    let context = build_context(10_000);
    let query = context
        .scaler()
        .transform(&context.player(PlayerId(7)).unwrap().features)
        .unwrap();

    c.bench_function("index_query_k20_10k", |b| {
        b.iter(|| {
            let results = context.index().query(black_box(&query), 20).unwrap();
            black_box(results);
        });
    });
}

fn benchmark_similar_to(c: &mut Criterion) {
    let context = build_context(10_000);
    let filters = QueryFilters {
        max_age: Some(28),
        max_budget: Some(50_000_000.0),
        ..QueryFilters::default()
    };

    c.bench_function("similar_to_filtered_10k", |b| {
        b.iter(|| {
            let results = context
                .recommender()
                .similar_to(black_box(PlayerId(7)), filters.clone())
                .unwrap();
            black_box(results);
        });
    });
}

criterion_group!(benches, benchmark_index_query, benchmark_similar_to);
criterion_main!(benches);
