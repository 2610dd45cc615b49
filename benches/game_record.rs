use codenames_engine::{Game, GameOptions, Snapshot};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn snapshot() -> Snapshot {
    Snapshot {
        seed: 1,
        word_set: (0..4000).map(|i| format!("word{i}")).collect(),
        ..Snapshot::default()
    }
}

fn bench_new_game(c: &mut Criterion) {
    let snap = snapshot();
    c.bench_function("new_game_random_words", |b| {
        b.iter(|| Game::new("bench", black_box(snap.clone()), GameOptions::new().random_words()))
    });
}

fn bench_record_json(c: &mut Criterion) {
    let game = Game::new("bench", snapshot(), GameOptions::new().random_words());
    c.bench_function("record_to_json", |b| {
        b.iter(|| serde_json::to_vec(black_box(&game)).unwrap())
    });
}

fn bench_snapshot_bytes(c: &mut Criterion) {
    let snap = snapshot();
    c.bench_function("snapshot_to_bytes", |b| b.iter(|| black_box(&snap).to_bytes().unwrap()));
}

criterion_group!(benches, bench_new_game, bench_record_json, bench_snapshot_bytes);
criterion_main!(benches);
