use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use the_mind::core::{MindAction, MindConfig};
use the_mind::env::MindSession;
use the_mind::training::{EpisodeRunner, ThresholdPolicy};

fn config(players: usize) -> MindConfig {
    MindConfig::new()
        .with_players(players)
        .with_hand_size(8)
        .with_intention_size(2)
        .with_stall_limit(3)
}

fn session_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    for players in [2usize, 4, 8] {
        let config = config(players);

        group.bench_function(BenchmarkId::new("reset", players), |b| {
            let mut session = MindSession::initialize(config.clone()).unwrap();
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                black_box(session.reset(Some(seed)).unwrap())
            })
        });

        group.bench_function(BenchmarkId::new("pass", players), |b| {
            let mut session = MindSession::initialize(config.clone()).unwrap();
            session.reset(Some(0)).unwrap();
            let action = MindAction::pass().with_intention(&[0.25, 0.75]);
            b.iter(|| black_box(session.step(&action).unwrap()))
        });

        group.bench_function(BenchmarkId::new("threshold_episode", players), |b| {
            let mut session = MindSession::initialize(config.clone()).unwrap();
            let runner = EpisodeRunner::new(&config);
            let mut policy = ThresholdPolicy::new(0.1, config.intention_size);
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                black_box(runner.run(&mut session, &mut policy, Some(seed)).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, session_step);
criterion_main!(benches);
