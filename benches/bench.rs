// Criterion benchmarks for Roommate Matcher

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roommate_matcher::core::{
    distance::haversine_distance, Matcher, MatchingEngine, MatchingEngineV1, PageRequest,
};
use roommate_matcher::models::{CleanlinessLevel, GuestFrequency, MatchProfile, SleepSchedule};

fn create_candidate(id: usize, lat: f64, lon: f64) -> MatchProfile {
    MatchProfile {
        user_id: id.to_string(),
        age: 20 + (id % 15) as u8,
        city: "San Francisco".to_string(),
        latitude: lat,
        longitude: lon,
        looking_for_short_term: id % 2 == 0,
        looking_for_long_term: id % 3 != 0,
        move_in_earliest: None,
        move_in_latest: None,
        budget_min: 800 + (id % 10) as u32 * 100,
        budget_max: 1400 + (id % 10) as u32 * 100,
        cleanliness_level: match id % 4 {
            0 => CleanlinessLevel::VeryClean,
            1 => CleanlinessLevel::Clean,
            2 => CleanlinessLevel::Moderate,
            _ => CleanlinessLevel::Relaxed,
        },
        sleep_schedule: match id % 3 {
            0 => SleepSchedule::EarlyBird,
            1 => SleepSchedule::Normal,
            _ => SleepSchedule::NightOwl,
        },
        smoking_ok: id % 5 == 0,
        drinking_ok: true,
        pets_ok: id % 7 == 0,
        guest_frequency: GuestFrequency::Sometimes,
        is_student: id % 2 == 1,
        is_working: id % 2 == 0,
        reputation_score: (id % 101) as u8,
    }
}

fn create_seeker() -> MatchProfile {
    MatchProfile {
        user_id: "seeker".to_string(),
        cleanliness_level: CleanlinessLevel::Clean,
        sleep_schedule: SleepSchedule::Normal,
        looking_for_long_term: true,
        ..create_candidate(1, 37.7749, -122.4194)
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(37.7749),
                black_box(-122.4194),
                black_box(37.80),
                black_box(-122.27),
            )
        });
    });
}

fn bench_calculate_match(c: &mut Criterion) {
    let engine = MatchingEngineV1::default();
    let seeker = create_seeker();
    let candidate = create_candidate(42, 37.80, -122.27);

    c.bench_function("calculate_match", |b| {
        b.iter(|| engine.calculate_match(black_box(&seeker), black_box(&candidate)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::default();
    let seeker = create_seeker();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<MatchProfile> = (0..*candidate_count)
            .map(|i| {
                let lat_offset = (i as f64 * 0.001) % 0.5;
                let lon_offset = (i as f64 * 0.001) % 0.5;
                create_candidate(i, 37.7749 + lat_offset, -122.4194 + lon_offset)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("find_matches", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.find_matches(
                        black_box(&seeker),
                        black_box(&candidates),
                        black_box(PageRequest::default()),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_calculate_match,
    bench_ranking
);

criterion_main!(benches);
