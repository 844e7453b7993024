use chrono::Weekday;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use graha_vedic_base::{
    LunarNode, ayanamsha_deg, lunar_node_deg, moon_phase_from_elongation, nakshatra_from_longitude,
    nakshatra_from_tropical, planetary_hour, rashi_from_longitude, rashi_from_tropical,
    tithi_from_elongation,
};

fn ayanamsha_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("ayanamsha");
    group.bench_function("ayanamsha_deg", |b| b.iter(|| ayanamsha_deg(black_box(jd))));
    group.bench_function("rahu", |b| {
        b.iter(|| lunar_node_deg(LunarNode::Rahu, black_box(jd)))
    });
    group.finish();
}

fn zodiac_bench(c: &mut Criterion) {
    let lon = 123.456;
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(lon)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.bench_function("rashi_from_tropical", |b| {
        b.iter(|| rashi_from_tropical(black_box(lon), black_box(jd)))
    });
    group.bench_function("nakshatra_from_tropical", |b| {
        b.iter(|| nakshatra_from_tropical(black_box(lon), black_box(jd)))
    });
    group.finish();
}

fn lunation_bench(c: &mut Criterion) {
    let elong = 211.75;

    let mut group = c.benchmark_group("lunation");
    group.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(elong)))
    });
    group.bench_function("moon_phase_from_elongation", |b| {
        b.iter(|| moon_phase_from_elongation(black_box(elong)))
    });
    group.bench_function("planetary_hour", |b| {
        b.iter(|| planetary_hour(black_box(Weekday::Thu), black_box(21)))
    });
    group.finish();
}

criterion_group!(benches, ayanamsha_bench, zodiac_bench, lunation_bench);
criterion_main!(benches);
