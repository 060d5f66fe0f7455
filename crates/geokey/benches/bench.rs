use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use geokey::{City, CityId, CityIndex, GeoAddress};

// Number of coordinate pairs encoded per benchmark iteration.
const TOTAL_IDS: usize = 4096;

fn synthetic_coords() -> Vec<(f64, f64)> {
    (0..TOTAL_IDS)
        .map(|i| {
            let lat = -90.0 + (i as f64 * 0.0437).rem_euclid(180.0);
            let lon = -180.0 + (i as f64 * 0.0871).rem_euclid(360.0);
            (lat, lon)
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let coords = synthetic_coords();

    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));
    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for &(lat, lon) in &coords {
                black_box(CityId::from_degrees(black_box(lat), black_box(lon)));
            }
        })
    });
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut index = CityIndex::new();
    for (lat, lon) in synthetic_coords() {
        index.insert(City::new(GeoAddress::new(lat, lon)));
    }

    let mut group = c.benchmark_group("nearest");
    group.throughput(Throughput::Elements(1));
    group.bench_function(format!("cities/{}", index.len()), |b| {
        b.iter(|| black_box(index.nearest(black_box(32.0853), black_box(34.7818))))
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_nearest);
criterion_main!(benches);
