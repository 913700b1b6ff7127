// benches/finder.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use serde_json::{json, Value};

use nt_shop::shop::{classify, find_shop_nodes, normalize};

// Roughly the shape of a logged-in bootstrap: a big user blob with a few
// shop arrays buried in it.
fn synthetic_payload() -> Value {
    let car = |i: usize| json!({ "id": i, "name": format!("Car {i}"), "type": "car",
        "price": i * 1000, "image": format!("https://cdn/cars/{i}.png"),
        "paints": [ { "title": "Red" }, { "title": "Blue" } ] });
    let garage: Vec<Value> = (0..400).map(car).collect();
    let stats: Vec<Value> = (0..2000).map(|i| json!({ "race": i, "wpm": 80 + i % 40 })).collect();
    json!({
        "BOOTSTRAP": {
            "user": { "garage": garage, "stats": stats },
            "shop": {
                "daily": (0..8).map(car).collect::<Vec<_>>(),
                "nextDay": (8..16).map(car).collect::<Vec<_>>(),
            }
        }
    })
}

fn bench_finder(c: &mut Criterion) {
    let payload = normalize(Some(synthetic_payload()));

    c.bench_function("find_shop_nodes", |b| {
        b.iter(|| {
            let found = find_shop_nodes(black_box(&payload));
            black_box(found.len())
        })
    });

    c.bench_function("find_and_classify", |b| {
        b.iter(|| {
            let found = find_shop_nodes(black_box(&payload));
            let buckets = classify(&found);
            black_box(buckets.current.len() + buckets.upcoming.len())
        })
    });
}

criterion_group!(benches, bench_finder);
criterion_main!(benches);
