use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use level_validator::level::{
    Button, ColorPalette, Direction, Entity, Int2, Level, Sauce, Staff, TimeMachine, Wire,
    WireSprite,
};
use level_validator::loader::load_level;
use level_validator::validation::{validate_bytes, validate_level};

/// Generate a level with specific validation scenarios
fn generate_level(entities: usize, scenario: &str) -> Level {
    let mut level = Level {
        version: 0,
        name: "Benchmark".to_string(),
        description: "generated".to_string(),
        color_palette: ColorPalette::Blue,
        explosions: Vec::new(),
        entrance: TimeMachine {
            position: Int2::new(0, 100),
            rotation: Direction::Right,
        },
        exit_position: Int2::new(10, 100),
        entities: Vec::with_capacity(entities),
    };

    match scenario {
        "all_valid" => {
            for i in 0..entities as i64 {
                level.entities.push(Entity::Sauce(Sauce {
                    position: Int2::new(-192 + i % 385, -104 + i / 385),
                }));
            }
        }
        "small_shared_buckets" => {
            // Four staffs per cell: every bucket yields six pair checks.
            for i in 0..entities as i64 {
                level.entities.push(Entity::Staff(Staff {
                    position: Int2::new(-192 + (i / 4) % 385, -104 + i / 4 / 385),
                }));
            }
        }
        "dangling_channels" => {
            for i in 0..entities as i64 {
                let entity = if i % 2 == 0 {
                    Entity::Wire(Wire {
                        position: Int2::new(-192 + i % 385, -104 + i / 385),
                        rotation: Direction::Up,
                        sprite: WireSprite::Straight,
                        channel: i.into(),
                    })
                } else {
                    Entity::Button(Button {
                        position: Int2::new(-192 + i % 385, -104 + i / 385),
                        channel: (i + 1).into(),
                    })
                };
                level.entities.push(entity);
            }
        }
        other => panic!("unknown scenario {other}"),
    }

    level
}

fn bench_validate_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_level");

    for scenario in ["all_valid", "small_shared_buckets", "dangling_channels"] {
        for size in [100usize, 1000, 3998] {
            let level = generate_level(size, scenario);
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(
                BenchmarkId::new(scenario, size),
                &level,
                |b, level| b.iter(|| validate_level(black_box(level))),
            );
        }
    }

    group.finish();
}

fn bench_load_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_level");

    for size in [100usize, 1000, 3998] {
        let level = generate_level(size, "all_valid");
        let bytes = serde_json::to_vec(&level).expect("level should serialize");
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| load_level(black_box(bytes)))
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_bytes");

    let level = generate_level(3998, "all_valid");
    let bytes = serde_json::to_vec(&level).expect("level should serialize");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("full_capacity", |b| {
        b.iter(|| validate_bytes(black_box(&bytes)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_validate_level,
    bench_load_level,
    bench_full_pipeline
);
criterion_main!(benches);
