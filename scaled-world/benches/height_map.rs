use criterion::{Criterion, criterion_group, criterion_main};
use scaled_world::{Generator, PerlinNoiseSampler};

fn criterion_benchmark(c: &mut Criterion) {
    let sampler = PerlinNoiseSampler::default();
    c.bench_function("single octave sample", |b| {
        b.iter(|| sampler.sample(std::hint::black_box(12.34), std::hint::black_box(56.78)));
    });

    let mut generator = Generator::new(256, 256).expect("valid dimensions");
    generator.set_noise_octaves(6).expect("valid octaves");
    c.bench_function("256x256 height map", |b| {
        b.iter(|| generator.generate_map());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
