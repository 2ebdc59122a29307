use ark_bn254::Fq;
use ark_ff::{Field, UniformRand};
use criterion::{criterion_group, criterion_main, Criterion};
use poseidon_transcript::{Felt252, Transcript};
use rand::{rngs::StdRng, SeedableRng};

// Cheap stand-in round function so the numbers reflect transcript overhead
fn cube_mix(s: [Felt252; 3]) -> [Felt252; 3] {
    let [a, b, c] = s.map(|x| x.pow([3u64]));
    [a + b + b, b + c + c, c + a + a]
}

pub fn bench_transcript_absorb(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let elements: Vec<Fq> = (0..64).map(|_| Fq::rand(&mut rng)).collect();
    let mask: Vec<u32> = (0..64).map(|i| i % 2).collect();

    let mut group = c.benchmark_group("Transcript");
    group.sample_size(100);

    group.bench_function("absorb_many 64 bn254 elements", |b| {
        b.iter(|| {
            let mut transcript: Transcript<Felt252, _> =
                Transcript::from_field(cube_mix, Felt252::from(1u64));
            transcript.absorb_many(&elements, None).unwrap();
            transcript.draw_rlc_coefficient()
        })
    });

    group.bench_function("absorb_many 64 bn254 elements, half masked", |b| {
        b.iter(|| {
            let mut transcript: Transcript<Felt252, _> =
                Transcript::from_field(cube_mix, Felt252::from(1u64));
            transcript
                .absorb_many(&elements, Some(mask.as_slice()))
                .unwrap();
            transcript.draw_rlc_coefficient()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_transcript_absorb);
criterion_main!(benches);
