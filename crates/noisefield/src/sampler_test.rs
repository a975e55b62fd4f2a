use crate::sampler::Sampler;
use crate::spec::{NoiseKind, NoiseSpec};

fn spec(kind: NoiseKind, seed: u64) -> NoiseSpec {
    NoiseSpec {
        kind,
        frequency: 2.0,
        lacunarity: 2.0,
        octaves: 4,
        persistence: 0.5,
        seed,
    }
}

#[test]
fn sampling_is_pure() {
    let sampler = Sampler::new(&spec(NoiseKind::Layered, 99));
    let a = sampler.sample(0.4, 1.3);
    let b = sampler.sample(0.4, 1.3);
    assert_eq!(a, b);
}

#[test]
fn same_seed_same_field() {
    let a = Sampler::new(&spec(NoiseKind::Basic, 7));
    let b = Sampler::new(&spec(NoiseKind::Basic, 7));
    for i in 0..50 {
        let lat = -1.5 + i as f64 * 0.06;
        assert_eq!(a.sample(lat, 2.0), b.sample(lat, 2.0));
    }
}

#[test]
fn different_seeds_decorrelate_the_field() {
    let a = Sampler::new(&spec(NoiseKind::Layered, 1));
    let b = Sampler::new(&spec(NoiseKind::Layered, 2));
    let mut differing = 0;
    for i in 0..100 {
        let lon = i as f64 * 0.07;
        if (a.sample(0.3, lon) - b.sample(0.3, lon)).abs() > 1e-12 {
            differing += 1;
        }
    }
    assert!(differing > 90, "only {} of 100 samples differ", differing);
}

#[test]
fn layered_output_is_bounded() {
    let sampler = Sampler::new(&spec(NoiseKind::Layered, 42));
    for i in 0..400 {
        let lat = -1.5 + (i % 20) as f64 * 0.15;
        let lon = (i / 20) as f64 * 0.3;
        let v = sampler.sample(lat, lon);
        assert!(v.abs() <= 1.0 + 1e-9, "layered sample {} out of range", v);
    }
}

#[test]
fn ridged_output_never_exceeds_one() {
    let sampler = Sampler::new(&spec(NoiseKind::Ridged, 42));
    for i in 0..400 {
        let lat = -1.5 + (i % 20) as f64 * 0.15;
        let lon = (i / 20) as f64 * 0.3;
        let v = sampler.sample(lat, lon);
        assert!(v <= 1.0 + 1e-9, "ridged sample {} above unit", v);
    }
}

#[test]
fn field_varies_across_the_sphere() {
    let sampler = Sampler::new(&spec(NoiseKind::Basic, 5));
    let reference = sampler.sample(0.21, 0.73);
    let mut varied = false;
    for i in 1..50 {
        if (sampler.sample(0.21 + i as f64 * 0.11, 0.73 + i as f64 * 0.17) - reference).abs()
            > 1e-6
        {
            varied = true;
            break;
        }
    }
    assert!(varied, "noise field is constant");
}
