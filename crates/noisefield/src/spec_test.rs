use keystream::RandomStream;

use crate::spec::{NoiseKind, NoiseSpec};

#[test]
fn draw_is_deterministic_per_key() {
    let stream = RandomStream::new("noise determinism");
    let a = NoiseSpec::draw(&stream, "height:0", NoiseKind::Layered, (0.5, 8.0));
    let b = NoiseSpec::draw(&stream, "height:0", NoiseKind::Layered, (0.5, 8.0));
    assert_eq!(a, b);
}

#[test]
fn distinct_keys_give_distinct_descriptors() {
    let stream = RandomStream::new("noise independence");
    let a = NoiseSpec::draw(&stream, "height:0", NoiseKind::Layered, (0.5, 8.0));
    let b = NoiseSpec::draw(&stream, "height:1", NoiseKind::Layered, (0.5, 8.0));
    assert_ne!(a.seed, b.seed);
}

#[test]
fn parameters_respect_their_ranges() {
    let stream = RandomStream::new("noise ranges");
    for i in 0..50 {
        let spec = NoiseSpec::draw(
            &stream,
            &format!("probe:{}", i),
            NoiseKind::Ridged,
            (0.25, 16.0),
        );
        assert!(spec.frequency >= 0.25 && spec.frequency < 16.0);
        assert!(spec.lacunarity >= 1.8 && spec.lacunarity < 2.4);
        assert!((3..8).contains(&spec.octaves));
        assert!(spec.persistence >= 0.35 && spec.persistence < 0.65);
    }
}

#[test]
fn draw_any_picks_each_kind_eventually() {
    let stream = RandomStream::new("noise kinds");
    let mut seen = [false; 3];
    for i in 0..60 {
        let spec = NoiseSpec::draw_any(&stream, &format!("any:{}", i), (1.0, 4.0));
        match spec.kind {
            NoiseKind::Basic => seen[0] = true,
            NoiseKind::Layered => seen[1] = true,
            NoiseKind::Ridged => seen[2] = true,
        }
    }
    assert!(seen.iter().all(|s| *s), "kinds seen: {:?}", seen);
}
