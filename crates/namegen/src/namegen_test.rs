use keystream::RandomStream;

use crate::NameForge;

#[test]
fn generation_is_deterministic_per_key() {
    let forge = NameForge::new();
    let stream = RandomStream::new("naming determinism");
    assert_eq!(
        forge.generate(&stream, "sat:0"),
        forge.generate(&stream, "sat:0")
    );
}

#[test]
fn names_are_lowercase_ascii() {
    let forge = NameForge::new();
    let stream = RandomStream::new("naming case");
    for i in 0..100 {
        let name = forge.generate(&stream, &format!("sat:{}", i));
        assert!(
            name.chars().all(|c| c.is_ascii_lowercase()),
            "name {:?} has non-lowercase characters",
            name
        );
    }
}

#[test]
fn names_respect_length_bounds() {
    let forge = NameForge::new();
    let stream = RandomStream::new("naming length");
    for i in 0..200 {
        let name = forge.generate(&stream, &format!("sat:{}", i));
        assert!(
            name.len() >= 2 && name.len() <= 11,
            "name {:?} has unexpected length",
            name
        );
    }
}

#[test]
fn discriminators_mostly_avoid_collisions() {
    let forge = NameForge::new();
    let stream = RandomStream::new("naming spread");
    let names: std::collections::HashSet<String> = (0..100)
        .map(|i| forge.generate(&stream, &format!("sat:{}", i)))
        .collect();
    // Collisions are allowed but should be the exception
    assert!(names.len() > 60, "only {} distinct names in 100", names.len());
}

#[test]
fn different_roots_give_different_name_streams() {
    let forge = NameForge::new();
    let a = RandomStream::new("system alpha");
    let b = RandomStream::new("system beta");
    let differing = (0..20)
        .filter(|i| {
            forge.generate(&a, &format!("sat:{}", i)) != forge.generate(&b, &format!("sat:{}", i))
        })
        .count();
    assert!(differing > 10, "name streams track roots too closely");
}
