use crate::document::BodyDocument;
use crate::system::System;

#[test]
fn root_star_has_no_parent_and_links_to_itself() {
    let system = System::generate("vega").unwrap();
    let root = system.body(system.root());
    assert!(root.is_star());
    assert!(root.parent.is_none());
    assert!(root.orbit.is_none());
    assert_eq!(root.star, Some(system.root()));
}

#[test]
fn parent_and_star_links_are_consistent() {
    let system = System::generate("epsilon eridani").unwrap();
    for (id, body) in system.bodies() {
        for &child in &body.children {
            assert_eq!(system.body(child).parent, Some(id));
            assert_eq!(system.body(child).star, Some(system.root()));
        }
    }
}

#[test]
fn children_preserve_discovery_order() {
    // Arena ids grow monotonically, so insertion order shows as ascending ids
    let system = System::generate("arcturus").unwrap();
    for (_, body) in system.bodies() {
        for pair in body.children.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }
}

#[test]
fn paths_qualify_names_through_the_tree() {
    let system = System::generate("altair").unwrap();
    for (_, body) in system.bodies() {
        for &child_id in &body.children {
            let child = system.body(child_id);
            assert_eq!(child.path, format!("{}/{}", body.path, child.name));
        }
    }
}

#[test]
fn every_body_except_the_root_orbits() {
    let system = System::generate("betelgeuse").unwrap();
    for (id, body) in system.bodies() {
        if id == system.root() {
            assert!(body.orbit.is_none());
        } else {
            assert!(body.orbit.is_some(), "{} has no orbit", body.path);
        }
    }
}

#[test]
fn documents_only_carry_applicable_fields() {
    let system = System::generate("the sun").unwrap();
    let docs = system.documents();

    let star = &docs[0];
    assert_eq!(star.kind, "star");
    assert!(star.luminosity.is_some());
    assert!(star.orbit.is_none());
    assert!(star.atmosphere.is_none());
    assert!(star.ring.is_none());
    assert!(star.life.is_none());

    for doc in &docs[1..] {
        assert!(doc.orbit.is_some(), "{} document lacks orbit", doc.path);
        assert!(doc.luminosity.is_none());
        match doc.kind.as_str() {
            "rocky planet" => {
                assert!(doc.life.is_some());
                assert!(doc.ring.is_none());
            }
            "giant planet" => {
                assert!(doc.atmosphere.is_some());
                assert!(doc.life.is_none());
                assert!(doc.ocean.is_none());
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }
}

#[test]
fn ring_document_appears_only_for_ringed_bodies() {
    let system = System::generate("rigel kentaurus").unwrap();
    for (id, body) in system.bodies() {
        let doc = BodyDocument::of(&system, id);
        assert_eq!(doc.ring.is_some(), body.has_ring(), "{}", body.path);
    }
}

#[test]
fn document_json_omits_inapplicable_keys() {
    let system = System::generate("van maanen").unwrap();
    let json = serde_json::to_value(BodyDocument::of(&system, system.root())).unwrap();
    let object = json.as_object().unwrap();
    assert!(!object.contains_key("orbit"));
    assert!(!object.contains_key("atmosphere"));
    assert!(!object.contains_key("ring"));
    assert!(object.contains_key("luminosity"));
}

#[test]
fn satellite_lists_mirror_the_children() {
    let system = System::generate("vega").unwrap();
    for (id, body) in system.bodies() {
        let doc = BodyDocument::of(&system, id);
        assert_eq!(doc.satellites.len(), body.children.len());
    }
}
