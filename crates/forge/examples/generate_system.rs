//! Generate a system and dump its body documents as JSON
//!
//! Usage: cargo run --example generate_system [name]

use forge::System;

fn main() {
    let name = std::env::args().nth(1).unwrap_or_else(|| "the sun".to_string());

    let system = match System::generate(&name) {
        Ok(system) => system,
        Err(err) => {
            eprintln!("generation failed: {}", err);
            std::process::exit(1);
        }
    };

    println!("system {:?}: {} bodies", system.name(), system.len());
    for (_, body) in system.bodies() {
        let indent = body.path.matches('/').count();
        let orbit = body
            .orbit
            .as_ref()
            .map(|o| format!(" at {:.3e} m", o.semi_major_axis))
            .unwrap_or_default();
        println!(
            "{}{} ({}){}",
            "  ".repeat(indent + 1),
            body.name,
            body.kind_name(),
            orbit
        );
    }

    let json = serde_json::to_string_pretty(&system.documents()).expect("documents serialize");
    println!("{}", json);
}
