//! Render every map of a generated system into an output directory
//!
//! Usage: cargo run --example render_maps [name] [resolution]

use std::path::PathBuf;

use forge::System;
use surface::{write_map, Atlas, NormalEncoding, RingStyle};

fn main() {
    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "the sun".to_string());
    let resolution: usize = args
        .next()
        .and_then(|r| r.parse().ok())
        .unwrap_or(256);

    let mut system = match System::generate(&name) {
        Ok(system) => system,
        Err(err) => {
            eprintln!("generation failed: {}", err);
            std::process::exit(1);
        }
    };

    let out = PathBuf::from("maps");
    std::fs::create_dir_all(&out).expect("create output directory");

    let mut atlas = Atlas::new();
    for id in system.ids().collect::<Vec<_>>() {
        let slug = system.body(id).path.replace('/', "_").replace(' ', "-");
        let surface = atlas.surface(id);

        let color = surface.color_map(&system, resolution);
        write_map(&out.join(format!("{}_color.png", slug)), &color).expect("write color map");

        if let Some(map) = surface.height_map(&system, resolution) {
            write_map(&out.join(format!("{}_height.png", slug)), &map).expect("write height map");
        }
        if let Some(map) = surface.normal_map(&system, resolution, NormalEncoding::Direct) {
            write_map(&out.join(format!("{}_normal.png", slug)), &map).expect("write normal map");
        }
        if let Some(map) = surface.specular_map(&system, resolution) {
            write_map(&out.join(format!("{}_specular.png", slug)), &map)
                .expect("write specular map");
        }
        if let Some(map) = surface.ring_map(&system, resolution, RingStyle::Opacity) {
            write_map(&out.join(format!("{}_ring.png", slug)), &map).expect("write ring map");
        }

        let albedo = surface.refine_albedo(&mut system, resolution);
        println!(
            "{}: maps written, measured albedo {:.3}",
            system.body(id).path,
            albedo
        );
    }
}
