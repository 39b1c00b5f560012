//! Import a YAVC scene file and inspect the result.
//!
//! Run with: cargo run --bin yavc_import -- path/to/map.yavc

mod cli;

use anyhow::{Context, Result};
use yavc_core::scene::ObjectData;
use yavc_core::yavc::{import_yavc, plan_from_string};
use yavc_core::Scene;

use crate::cli::{CliArgs, USAGE};

fn main() -> Result<()> {
    env_logger::init();

    let args = CliArgs::parse(std::env::args())?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let options = args.import_options()?;
    log::debug!("Import options: {:?}", options);

    if args.plan_only {
        let content = std::fs::read_to_string(&args.input)
            .with_context(|| format!("Reading {}", args.input.display()))?;
        let plan = plan_from_string(&content, &options)
            .with_context(|| format!("Planning {}", args.input.display()))?;
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let name = args
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unnamed");
    let mut scene = Scene::new(name);

    println!("Importing YAVC file: {}", args.input.display());
    let summary = import_yavc(&args.input, &mut scene, &options)
        .with_context(|| format!("Importing {}", args.input.display()))?;

    println!("\n=== Scene: {} ===", scene.name);
    println!("Entities: {}", summary.entities);
    println!("Instances: {}", summary.instances);
    println!("Env cubemaps: {}", summary.env_cubemaps);
    println!("Lights: {}", summary.lights);
    println!("Ambients: {}", summary.ambients);
    println!("Total objects: {}", summary.total());

    println!("\n--- Objects ---");
    for (id, object) in scene.linked_objects() {
        let pos = object.transform.location;
        let detail = match &object.data {
            ObjectData::Light(light) => format!(" energy {:.1}", light.energy),
            ObjectData::Speaker { sound, .. } => scene
                .sound(*sound)
                .map(|s| format!(" sound {}", s.name))
                .unwrap_or_default(),
            _ => String::new(),
        };
        println!(
            "  [{}] {} ({:?}) at ({:.2}, {:.2}, {:.2}){}",
            id.0, object.name, object.object_type, pos.x, pos.y, pos.z, detail
        );
        for (key, value) in object.properties.iter() {
            println!("       {} = {}", key, value);
        }
    }

    if !scene.sounds.is_empty() {
        println!("\n--- Sounds ---");
        for sound in &scene.sounds {
            println!("  {} ({})", sound.name, sound.path);
        }
    }

    Ok(())
}
