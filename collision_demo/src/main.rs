//! Headless collision demo
//!
//! Moves a player polygon across a terrain polygon and logs the narrow-phase
//! verdict every tick. Per-tick lines are logged at `info`; set
//! `RUST_LOG=trace` to follow individual GJK iterations.
//!
//! ```text
//! collision_demo [scene.toml | scene.ron]
//! ```

mod scene;

use narrow_phase::config::Config;
use narrow_phase::foundation::logging;

use scene::{DemoError, SceneConfig};

fn main() {
    logging::init_with_default(log::LevelFilter::Info);

    if let Err(e) = run_demo() {
        log::error!("Collision demo failed: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_demo() -> Result<(), DemoError> {
    let scene = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading scene from {}", path);
            SceneConfig::load_from_file(&path)?
        }
        None => {
            log::info!("No scene file given, using the built-in pentagon scene");
            SceneConfig::default()
        }
    };

    let reports = scene::run(&scene)?;
    let hits: Vec<u32> = reports.iter().filter(|r| r.colliding).map(|r| r.tick).collect();

    println!("{} tick(s), {} colliding", reports.len(), hits.len());
    match (hits.first(), hits.last()) {
        (Some(first), Some(last)) => println!("first contact at tick {first}, last at tick {last}"),
        _ => println!("no contact"),
    }

    Ok(())
}
