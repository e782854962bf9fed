//! Scene description and the headless tick loop

use narrow_phase::config::{Config, ConfigError};
use narrow_phase::prelude::*;
use serde::{Deserialize, Serialize};

/// Which engine a scene is checked with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// `collides_2d` on the `(x, y)` projection
    Planar,
    /// Full 3D `collides`
    Spatial,
}

/// A moving player polygon and a fixed terrain polygon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub mode: Mode,
    pub ticks: u32,
    /// Player offset applied at the start of every tick
    pub velocity: [f32; 3],
    pub player: Vec<[f32; 3]>,
    pub terrain: Vec<[f32; 3]>,
    pub gjk: GjkConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Planar,
            ticks: 40,
            velocity: [3.0, 0.0, 0.0],
            player: vec![[-40.0, 0.0, 0.0], [-20.0, 0.0, 0.0], [-30.0, -15.0, 0.0]],
            terrain: vec![
                [50.0, 0.0, 0.0],
                [70.0, 0.0, 0.0],
                [80.0, -20.0, 0.0],
                [60.0, -35.0, 0.0],
                [40.0, -20.0, 0.0],
            ],
            gjk: GjkConfig::default(),
        }
    }
}

impl Config for SceneConfig {}

/// Errors from loading or running a scene
#[derive(thiserror::Error, Debug)]
pub enum DemoError {
    #[error("Scene error: {0}")]
    Config(#[from] ConfigError),

    #[error("Collision error: {0}")]
    Collision(#[from] CollisionError),
}

/// Verdict for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub tick: u32,
    pub player_center: Vec3,
    pub colliding: bool,
}

fn to_points(points: &[[f32; 3]]) -> Vec<Vec3> {
    points.iter().map(|p| Vec3::from(*p)).collect()
}

/// Step the player `ticks` times, checking against the terrain after each move
pub fn run(scene: &SceneConfig) -> Result<Vec<TickReport>, DemoError> {
    let checker = CollisionChecker::with_config(scene.gjk)?;
    let mut player = MeshCollider::new(to_points(&scene.player))?;
    let terrain = MeshCollider::new(to_points(&scene.terrain))?;
    let velocity = Vec3::from(scene.velocity);

    log::info!(
        "Running {} tick(s) in {:?} mode: {} player point(s), {} terrain point(s)",
        scene.ticks,
        scene.mode,
        player.len(),
        terrain.len()
    );

    let mut reports = Vec::with_capacity(scene.ticks as usize);
    for tick in 1..=scene.ticks {
        player.translate(&velocity);

        let colliding = match scene.mode {
            Mode::Planar => checker.collides_2d(&player, &terrain)?,
            Mode::Spatial => checker.collides(&player, &terrain)?,
        };

        let player_center = player.center();
        log::info!(
            "tick {:3}: player at ({:.1}, {:.1}) {}",
            tick,
            player_center.x,
            player_center.y,
            if colliding { "colliding" } else { "not colliding" }
        );
        reports.push(TickReport { tick, player_center, colliding });
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use narrow_phase::config::ConfigFormat;

    fn colliding_ticks(reports: &[TickReport]) -> Vec<u32> {
        reports.iter().filter(|r| r.colliding).map(|r| r.tick).collect()
    }

    #[test]
    fn test_default_scene_collides_while_passing_through() {
        let reports = run(&SceneConfig::default()).unwrap();

        assert_eq!(reports.len(), 40);
        assert_eq!(colliding_ticks(&reports), (24..=36).collect::<Vec<_>>());
    }

    #[test]
    fn test_flat_scene_never_collides_in_spatial_mode() {
        // Coplanar polygons have no volume; the planar engine is the one to use
        let scene = SceneConfig { mode: Mode::Spatial, ..SceneConfig::default() };
        let reports = run(&scene).unwrap();
        assert!(colliding_ticks(&reports).is_empty());
    }

    #[test]
    fn test_empty_player_is_rejected() {
        let scene = SceneConfig { player: Vec::new(), ..SceneConfig::default() };
        assert!(matches!(
            run(&scene),
            Err(DemoError::Collision(CollisionError::InvalidCollider { .. }))
        ));
    }

    #[test]
    fn test_invalid_gjk_settings_are_rejected() {
        let scene = SceneConfig {
            gjk: GjkConfig::default().with_max_iterations(0),
            ..SceneConfig::default()
        };
        assert!(matches!(run(&scene), Err(DemoError::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn test_mode_parses_from_toml() {
        let scene = SceneConfig::from_str_as("mode = \"spatial\"\nticks = 3\n", ConfigFormat::Toml).unwrap();

        assert_eq!(scene.mode, Mode::Spatial);
        assert_eq!(scene.ticks, 3);
        assert_eq!(scene.terrain, SceneConfig::default().terrain);
    }

    #[test]
    fn test_scene_survives_ron_file() {
        let file = tempfile::Builder::new().suffix(".ron").tempfile().unwrap();
        let scene = SceneConfig { ticks: 7, ..SceneConfig::default() };

        scene.save_to_file(file.path()).unwrap();
        let loaded = SceneConfig::load_from_file(file.path()).unwrap();

        assert_eq!(loaded, scene);
    }

    #[test]
    fn test_bundled_scenes_load() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scenes");
        let toml = SceneConfig::load_from_file(dir.join("pentagon.toml")).unwrap();
        let ron = SceneConfig::load_from_file(dir.join("pentagon.ron")).unwrap();

        assert_eq!(toml, SceneConfig::default());
        assert_eq!(ron, SceneConfig::default());
    }
}
