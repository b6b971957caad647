//! Headless shooting-gallery simulation
//!
//! Loads a placement document, fires the configured volleys at the scene,
//! and logs every elimination and ricochet. Doubles as a smoke test for
//! the asset pipeline: mesh and texture problems surface in the load
//! report before any shot is fired.

mod config;

use config::{SimConfig, VolleyConfig};
use gallery_engine::foundation::logging;
use gallery_engine::foundation::math::{utils, Quat};
use gallery_engine::prelude::*;
use rand::Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "resources/gallery.toml".to_string());
    let config = SimConfig::load_or_default(&config_path);

    let (mut scene, report) = SceneLoader::load_scene(&config.scene.placement)?;
    if !report.skipped.is_empty() {
        log::warn!(
            "{} placement entries skipped due to asset errors",
            report.skipped.len()
        );
    }
    if scene.is_empty() {
        log::error!("scene {} has no usable objects", config.scene.placement);
        return Ok(());
    }

    run_simulation(&config, &mut scene);
    Ok(())
}

/// Fires every configured volley and reports the outcome.
fn run_simulation(config: &SimConfig, scene: &mut Scene) {
    let sim = &config.simulation;

    let targets_at_start = count_targets(scene);
    let mut rng = rand::thread_rng();
    let mut timer = Timer::new();
    let mut projectiles = ProjectileSystem::new().with_surface_offset(sim.surface_offset);
    let mut shots = 0u32;
    let mut eliminations = 0u32;
    let mut ricochets = 0u32;
    let mut total_steps = 0u32;

    for (index, volley) in config.volleys.iter().enumerate() {
        log::info!("volley {} of {}", index + 1, config.volleys.len());
        fire_volley(&mut projectiles, volley, &mut rng, &mut shots);

        let mut steps = 0u32;
        while !projectiles.is_empty() && steps < sim.max_steps {
            timer.update();
            for impact in projectiles.update(sim.timestep, scene) {
                match impact.kind {
                    ImpactKind::Eliminated => {
                        eliminations += 1;
                        log::info!(
                            "eliminated {} at ({:.2}, {:.2}, {:.2})",
                            impact.object,
                            impact.point.x,
                            impact.point.y,
                            impact.point.z
                        );
                    }
                    ImpactKind::Reflected => {
                        ricochets += 1;
                        log::debug!(
                            "ricochet off {} (normal ({:.2}, {:.2}, {:.2}))",
                            impact.object,
                            impact.normal.x,
                            impact.normal.y,
                            impact.normal.z
                        );
                    }
                }
            }
            steps += 1;
        }
        total_steps += steps;
    }

    log::info!(
        "fired {shots} shots: {eliminations} eliminated, {ricochets} ricochets, {}/{} targets standing, {total_steps} steps, {:.1} ms wall time",
        count_targets(scene),
        targets_at_start,
        timer.total_time() * 1000.0
    );
}

fn fire_volley<R: Rng>(
    projectiles: &mut ProjectileSystem,
    volley: &VolleyConfig,
    rng: &mut R,
    shots: &mut u32,
) {
    for _ in 0..volley.shots {
        let direction = jitter(rng, volley.aim, volley.spread_degrees);
        match projectiles.launch(volley.origin, direction, volley.speed, volley.max_lifetime) {
            Ok(()) => *shots += 1,
            Err(error) => log::error!("shot rejected: {error}"),
        }
    }
}

fn count_targets(scene: &Scene) -> usize {
    scene
        .objects()
        .iter()
        .filter(|object| object.eliminable)
        .count()
}

/// Applies a random pitch and yaw deviation within the configured spread.
fn jitter<R: Rng>(rng: &mut R, aim: Vec3, spread_degrees: f32) -> Vec3 {
    if spread_degrees <= 0.0 {
        return aim;
    }
    let half = utils::deg_to_rad(spread_degrees);
    let pitch = rng.gen_range(-half..=half);
    let yaw = rng.gen_range(-half..=half);
    Quat::from_euler_angles(pitch, yaw, 0.0) * aim
}
