//! Simulation configuration

use gallery_engine::config::Config;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Full simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Scene settings
    pub scene: SceneConfig,

    /// Stepping settings
    pub simulation: SimulationConfig,

    /// Volleys fired in order
    pub volleys: Vec<VolleyConfig>,
}

/// Where the scene comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Placement document path
    pub placement: String,
}

/// How the simulation is stepped
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seconds advanced per step
    pub timestep: f32,

    /// Step bound per volley, guards against endless ricochets
    pub max_steps: u32,

    /// Distance reflected projectiles restart from the struck surface
    pub surface_offset: f32,
}

/// One volley of shots from a fixed firing position
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VolleyConfig {
    /// Muzzle position in world space
    pub origin: Vector3<f32>,

    /// Nominal aim direction
    pub aim: Vector3<f32>,

    /// Number of shots fired
    pub shots: u32,

    /// Maximum random deviation from the aim, degrees per axis
    pub spread_degrees: f32,

    /// Projectile speed (units per second)
    pub speed: f32,

    /// Projectile lifetime (seconds)
    pub max_lifetime: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            simulation: SimulationConfig::default(),
            volleys: vec![VolleyConfig::default()],
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            placement: "resources/scenes/range.txt".to_string(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 120.0,
            max_steps: 2000,
            surface_offset: 1e-3,
        }
    }
}

impl Default for VolleyConfig {
    fn default() -> Self {
        Self {
            origin: Vector3::new(0.0, 1.5, 8.0),
            aim: Vector3::new(0.0, 0.0, -1.0),
            shots: 4,
            spread_degrees: 4.0,
            speed: 30.0,
            max_lifetime: 3.0,
        }
    }
}

impl Config for SimConfig {}
