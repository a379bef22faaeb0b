use serde::{Deserialize, Serialize};

/// Data-driven tuning for the golf simulation.
///
/// Defaults target a 128x64 handheld playfield; tests override
/// individual fields for deterministic scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GolfConfig {
    /// Fraction of velocity lost per second (velocity-proportional decay).
    pub friction_rate: f32,
    /// Aim rotation rate while a direction button is held (rad/s).
    pub aim_rate: f32,
    /// Power oscillation rate while charging (units/s).
    pub power_rate: f32,
    /// Lower bound of the shot-power range.
    pub min_power: f32,
    /// Upper bound of the shot-power range.
    pub max_power: f32,
    /// Ball radius (map pixels).
    pub ball_radius: f32,
    /// Hole capture radius; the ball sinks when its center is this close.
    pub hole_radius: f32,
    /// Speed below which the ball counts as "slow" for stop detection.
    pub stop_speed: f32,
    /// How long speed must stay below `stop_speed` before the ball stops.
    pub stop_dwell_secs: f32,
    /// Physics sub-steps per motion update (bounds per-check travel distance).
    pub substeps: u32,
    /// Extra friction applications per sub-step while in a sand trap.
    pub sand_friction_multiplier: u32,
    /// Treadmill belt force (velocity units/s added while overlapping).
    pub treadmill_speed: f32,
    /// Radius of the degenerate circle used for wall end-cap bounces.
    pub wall_cap_radius: f32,
    /// How long the pause chord must be held to open the pause menu.
    pub pause_hold_secs: f32,
    /// Map-explorer pan speed (pixels/s).
    pub pan_speed: f32,
}

impl Default for GolfConfig {
    fn default() -> Self {
        Self {
            friction_rate: 0.6,
            aim_rate: 1.75,
            power_rate: 100.0,
            min_power: 20.0,
            max_power: 150.0,
            ball_radius: 2.0,
            hole_radius: 3.0,
            stop_speed: 4.0,
            stop_dwell_secs: 1.0,
            substeps: 2,
            sand_friction_multiplier: 4,
            treadmill_speed: 50.0,
            wall_cap_radius: 1.0,
            pause_hold_secs: 1.0,
            pan_speed: 60.0,
        }
    }
}

impl GolfConfig {
    /// Midpoint of the power range; the charge meter starts here.
    pub fn default_power(&self) -> f32 {
        (self.min_power + self.max_power) / 2.0
    }

    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("FAIRWAY_CONFIG")
            && let Ok(contents) = std::fs::read_to_string(&path)
            && let Ok(config) = toml::from_str::<Self>(&contents)
        {
            tracing::info!(%path, "loaded config");
            return config;
        }
        if let Ok(contents) = std::fs::read_to_string("config/fairway.toml")
            && let Ok(config) = toml::from_str::<Self>(&contents)
        {
            tracing::info!("loaded config from config/fairway.toml");
            return config;
        }
        tracing::debug!("no config file found, using defaults");
        Self::default()
    }
}
