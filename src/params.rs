/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains every tunable
 * of the queen/beast simulation: entity counts, per-species movement
 * constants, edge avoidance and colours. Species constants can be changed
 * live through the UI; counts are fixed once the simulation has started.
 */

use serde::{Deserialize, Serialize};

use crate::error::{invalid, SimResult};
use crate::{DEFAULT_EDGE_PUSH, MARGIN};

// An RGB colour as stored in parameter files
pub type Color = [u8; 3];

// Movement constants for one species
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeciesParams {
    pub max_speed: f64,
    pub accel_modifier: f64,
    pub turn_probability: f64,
}

impl SpeciesParams {
    pub const QUEEN: SpeciesParams = SpeciesParams {
        max_speed: 5.6,
        accel_modifier: 0.7,
        turn_probability: 0.0015,
    };

    pub const BEAST: SpeciesParams = SpeciesParams {
        max_speed: 7.0,
        accel_modifier: 0.56,
        turn_probability: 0.0025,
    };

    pub fn validate(&self, name: &str) -> SimResult<()> {
        if !(self.max_speed > 0.0) {
            return Err(invalid(format!(
                "{} max_speed must be positive, got {}",
                name, self.max_speed
            )));
        }
        if !(self.accel_modifier >= 0.0) {
            return Err(invalid(format!(
                "{} accel_modifier must not be negative, got {}",
                name, self.accel_modifier
            )));
        }
        if !(0.0..=1.0).contains(&self.turn_probability) {
            return Err(invalid(format!(
                "{} turn_probability must lie in [0, 1], got {}",
                name, self.turn_probability
            )));
        }
        Ok(())
    }
}

// Parameters for the simulation, loaded from TOML and adjusted via UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub queen_count: usize,
    pub beast_count: usize,
    pub queen: SpeciesParams,
    pub beast: SpeciesParams,
    pub margin: f64,
    pub edge_push: f64,
    // Fixed generator seed; None seeds from the clock
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub background: Color,
    pub beast_color: Color,
    pub queen_color: Color,
    pub draw_queens: bool,
    pub show_debug: bool,
    pub pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            queen_count: 20,
            beast_count: 1500,
            queen: SpeciesParams::QUEEN,
            beast: SpeciesParams::BEAST,
            margin: MARGIN,
            edge_push: DEFAULT_EDGE_PUSH,
            seed: None,
            background: [0, 0, 0],
            beast_color: [0, 255, 0],
            queen_color: [255, 0, 0],
            draw_queens: false,
            show_debug: false,
            pause_simulation: false,
        }
    }
}

impl SimulationParams {
    // Reject parameter sets the movement rule cannot run with
    pub fn validate(&self) -> SimResult<()> {
        if self.queen_count == 0 {
            return Err(invalid("queen_count must be at least 1, every dood chases a queen"));
        }
        self.queen.validate("queen")?;
        self.beast.validate("beast")?;
        if !(self.margin >= 0.0) {
            return Err(invalid(format!("margin must not be negative, got {}", self.margin)));
        }
        if !(self.edge_push >= 0.0) {
            return Err(invalid(format!("edge_push must not be negative, got {}", self.edge_push)));
        }
        Ok(())
    }

    // Get parameter ranges for UI sliders
    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f64> {
        0.5..=20.0
    }

    pub fn get_accel_modifier_range() -> std::ops::RangeInclusive<f64> {
        0.0..=3.0
    }

    pub fn get_turn_probability_range() -> std::ops::RangeInclusive<f64> {
        0.0..=0.05
    }
}
