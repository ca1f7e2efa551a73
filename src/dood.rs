/*
 * Dood Module
 *
 * This module defines the Dood struct, the single kind of moving entity in
 * the simulation. A dood is either a Queen or a Beast; both follow the same
 * movement rule with their own species constants. Identity and targets are
 * indices into the game's entity collections rather than references.
 */

use crate::params::{SimulationParams, SpeciesParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Queen,
    Beast,
}

impl Species {
    pub fn name(self) -> &'static str {
        match self {
            Species::Queen => "queen",
            Species::Beast => "beast",
        }
    }

    // Movement constants for this species
    pub fn constants(self, params: &SimulationParams) -> &SpeciesParams {
        match self {
            Species::Queen => &params.queen,
            Species::Beast => &params.beast,
        }
    }
}

// Where a dood lives in the game's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoodId {
    pub species: Species,
    pub index: usize,
}

impl DoodId {
    pub fn queen(index: usize) -> Self {
        Self { species: Species::Queen, index }
    }

    pub fn beast(index: usize) -> Self {
        Self { species: Species::Beast, index }
    }

    // True when `target` (an index into the queens) points back at this dood
    pub fn is_target(&self, target: usize) -> bool {
        self.species == Species::Queen && self.index == target
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dood {
    pub x: f64,
    pub y: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub species: Species,
    // Index into the queen collection
    pub target: Option<usize>,
}

impl Dood {
    // A dood at rest with nothing to chase
    pub fn new(x: f64, y: f64, species: Species) -> Self {
        Self {
            x,
            y,
            speed_x: 0.0,
            speed_y: 0.0,
            species,
            target: None,
        }
    }

    pub fn speed(&self) -> f64 {
        (self.speed_x * self.speed_x + self.speed_y * self.speed_y).sqrt()
    }

    // Position snapped to the pixel grid
    pub fn pixel(&self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }
}
