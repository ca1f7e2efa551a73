/*
 * Game Module
 *
 * The simulation state: a fixed set of queens and beasts created lazily on
 * the first tick, the parameters they move by, and the one random generator
 * every draw comes from. Each tick moves all queens, then all beasts, in
 * collection order, each dood seeing the moves already made this tick.
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::dood::{Dood, DoodId, Species};
use crate::error::SimResult;
use crate::params::{SimulationParams, SpeciesParams};
use crate::physics;
use crate::surface::Surface;
use crate::viewport::Viewport;

pub struct Game {
    inited: bool,
    queens: Vec<Dood>,
    beasts: Vec<Dood>,
    params: SimulationParams,
    rng: StdRng,
    seed: u64,
    ticks: u64,
}

impl Game {
    pub fn new(params: SimulationParams) -> SimResult<Self> {
        params.validate()?;

        let seed = params.seed.unwrap_or_else(clock_seed);
        log::info!("Seeding simulation with {}", seed);

        Ok(Self {
            inited: false,
            queens: Vec::new(),
            beasts: Vec::new(),
            params,
            rng: StdRng::seed_from_u64(seed),
            seed,
            ticks: 0,
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.inited
    }

    pub fn queens(&self) -> &[Dood] {
        &self.queens
    }

    pub fn beasts(&self) -> &[Dood] {
        &self.beasts
    }

    pub fn get(&self, id: DoodId) -> Option<&Dood> {
        match id.species {
            Species::Queen => self.queens.get(id.index),
            Species::Beast => self.beasts.get(id.index),
        }
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    // Live tuning of one species. Counts and edge settings stay as `new` validated them.
    pub fn update_species(&mut self, species: Species, constants: SpeciesParams) -> SimResult<()> {
        constants.validate(species.name())?;
        match species {
            Species::Queen => self.params.queen = constants,
            Species::Beast => self.params.beast = constants,
        }
        log::debug!("{} constants now {:?}", species.name(), constants);
        Ok(())
    }

    pub fn set_draw_queens(&mut self, draw_queens: bool) {
        self.params.draw_queens = draw_queens;
    }

    pub fn set_show_debug(&mut self, show_debug: bool) {
        self.params.show_debug = show_debug;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.params.pause_simulation = paused;
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    // Create every dood at a random spot inside the viewport. Runs once.
    pub fn init(&mut self, viewport: Viewport) {
        if self.inited {
            return;
        }

        let rng = &mut self.rng;
        self.queens = (0..self.params.queen_count)
            .map(|_| random_dood(rng, viewport, Species::Queen))
            .collect();
        self.beasts = (0..self.params.beast_count)
            .map(|_| random_dood(rng, viewport, Species::Beast))
            .collect();

        self.inited = true;
        log::info!(
            "Created {} queens and {} beasts in {} * {}",
            self.queens.len(),
            self.beasts.len(),
            viewport.width as i64,
            viewport.height as i64
        );
    }

    // Advance the simulation by one tick
    pub fn iterate(&mut self, viewport: Viewport) {
        if !self.inited {
            self.init(viewport);
        }

        // Queens move in place so later queens chase this tick's positions
        for i in 0..self.queens.len() {
            let next = physics::step(
                &self.queens[i],
                DoodId::queen(i),
                &self.queens,
                &self.params,
                viewport,
                &mut self.rng,
            );
            self.queens[i] = next;
        }

        let queens = &self.queens;
        for (i, beast) in self.beasts.iter_mut().enumerate() {
            let id = DoodId::beast(i);
            *beast = physics::step(beast, id, queens, &self.params, viewport, &mut self.rng);
        }

        self.ticks += 1;
    }

    // Clear to the background and plot beasts (and queens when enabled) as
    // single pixels. Returns the number of pixels plotted.
    pub fn draw(&self, viewport: Viewport, surface: &mut impl Surface) -> usize {
        surface.set_fill(self.params.background);
        surface.fill_rect(0, 0, viewport.width as i64, viewport.height as i64);

        surface.set_fill(self.params.beast_color);
        for beast in &self.beasts {
            let (x, y) = beast.pixel();
            surface.fill_pixel(x, y);
        }
        let mut plotted = self.beasts.len();

        if self.params.draw_queens {
            surface.set_fill(self.params.queen_color);
            for queen in &self.queens {
                let (x, y) = queen.pixel();
                surface.fill_pixel(x, y);
            }
            plotted += self.queens.len();
        }

        plotted
    }
}

fn random_dood(rng: &mut StdRng, viewport: Viewport, species: Species) -> Dood {
    let x = rng.gen::<f64>() * viewport.width;
    let y = rng.gen::<f64>() * viewport.height;
    Dood::new(x, y, species)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
