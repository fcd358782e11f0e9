// engine.rs - One-generation stepping plus frame-rate-independent pacing

use std::time::{Duration, Instant};

use crate::grid::Field;
use crate::rules;

/// One cell whose state flipped during a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Change {
    pub x: i32,
    pub y: i32,
    pub alive: bool,
}

/// Owns the generation pair, the change set of the latest step, and the
/// pacing state the host polls once per display frame.
pub struct Engine {
    field: Field,
    changes: Vec<Change>,
    generation: u64,
    last_update: Instant,
    update_interval: Duration,
    paused: bool,
}

impl Engine {
    pub fn new(width: i32, height: i32, steps_per_second: f64) -> Self {
        Engine {
            field: Field::new(width, height),
            changes: Vec::new(),
            generation: 0,
            last_update: Instant::now(),
            update_interval: Duration::from_secs_f64(1.0 / steps_per_second),
            paused: false,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cells flipped by the latest step, valid until the next one.
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// True when the host should run a step: not paused and the target
    /// interval has elapsed since the last one.
    pub fn should_step(&self, now: Instant) -> bool {
        !self.paused && now.duration_since(self.last_update) > self.update_interval
    }

    /// Runs at most one step. Returns whether one ran, so the host knows
    /// the change set is fresh.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.should_step(now) {
            return false;
        }
        self.last_update = now;
        self.step();
        true
    }

    /// Advances one generation: a full synchronous pass over the grid, then
    /// a buffer swap. The current generation is never mutated mid-pass, and
    /// the change buffer is reused across steps.
    pub fn step(&mut self) {
        self.changes.clear();
        for y in 0..self.field.height() {
            for x in 0..self.field.width() {
                let alive = self.field.is_alive(x, y);
                let next = rules::next_state(alive, self.field.live_neighbors(x, y));
                self.field.set_next(x, y, next);
                if next != alive {
                    self.changes.push(Change { x, y, alive: next });
                }
            }
        }
        self.field.swap();
        self.generation += 1;
        log::trace!(
            "generation {}: {} cells changed",
            self.generation,
            self.changes.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    fn live_cells(field: &Field) -> Vec<(i32, i32)> {
        let mut cells = Vec::new();
        for y in 0..field.height() {
            for x in 0..field.width() {
                if field.is_alive(x, y) {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    #[test]
    fn empty_field_is_a_fixed_point() {
        let mut engine = Engine::new(10, 10, 6.0);
        engine.step();
        assert!(engine.changes().is_empty());
        assert!(live_cells(engine.field()).is_empty());
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn block_is_a_still_life() {
        let mut engine = Engine::new(10, 10, 6.0);
        patterns::create_pattern(engine.field_mut(), patterns::BLOCK, 3, 3);
        let before = live_cells(engine.field());
        engine.step();
        assert!(engine.changes().is_empty());
        assert_eq!(live_cells(engine.field()), before);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut engine = Engine::new(10, 10, 6.0);
        patterns::create_pattern(engine.field_mut(), patterns::BLINKER, 3, 3);
        let horizontal = live_cells(engine.field());
        engine.step();
        assert_ne!(live_cells(engine.field()), horizontal);
        assert!(!engine.changes().is_empty());
        engine.step();
        assert_eq!(live_cells(engine.field()), horizontal);
    }

    #[test]
    fn glider_translates_one_cell_per_four_steps() {
        let mut engine = Engine::new(12, 12, 6.0);
        patterns::create_pattern(engine.field_mut(), patterns::GLIDER, 2, 2);
        let start = live_cells(engine.field());
        for _ in 0..4 {
            engine.step();
        }
        let expected: Vec<(i32, i32)> = start.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        assert_eq!(live_cells(engine.field()), expected);
    }

    #[test]
    fn glider_crosses_the_toroidal_seam() {
        let mut engine = Engine::new(8, 8, 6.0);
        patterns::create_pattern(engine.field_mut(), patterns::GLIDER, 2, 2);
        let start = live_cells(engine.field());
        // 32 steps move the glider (+8, +8), a full lap on an 8x8 torus.
        for _ in 0..32 {
            engine.step();
        }
        assert_eq!(live_cells(engine.field()), start);
    }

    #[test]
    fn pause_gates_the_pacing_clock() {
        let mut engine = Engine::new(4, 4, 6.0);
        let later = Instant::now() + Duration::from_secs(1);
        assert!(engine.should_step(later));
        engine.toggle_pause();
        assert!(engine.is_paused());
        assert!(!engine.should_step(later));
        assert!(!engine.tick(later));
        assert_eq!(engine.generation(), 0);
        engine.toggle_pause();
        assert!(engine.tick(later));
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn tick_waits_for_the_step_interval() {
        let mut engine = Engine::new(4, 4, 6.0);
        let soon = Instant::now() + Duration::from_millis(1);
        assert!(!engine.tick(soon));
        let later = Instant::now() + Duration::from_secs(1);
        assert!(engine.tick(later));
        // The clock was just reset, so the same instant is now too early.
        assert!(!engine.tick(later));
    }
}
