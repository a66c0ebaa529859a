//! Level clock and win/lose evaluation, run once per simulated second

use serde::{Deserialize, Serialize};

use super::animal::Animal;

/// Result of a level attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Ongoing,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::Ongoing
    }
}

/// Global level countdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelClock {
    pub remaining_seconds: u32,
}

impl LevelClock {
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining_seconds: seconds,
        }
    }

    /// One clock step: global countdown, every animal countdown, then outcome
    pub fn tick_second(&mut self, animals: &mut [Animal]) -> Outcome {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        for animal in animals.iter_mut() {
            animal.tick_countdown();
        }
        evaluate(self, animals)
    }
}

/// First match wins: clock out, everyone vanished, anyone expired
pub fn evaluate(clock: &LevelClock, animals: &[Animal]) -> Outcome {
    if clock.remaining_seconds == 0 || animals.iter().all(Animal::is_vanished) {
        Outcome::Won
    } else if animals.iter().any(Animal::is_expired) {
        Outcome::Lost
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::animal::AnimalState;
    use crate::sim::puzzle::Puzzle;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn animals(n: usize, countdown: u32) -> Vec<Animal> {
        let mut rng = Pcg32::seed_from_u64(11);
        (0..n)
            .map(|i| Animal::new(i, countdown, Puzzle::generate(&mut rng)))
            .collect()
    }

    #[test]
    fn test_clock_out_wins() {
        let mut clock = LevelClock::new(1);
        let mut animals = animals(5, 30);
        assert_eq!(clock.tick_second(&mut animals), Outcome::Won);
        assert_eq!(clock.remaining_seconds, 0);
    }

    #[test]
    fn test_clock_out_beats_expiry() {
        let mut clock = LevelClock::new(1);
        let mut animals = animals(5, 1);
        assert_eq!(clock.tick_second(&mut animals), Outcome::Won);
    }

    #[test]
    fn test_expired_animal_loses() {
        let mut clock = LevelClock::new(90);
        let mut animals = animals(1, 1);
        assert_eq!(clock.tick_second(&mut animals), Outcome::Lost);
        assert_eq!(animals[0].countdown, 0);
        assert_eq!(clock.remaining_seconds, 89);
    }

    #[test]
    fn test_all_vanished_wins() {
        let mut clock = LevelClock::new(90);
        let mut animals = animals(3, 0);
        for a in &mut animals {
            a.state = AnimalState::Vanished;
        }
        assert_eq!(clock.tick_second(&mut animals), Outcome::Won);
    }

    #[test]
    fn test_vanished_animals_keep_countdown() {
        let mut clock = LevelClock::new(90);
        let mut animals = animals(2, 5);
        animals[1].state = AnimalState::Vanished;
        assert_eq!(clock.tick_second(&mut animals), Outcome::Ongoing);
        assert_eq!(animals[0].countdown, 4);
        assert_eq!(animals[1].countdown, 5);
    }

    #[test]
    fn test_vanished_at_zero_does_not_lose() {
        let clock = LevelClock::new(10);
        let mut animals = animals(2, 0);
        animals[0].state = AnimalState::Vanished;
        animals[1].countdown = 4;
        assert_eq!(evaluate(&clock, &animals), Outcome::Ongoing);
    }
}
