use super::Opponent;
use crate::game::Choice;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// How the computer turns randomness into a throw.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Each choice with probability 1/3.
    #[default]
    Uniform,
    /// Round a continuous draw over [0, 2] to the nearest index.
    /// The middle choice gets half the mass, the endpoints a quarter each.
    Rounded,
}

impl Strategy {
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Choice {
        match self {
            Self::Uniform => Choice::from(rng.random_range(0..3u8)),
            Self::Rounded => Choice::from((rng.random::<f64>() * 2.).round() as u8),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::Rounded => write!(f, "rounded"),
        }
    }
}

/// Random computer opponent.
#[derive(Debug)]
pub struct Robot {
    strategy: Strategy,
    rng: SmallRng,
}

impl Robot {
    pub fn new(strategy: Strategy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self { strategy, rng }
    }
}

impl Opponent for Robot {
    fn throw(&mut self) -> Choice {
        let choice = self.strategy.sample(&mut self.rng);
        log::trace!("robot throws {}", choice);
        choice
    }
}
