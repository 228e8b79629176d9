//! Schere, Stein, Papier.
//!
//! A single interactive session against a random computer opponent.
//! The [`Session`] owns the loop; [`Console`] and [`Opponent`] are the seams
//! where input/output and randomness plug in.
pub mod config;
pub mod console;
pub mod game;
pub mod players;
pub mod session;

pub use config::*;
pub use console::*;
pub use game::*;
pub use players::*;
pub use session::*;

/// Initialize terminal logging on stderr.
/// stdout is reserved for the game transcript.
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    if simplelog::CombinedLogger::init(vec![term]).is_err() {
        eprintln!("logger already initialized");
    }
}
