pub mod choice;
pub use choice::*;

pub mod outcome;
pub use outcome::*;

pub mod rules;
pub use rules::*;

pub mod turn;
pub use turn::*;
