pub mod human;
pub use human::*;

pub mod robot;
pub use robot::*;

use crate::game::Choice;

/// Source of the computer's throws.
pub trait Opponent {
    fn throw(&mut self) -> Choice;
}

impl<O: Opponent + ?Sized> Opponent for &mut O {
    fn throw(&mut self) -> Choice {
        (**self).throw()
    }
}
