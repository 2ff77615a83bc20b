pub mod crossover;
pub mod mutation;
pub mod population;
pub mod search;
pub mod selection;
pub mod session;

pub use crossover::*;
pub use mutation::*;
pub use population::*;
pub use session::*;
