pub mod ai;
pub mod collision;
pub mod input;
pub mod integrity;
pub mod movement;
pub mod scoring;

pub use ai::*;
pub use collision::*;
pub use input::*;
pub use integrity::*;
pub use movement::*;
pub use scoring::*;
