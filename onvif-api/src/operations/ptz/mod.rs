//! PTZ service operations

mod get_configurations;
mod goto_home_position;
mod set_home_position;

pub use get_configurations::*;
pub use goto_home_position::*;
pub use set_home_position::*;
