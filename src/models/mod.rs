// Core data models for funil
// These structs represent the domain entities

pub mod lead;
pub mod stage;
pub mod task;
pub mod team;

pub use lead::*;
pub use stage::*;
pub use task::*;
pub use team::*;
