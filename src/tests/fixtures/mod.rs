pub mod assignments;
pub mod events;
pub mod state;
pub mod walks;
