pub mod door;
pub mod new_door;
pub mod report;
