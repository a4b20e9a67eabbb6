pub mod door;
pub mod door_detail;
pub mod new_door;
