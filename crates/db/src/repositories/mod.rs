pub mod door_detail_repo;
pub mod door_repo;
pub mod new_door_repo;

pub use door_detail_repo::DoorDetailRepo;
pub use door_repo::DoorRepo;
pub use new_door_repo::NewDoorRepo;
