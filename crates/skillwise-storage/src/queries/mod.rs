pub mod activity_ops;
pub mod rows;
pub mod skill_crud;
pub mod snapshot_ops;
