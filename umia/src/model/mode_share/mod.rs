mod modal_distances;
pub mod mode_share_ops;

pub use modal_distances::{ModalDistanceTable, ModalDistances};
