//! Retention layer: in-memory disks, the disk array and the encoding volume.

pub mod array;
pub mod disk;
pub mod volume;
