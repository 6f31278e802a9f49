pub mod blobs;
pub mod crypto;
pub mod misc;
