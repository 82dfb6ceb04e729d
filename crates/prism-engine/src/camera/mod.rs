//! Camera model producing the global projection and per-object model-view
//! matrices consumed by the vertex stage.

mod camera;

pub use camera::{Camera, CameraDirection};
