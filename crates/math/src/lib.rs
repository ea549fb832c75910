pub mod vec;
pub mod ops;

pub use vec::{Vector, Vector2, Vector3};
pub use ops::Orthogonal;
