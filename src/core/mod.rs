pub mod solver;

pub use crate::domain::model::{Assessment, Squares, TriangleSides};
