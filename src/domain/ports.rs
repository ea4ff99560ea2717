use crate::domain::model::Side;

pub trait ConfigProvider {
    fn verbose(&self) -> bool;

    /// Converted length for `side`, or `None` when the option was not given.
    fn side(&self, side: Side) -> Option<f32>;
}
