#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
    C,
}

impl Side {
    pub fn name(self) -> &'static str {
        match self {
            Side::A => "a",
            Side::B => "b",
            Side::C => "c",
        }
    }
}

/// Two legs and a hypotenuse that passed the `<= 0` check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleSides {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Squares {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub sides: TriangleSides,
    pub squares: Squares,
    pub is_right: bool,
}
