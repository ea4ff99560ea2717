use crate::core::{Assessment, Squares, TriangleSides};
use std::io::Write;

pub fn squares(sides: &TriangleSides) -> Squares {
    Squares {
        a: sides.a * sides.a,
        b: sides.b * sides.b,
        c: sides.c * sides.c,
    }
}

/// Exact comparison of `c` against `sqrt(a^2 + b^2)`. The squares are summed
/// in single precision and the root is taken in double precision. No
/// tolerance is applied.
pub fn is_right_triangle(sides: &TriangleSides) -> bool {
    let sum = sides.a * sides.a + sides.b * sides.b;
    f64::from(sides.c) == f64::from(sum).sqrt()
}

pub fn assess(sides: TriangleSides) -> Assessment {
    let assessment = Assessment {
        sides,
        squares: squares(&sides),
        is_right: is_right_triangle(&sides),
    };
    tracing::debug!(
        "a={} b={} c={} -> right triangle: {}",
        sides.a,
        sides.b,
        sides.c,
        assessment.is_right
    );
    assessment
}

/// Six fractional digits, with non-finite values spelled as C `%f` spells
/// them (`nan`, `-nan`, `inf`, `-inf`).
pub fn format_fixed(value: f32) -> String {
    let value = f64::from(value);
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_nan() {
        format!("{}nan", sign)
    } else if value.is_infinite() {
        format!("{}inf", sign)
    } else {
        format!("{:.6}", value)
    }
}

pub fn write_report<W: Write>(out: &mut W, assessment: &Assessment, verbose: bool) -> std::io::Result<()> {
    if verbose {
        writeln!(out, "a^2 = {}", format_fixed(assessment.squares.a))?;
        writeln!(out, "b^2 = {}", format_fixed(assessment.squares.b))?;
        writeln!(out, "c^2 = {}", format_fixed(assessment.squares.c))?;
    }
    let verdict = if assessment.is_right { "do" } else { "don't" };
    writeln!(out, "Those values {} work", verdict)?;
    out.flush()
}
