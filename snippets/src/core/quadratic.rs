//! Real roots of `a·x² + b·x + c = 0`.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    /// `a == 0`: the equation is not quadratic.
    NotQuadratic,
    /// Negative discriminant.
    None,
    One(f64),
    Two(f64, f64),
}

/// Solve by the sign of the discriminant.
///
/// With two roots the first is `(-b + √Δ) / 2a` and the second
/// `(-b - √Δ) / 2a`.
pub fn solve(a: f64, b: f64, c: f64) -> Roots {
    if a == 0.0 {
        return Roots::NotQuadratic;
    }
    let delta = discriminant(a, b, c);
    if delta < 0.0 {
        Roots::None
    } else if delta == 0.0 {
        Roots::One(-b / (2.0 * a))
    } else {
        let root = delta.sqrt();
        Roots::Two((-b + root) / (2.0 * a), (-b - root) / (2.0 * a))
    }
}

pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b.powi(2) - 4.0 * a * c
}
