//! Triangle classification by side lengths.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleKind {
    Equilateral,
    Isosceles,
    Scalene,
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Equilateral => "equilateral",
            Self::Isosceles => "isosceles",
            Self::Scalene => "scalene",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub kind: TriangleKind,
    /// Triangle inequality holds for all three sides.
    pub valid: bool,
}

/// Classify three sides.
///
/// The kind is computed from side equality alone, so impossible triangles
/// still get a label; `valid` tells them apart.
pub fn classify(a: i64, b: i64, c: i64) -> Triangle {
    let (x, y, z) = (i128::from(a), i128::from(b), i128::from(c));
    let valid = x + y > z && x + z > y && y + z > x;
    let kind = if a == b && b == c {
        TriangleKind::Equilateral
    } else if a == b || a == c || b == c {
        TriangleKind::Isosceles
    } else {
        TriangleKind::Scalene
    };
    Triangle { kind, valid }
}
