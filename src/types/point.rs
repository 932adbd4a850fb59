//! Points, quadrants and float-to-pixel rounding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a real-valued coordinate is snapped to a pixel.
///
/// Only the tie case differs: `2.5` becomes `3` under
/// [`RoundingMode::HalfAwayFromZero`] and `2` under
/// [`RoundingMode::HalfToEven`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    #[default]
    HalfAwayFromZero,
    HalfToEven,
}

impl RoundingMode {
    /// Round a coordinate to the nearest pixel.
    #[inline]
    pub fn round(self, v: f64) -> i32 {
        match self {
            RoundingMode::HalfAwayFromZero => v.round() as i32,
            RoundingMode::HalfToEven => v.round_ties_even() as i32,
        }
    }
}

impl FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "half-away-from-zero" => Ok(RoundingMode::HalfAwayFromZero),
            "half-to-even" => Ok(RoundingMode::HalfToEven),
            other => Err(format!(
                "unknown rounding mode '{}' (expected half-away-from-zero or half-to-even)",
                other
            )),
        }
    }
}

/// A real-valued 2D point.
///
/// Serialized as a `[x, y]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Which quadrant (or axis) of the Cartesian plane the point lies in.
    pub fn quadrant(self) -> Quadrant {
        match (self.x, self.y) {
            (x, y) if x > 0.0 && y > 0.0 => Quadrant::First,
            (x, y) if x < 0.0 && y > 0.0 => Quadrant::Second,
            (x, y) if x < 0.0 && y < 0.0 => Quadrant::Third,
            (x, y) if x > 0.0 && y < 0.0 => Quadrant::Fourth,
            (x, y) if x == 0.0 && y == 0.0 => Quadrant::Origin,
            (x, _) if x == 0.0 => Quadrant::YAxis,
            _ => Quadrant::XAxis,
        }
    }

    /// Snap to the nearest pixel.
    pub fn to_pixel(self, rounding: RoundingMode) -> (i32, i32) {
        (rounding.round(self.x), rounding.round(self.y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Parses `x,y`, e.g. `3.5,-2`.
impl FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected 'x,y', got '{}'", s))?;
        let coord = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| format!("bad coordinate '{}': {}", v.trim(), e))
        };
        Ok(Point::new(coord(x)?, coord(y)?))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Location of a point relative to the axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
    Origin,
    XAxis,
    YAxis,
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Quadrant::First => "quadrant I",
            Quadrant::Second => "quadrant II",
            Quadrant::Third => "quadrant III",
            Quadrant::Fourth => "quadrant IV",
            Quadrant::Origin => "origin",
            Quadrant::XAxis => "x-axis",
            Quadrant::YAxis => "y-axis",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_modes_differ_only_on_ties() {
        assert_eq!(RoundingMode::HalfAwayFromZero.round(2.5), 3);
        assert_eq!(RoundingMode::HalfToEven.round(2.5), 2);
        assert_eq!(RoundingMode::HalfAwayFromZero.round(-2.5), -3);
        assert_eq!(RoundingMode::HalfToEven.round(-2.5), -2);
        assert_eq!(RoundingMode::HalfAwayFromZero.round(2.4), 2);
        assert_eq!(RoundingMode::HalfToEven.round(3.5), 4);
    }

    #[test]
    fn test_distance() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn test_quadrants() {
        assert_eq!(Point::new(1.0, 1.0).quadrant(), Quadrant::First);
        assert_eq!(Point::new(-1.0, 1.0).quadrant(), Quadrant::Second);
        assert_eq!(Point::new(-1.0, -1.0).quadrant(), Quadrant::Third);
        assert_eq!(Point::new(1.0, -1.0).quadrant(), Quadrant::Fourth);
        assert_eq!(Point::ORIGIN.quadrant(), Quadrant::Origin);
        assert_eq!(Point::new(0.0, 3.0).quadrant(), Quadrant::YAxis);
        assert_eq!(Point::new(3.0, 0.0).quadrant(), Quadrant::XAxis);
    }

    #[test]
    fn test_to_pixel() {
        assert_eq!(Point::new(1.5, -0.4).to_pixel(RoundingMode::default()), (2, 0));
        assert_eq!(Point::new(1.5, -0.4).to_pixel(RoundingMode::HalfToEven), (2, 0));
        assert_eq!(Point::new(0.5, 0.5).to_pixel(RoundingMode::HalfToEven), (0, 0));
    }

    #[test]
    fn test_serde_pair() {
        let p: Point = serde_yaml::from_str("[3.5, -2]").unwrap();
        assert_eq!(p, Point::new(3.5, -2.0));
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!("3.5,-2".parse::<Point>(), Ok(Point::new(3.5, -2.0)));
        assert_eq!(" 1 , 2 ".parse::<Point>(), Ok(Point::new(1.0, 2.0)));
        assert!("3.5".parse::<Point>().is_err());
        assert!("a,b".parse::<Point>().is_err());

        assert_eq!("half-to-even".parse::<RoundingMode>(), Ok(RoundingMode::HalfToEven));
        assert!("nearest".parse::<RoundingMode>().is_err());
    }
}
