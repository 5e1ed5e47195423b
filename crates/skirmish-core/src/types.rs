//! Fundamental geometric types.
//!
//! Angles follow the engine convention: 0 points north (+y) and angles grow
//! clockwise. Only [`PolarVector::from_cartesian`] and
//! [`PolarVector::to_cartesian`] know about that; everything else works in
//! polar form and stays convention-free.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::ops::Add;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::POLAR_EPSILON;

/// Wrap an angle into (-PI, PI].
///
/// Non-finite input is returned unchanged rather than looping forever.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    let mut a = angle;
    if a.abs() > 4.0 * TAU {
        a %= TAU;
    }
    while a > PI {
        a -= TAU;
    }
    while a <= -PI {
        a += TAU;
    }
    a
}

/// Shortest signed rotation taking `from` onto `to`.
pub fn shortest_turn(from: f64, to: f64) -> f64 {
    normalize_angle(to - from)
}

/// Immutable 2D vector in (radius, angle) form.
///
/// The angle is stored normalized. A negative radius at construction is
/// folded into the equivalent vector pointing the other way, so the radius
/// is never negative. An infinite radius is permitted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "RawPolar")]
pub struct PolarVector {
    radius: f64,
    angle: f64,
}

/// Wire form of [`PolarVector`]; deserialized values go through `new`.
#[derive(Deserialize)]
struct RawPolar {
    radius: f64,
    angle: f64,
}

impl From<RawPolar> for PolarVector {
    fn from(raw: RawPolar) -> Self {
        PolarVector::new(raw.radius, raw.angle)
    }
}

impl PolarVector {
    pub const ZERO: PolarVector = PolarVector {
        radius: 0.0,
        angle: 0.0,
    };

    pub fn new(radius: f64, angle: f64) -> Self {
        if radius < 0.0 {
            Self {
                radius: -radius,
                angle: normalize_angle(angle + PI),
            }
        } else {
            Self {
                radius,
                angle: normalize_angle(angle),
            }
        }
    }

    /// A vector of infinite length along `angle`.
    pub fn unreachable(angle: f64) -> Self {
        Self::new(f64::INFINITY, angle)
    }

    pub fn from_cartesian(x: f64, y: f64) -> Self {
        Self::new(x.hypot(y), -y.atan2(x) + FRAC_PI_2)
    }

    pub fn from_dvec2(v: DVec2) -> Self {
        Self::from_cartesian(v.x, v.y)
    }

    pub fn to_cartesian(&self) -> DVec2 {
        let (sin, cos) = self.angle.sin_cos();
        DVec2::new(self.radius * sin, self.radius * cos)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn is_finite(&self) -> bool {
        self.radius.is_finite()
    }

    /// Same angle, different radius.
    pub fn with_radius(&self, radius: f64) -> Self {
        Self::new(radius, self.angle)
    }

    /// Tolerance comparison on radius and circular angle difference.
    pub fn approx_eq(&self, other: &PolarVector, epsilon: f64) -> bool {
        let radius_close = if self.radius.is_infinite() || other.radius.is_infinite() {
            self.radius == other.radius
        } else {
            (self.radius - other.radius).abs() < epsilon
        };
        radius_close && shortest_turn(other.angle, self.angle).abs() < epsilon
    }
}

impl Default for PolarVector {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for PolarVector {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, POLAR_EPSILON)
    }
}

impl Add for PolarVector {
    type Output = PolarVector;

    fn add(self, rhs: PolarVector) -> PolarVector {
        PolarVector::from_dvec2(self.to_cartesian() + rhs.to_cartesian())
    }
}

/// Rectangular battlefield, origin at the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub width: f64,
    pub height: f64,
}

impl FieldBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x <= self.width && point.y <= self.height
    }
}

impl Default for FieldBounds {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// What the engine reports about the agent's own robot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyStatus {
    pub x: f64,
    pub y: f64,
    /// Body heading (radians, 0 = north, clockwise).
    pub heading: f64,
    pub gun_heading: f64,
    pub radar_heading: f64,
    /// Signed speed along the heading.
    pub velocity: f64,
    pub energy: f64,
}

impl BodyStatus {
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}
