//! Rolling-circle curve evaluation.
//!
//! The fixed circle sits at the origin. A rolling circle travels along its
//! inside (hypo) or outside (epi) without slipping, and the traced point is
//! rigidly attached to the rolling circle at a fixed distance from its
//! centre. Angles are integer degrees throughout and are only converted to
//! radians at the trig call sites.

use crate::errors::ParameterError;
use crate::float_types::{DEG2RAD, Real};
use nalgebra::{Point2, Vector2};

/// Which side of the fixed circle the rolling circle travels on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveMode {
    /// Rolling circle inside the fixed circle (hypotrochoid)
    Hypo,
    /// Rolling circle outside the fixed circle (epitrochoid)
    Epi,
}

/// A validated trochoid parameter set.
///
/// **Mathematical Foundation: Trochoid Parameterization**
///
/// With fixed radius `R`, rolling radius `r`, point offset `ρ` and phase `φ`,
/// the centre of the rolling circle at angle θ is
/// ```text
/// centre(θ) = Rr · (cos θ, sin θ),   Rr = R − r (hypo) or R + r (epi)
/// ```
/// and the traced point is offset from it by
/// ```text
/// ψ(θ) = (Rr/r)·θ + φ
/// offset(θ) = ρ · (cos ψ, −sin ψ)    (hypo)
/// offset(θ) = ρ · (−cos ψ, −sin ψ)   (epi)
/// ```
/// The cosine sign flip in epi mode starts the point on the tangency point of
/// the two circles when ρ = r, which is what makes the cusps of an epicycloid
/// sit on the fixed circle.
///
/// For integer radii the ratio `R:r` is rational, so the curve closes after
/// `360·r/gcd(R, r)` degrees; see [`Trochoid::sweep_degrees`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trochoid {
    fixed_radius: u32,
    rolling_radius: u32,
    point_offset: u32,
    phase: i32,
    mode: CurveMode,
}

/// Evaluated prefix of a trochoid: the rolling-circle centre and the locus
/// point for every integer degree from 0 up to and including the query angle.
///
/// Both vectors are non-empty (the θ = 0 entry is always present) and have
/// equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub centers: Vec<Point2<Real>>,
    pub points: Vec<Point2<Real>>,
}

impl Trochoid {
    /// Validates and builds a trochoid.
    ///
    /// # Parameters
    /// - `fixed_radius`: radius `R` of the fixed circle, must be positive
    /// - `rolling_radius`: radius `r` of the rolling circle, must be positive;
    ///   in [`CurveMode::Hypo`] it must also be smaller than `R`
    /// - `point_offset`: distance `ρ` of the traced point from the
    ///   rolling-circle centre, must be positive
    /// - `phase`: angle `φ` of the traced point from the contact point of the
    ///   two circles, in degrees
    /// - `mode`: inside or outside the fixed circle
    pub fn new(
        fixed_radius: u32,
        rolling_radius: u32,
        point_offset: u32,
        phase: i32,
        mode: CurveMode,
    ) -> Result<Self, ParameterError> {
        if fixed_radius == 0 {
            return Err(ParameterError::ZeroRadius("fixed"));
        }
        if rolling_radius == 0 {
            // ψ(θ) divides by the rolling radius
            return Err(ParameterError::ZeroRadius("rolling"));
        }
        if point_offset == 0 {
            return Err(ParameterError::ZeroOffset);
        }
        if mode == CurveMode::Hypo && rolling_radius >= fixed_radius {
            return Err(ParameterError::RollingTooLarge {
                fixed: fixed_radius,
                rolling: rolling_radius,
            });
        }
        Ok(Self {
            fixed_radius,
            rolling_radius,
            point_offset,
            phase,
            mode,
        })
    }

    pub const fn fixed_radius(&self) -> u32 {
        self.fixed_radius
    }

    pub const fn rolling_radius(&self) -> u32 {
        self.rolling_radius
    }

    pub const fn point_offset(&self) -> u32 {
        self.point_offset
    }

    pub const fn phase(&self) -> i32 {
        self.phase
    }

    pub const fn mode(&self) -> CurveMode {
        self.mode
    }

    /// Radius of the circle traced by the rolling-circle centre:
    /// `R − r` inside, `R + r` outside. Always positive for valid parameters.
    pub const fn center_radius(&self) -> Real {
        match self.mode {
            CurveMode::Hypo => (self.fixed_radius - self.rolling_radius) as Real,
            CurveMode::Epi => (self.fixed_radius + self.rolling_radius) as Real,
        }
    }

    /// Rolling-circle centre at `theta` degrees.
    pub fn center(&self, theta: u32) -> Point2<Real> {
        let t = theta as Real * DEG2RAD;
        let rr = self.center_radius();
        Point2::new(rr * t.cos(), rr * t.sin())
    }

    /// The traced point at `theta` degrees.
    pub fn point(&self, theta: u32) -> Point2<Real> {
        self.center(theta) + self.point_vector(theta)
    }

    /// Offset of the traced point from the rolling-circle centre at `theta`.
    fn point_vector(&self, theta: u32) -> Vector2<Real> {
        let psi =
            (self.center_radius() / self.rolling_radius as Real * theta as Real
                + self.phase as Real)
                * DEG2RAD;
        let rho = self.point_offset as Real;
        let cos_sign = match self.mode {
            CurveMode::Hypo => 1.0,
            CurveMode::Epi => -1.0,
        };
        Vector2::new(cos_sign * rho * psi.cos(), -rho * psi.sin())
    }

    /// Evaluates the full prefix θ = 0, 1, …, `up_to` at one-degree
    /// resolution. Each frame redraws the entire locus so far, so the whole
    /// ordered sequence is returned in one call.
    pub fn trace(&self, up_to: u32) -> Trace {
        let len = up_to as usize + 1;
        let mut centers = Vec::with_capacity(len);
        let mut points = Vec::with_capacity(len);
        for theta in 0..=up_to {
            centers.push(self.center(theta));
            points.push(self.point(theta));
        }
        Trace { centers, points }
    }

    /// Degrees of driving angle until the curve closes: the smallest full
    /// number of turns after which the rolling circle returns to its start,
    /// `360·r/gcd(R, r)`, plus one so a sweep includes the closing degree.
    pub const fn sweep_degrees(&self) -> u32 {
        360 * self.rolling_radius / gcd(self.fixed_radius, self.rolling_radius) + 1
    }
}

/// Fixed sweep bound for curves drawn over a single turn of the driving
/// angle, without waiting for closure.
pub const FULL_TURN_DEGREES: u32 = 360;

const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
