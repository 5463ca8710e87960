//! Degree-based trigonometry and angle wrapping.

/// Sine of an angle in degrees.
pub fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Cosine of an angle in degrees.
pub fn cos_deg(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// Tangent of an angle in degrees.
pub fn tan_deg(deg: f64) -> f64 {
    deg.to_radians().tan()
}

/// Arc-sine in degrees. `x` must lie in [-1, 1].
pub fn asin_deg(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Arc-cosine in degrees. `x` must lie in [-1, 1].
pub fn acos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Arc-tangent in degrees, in (-90, 90).
pub fn atan_deg(x: f64) -> f64 {
    x.atan().to_degrees()
}

/// Wrap a value into [0, period).
///
/// Inside one period of the range this is a single add or subtract of
/// `period`.
pub fn normalize(value: f64, period: f64) -> f64 {
    let r = value % period;
    if r < 0.0 {
        let w = r + period;
        // -tiny + period rounds to period
        if w >= period { 0.0 } else { w }
    } else {
        r
    }
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    normalize(deg, 360.0)
}

/// Normalize a time of day to [0, 24) hours.
pub fn normalize_24(hours: f64) -> f64 {
    normalize(hours, 24.0)
}
