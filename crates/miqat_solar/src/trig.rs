//! Trigonometry in degrees.
//!
//! Every angle crossing this crate's API is in degrees; radians stay inside
//! these helpers.

pub fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

pub fn cos_deg(deg: f64) -> f64 {
    deg.to_radians().cos()
}

pub fn tan_deg(deg: f64) -> f64 {
    deg.to_radians().tan()
}

/// Arc cosine in degrees, [0, 180].
pub fn acos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Arc cotangent in degrees, `atan(1/x)`.
///
/// Range is (-90, 90]; `acot_deg(0.0)` is 90.
pub fn acot_deg(x: f64) -> f64 {
    (1.0 / x).atan().to_degrees()
}

/// Two-argument arc tangent in degrees, (-180, 180].
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { (r + 360.0) % 360.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sin_cos_quadrants() {
        assert!((sin_deg(30.0) - 0.5).abs() < 1e-12);
        assert!((cos_deg(60.0) - 0.5).abs() < 1e-12);
        assert!((sin_deg(-90.0) + 1.0).abs() < 1e-15);
    }

    #[test]
    fn tan_45() {
        assert!((tan_deg(45.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn acos_bounds() {
        assert_eq!(acos_deg(1.0), 0.0);
        assert!((acos_deg(-1.0) - 180.0).abs() < 1e-12);
        assert!(acos_deg(1.5).is_nan());
    }

    #[test]
    fn acot_values() {
        assert!((acot_deg(1.0) - 45.0).abs() < 1e-12);
        assert!((acot_deg(0.0) - 90.0).abs() < 1e-12);
        assert!((acot_deg(-1.0) + 45.0).abs() < 1e-12);
    }

    #[test]
    fn atan2_quadrants() {
        assert!((atan2_deg(1.0, 0.0) - 90.0).abs() < 1e-12);
        assert!((atan2_deg(-1.0, -1.0) + 135.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_wraps() {
        assert_eq!(normalize_360(0.0), 0.0);
        assert_eq!(normalize_360(360.0), 0.0);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert_eq!(normalize_360(-1e-15), 0.0);
    }
}
