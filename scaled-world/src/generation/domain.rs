use thiserror::Error;

/// Past 2^52 an `f64` has no fractional bits left, so every sample lands on a lattice point.
pub const MAX_PRECISE_COORDINATE: f64 = 4_503_599_627_370_496.0;

/// A coordinate the noise can still be evaluated at, but only as a constant.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("Noise coordinate ({x}, {y}) is outside the range where samples keep sub-cell precision")]
pub struct NumericDomainWarning {
    pub x: f64,
    pub y: f64,
}

pub fn check_coordinate_domain(x: f64, y: f64) -> Result<(), NumericDomainWarning> {
    let in_domain = |value: f64| value.is_finite() && value.abs() < MAX_PRECISE_COORDINATE;
    if in_domain(x) && in_domain(y) {
        Ok(())
    } else {
        Err(NumericDomainWarning { x, y })
    }
}

#[cfg(test)]
mod test {
    use super::{MAX_PRECISE_COORDINATE, check_coordinate_domain};

    #[test]
    fn ordinary_coordinates() {
        assert!(check_coordinate_domain(0.0, 0.0).is_ok());
        assert!(check_coordinate_domain(-1.0e9, 1.0e12).is_ok());
    }

    #[test]
    fn imprecise_coordinates() {
        assert_eq!(MAX_PRECISE_COORDINATE, 2f64.powi(52));
        assert!(check_coordinate_domain(MAX_PRECISE_COORDINATE, 0.0).is_err());
        assert!(check_coordinate_domain(0.0, -MAX_PRECISE_COORDINATE).is_err());

        let warning = check_coordinate_domain(1.0, 1.0e300).unwrap_err();
        assert_eq!(warning.x, 1.0);
        assert_eq!(warning.y, 1.0e300);
    }

    #[test]
    fn non_finite_coordinates() {
        assert!(check_coordinate_domain(f64::NAN, 0.0).is_err());
        assert!(check_coordinate_domain(0.0, f64::INFINITY).is_err());
    }
}
