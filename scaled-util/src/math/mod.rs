use num_traits::Float;

/// Blends `start` towards `end` by `delta`, computed as `(1 - delta) * start + delta * end`.
///
/// Unlike `start + delta * (end - start)` this form returns `end` exactly when `delta` is one.
#[inline]
pub fn lerp<T>(delta: T, start: T, end: T) -> T
where
    T: Float,
{
    (T::one() - delta) * start + delta * end
}

/// Bilinear interpolation of the four corners of a unit cell.
#[inline]
pub fn lerp2<T>(delta_x: T, delta_y: T, x0y0: T, x1y0: T, x0y1: T, x1y1: T) -> T
where
    T: Float,
{
    lerp(
        delta_y,
        lerp(delta_x, x0y0, x1y0),
        lerp(delta_x, x0y1, x1y1),
    )
}

#[cfg(test)]
mod test {
    use super::{lerp, lerp2};

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(0.0f64, 3.0, 7.0), 3.0);
        assert_eq!(lerp(1.0f64, 3.0, 7.0), 7.0);
        assert_eq!(lerp(0.5f64, 3.0, 7.0), 5.0);
        assert_eq!(lerp(0.25f32, -4.0, 4.0), -2.0);
    }

    #[test]
    fn lerp2_corners() {
        let corners = (1.0f64, 2.0, 3.0, 4.0);
        assert_eq!(lerp2(0.0, 0.0, corners.0, corners.1, corners.2, corners.3), 1.0);
        assert_eq!(lerp2(1.0, 0.0, corners.0, corners.1, corners.2, corners.3), 2.0);
        assert_eq!(lerp2(0.0, 1.0, corners.0, corners.1, corners.2, corners.3), 3.0);
        assert_eq!(lerp2(1.0, 1.0, corners.0, corners.1, corners.2, corners.3), 4.0);
        assert_eq!(lerp2(0.5, 0.5, corners.0, corners.1, corners.2, corners.3), 2.5);
    }
}
