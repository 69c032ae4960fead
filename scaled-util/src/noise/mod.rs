pub mod perlin;

pub struct Gradient {
    x: f64,
    y: f64,
}

/// The eight 2D gradient directions, listed twice so the low nibble of a hash indexes it directly.
pub const GRADIENTS: [Gradient; 16] = [
    Gradient { x: 1f64, y: 0f64 },
    Gradient { x: 1f64, y: 1f64 },
    Gradient { x: 0f64, y: 1f64 },
    Gradient { x: -1f64, y: 1f64 },
    Gradient { x: -1f64, y: 0f64 },
    Gradient { x: -1f64, y: -1f64 },
    Gradient { x: 0f64, y: -1f64 },
    Gradient { x: 1f64, y: -1f64 },
    // Repeat
    Gradient { x: 1f64, y: 0f64 },
    Gradient { x: 1f64, y: 1f64 },
    Gradient { x: 0f64, y: 1f64 },
    Gradient { x: -1f64, y: 1f64 },
    Gradient { x: -1f64, y: 0f64 },
    Gradient { x: -1f64, y: -1f64 },
    Gradient { x: 0f64, y: -1f64 },
    Gradient { x: 1f64, y: -1f64 },
];

impl Gradient {
    #[inline]
    pub fn dot(&self, x: f64, y: f64) -> f64 {
        self.x * x + self.y * y
    }
}

/// Dot product of the gradient selected by `hash` with the offset `(x, y)`.
#[inline]
pub fn grad(hash: u8, x: f64, y: f64) -> f64 {
    GRADIENTS[(hash & 0xF) as usize].dot(x, y)
}

#[cfg(test)]
mod test {
    use super::{GRADIENTS, grad};

    #[test]
    fn gradient_order() {
        let expected = [
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (-1.0, 1.0),
            (-1.0, 0.0),
            (-1.0, -1.0),
            (0.0, -1.0),
            (1.0, -1.0),
        ];

        for (hash, (x, y)) in expected.iter().enumerate() {
            assert_eq!(GRADIENTS[hash].x, *x);
            assert_eq!(GRADIENTS[hash].y, *y);
        }
    }

    #[test]
    fn upper_nibble_repeats_lower() {
        for hash in 0u8..8 {
            assert_eq!(grad(hash, 0.3, -0.7), grad(hash + 8, 0.3, -0.7));
        }
    }

    #[test]
    fn only_low_nibble_is_used() {
        for hash in 0u8..16 {
            assert_eq!(grad(hash, 0.25, 0.5), grad(hash | 0xF0, 0.25, 0.5));
            assert_eq!(grad(hash, 0.25, 0.5), grad(hash + 16, 0.25, 0.5));
        }
    }

    #[test]
    fn dot_products() {
        assert_eq!(grad(0, 0.25, 0.5), 0.25);
        assert_eq!(grad(1, 0.25, 0.5), 0.75);
        assert_eq!(grad(2, 0.25, 0.5), 0.5);
        assert_eq!(grad(3, 0.25, 0.5), 0.25);
        assert_eq!(grad(4, 0.25, 0.5), -0.25);
        assert_eq!(grad(5, 0.25, 0.5), -0.75);
        assert_eq!(grad(6, 0.25, 0.5), -0.5);
        assert_eq!(grad(7, 0.25, 0.5), -0.25);
    }
}
