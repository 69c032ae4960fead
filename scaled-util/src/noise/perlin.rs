use std::num::NonZeroU32;
use std::ops::Index;

use crate::math::lerp2;

use super::grad;

/// Hash lookup defined by Ken Perlin: every number from 0 to 255 exactly once.
pub const ORIGINAL_PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// The canonical permutation, shared by every sampler in the process.
pub static PERMUTATION: PermutationTable = PermutationTable::new(&ORIGINAL_PERMUTATION);

/// A 256-entry permutation repeated twice.
///
/// Corner hashing adds a cell coordinate (at most 256) to a table entry (at most 255), so the
/// second copy lets every lookup stay in bounds without wrapping.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PermutationTable([u8; 512]);

impl PermutationTable {
    pub const fn new(base: &[u8; 256]) -> Self {
        let mut table = [0u8; 512];
        let mut i = 0;
        while i < 512 {
            table[i] = base[i % 256];
            i += 1;
        }
        Self(table)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    fn hash(&self, x: usize, y: usize) -> u8 {
        self.0[self.0[x] as usize + y]
    }
}

impl Index<usize> for PermutationTable {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        PERMUTATION.clone()
    }
}

/// Quintic ease curve `6t^5 - 15t^4 + 10t^3`.
///
/// Both the first and second derivative vanish at 0 and 1, which keeps the interpolated noise
/// smooth across cell boundaries.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Floor of `value` together with the lattice cell it falls in, wrapped into `0..256`.
///
/// The wrap is a Euclidean modulo so negative coordinates continue the same period instead of
/// mirroring around zero.
#[inline]
fn lattice(value: f64) -> (f64, usize) {
    let floor = value.floor();
    (floor, floor.rem_euclid(256.0) as usize)
}

/// Single-frequency 2D gradient noise.
#[derive(Clone, Copy, Debug)]
pub struct PerlinNoiseSampler<'a> {
    permutation: &'a PermutationTable,
}

impl Default for PerlinNoiseSampler<'static> {
    fn default() -> Self {
        Self::new(&PERMUTATION)
    }
}

impl<'a> PerlinNoiseSampler<'a> {
    pub fn new(permutation: &'a PermutationTable) -> Self {
        Self { permutation }
    }

    pub fn permutation(&self) -> &'a PermutationTable {
        self.permutation
    }

    /// Samples one layer of noise at `(x, y)`, remapped from `[-1, 1]` into `[0, 1]`.
    ///
    /// Every integer lattice point samples to exactly `0.5`. The pattern repeats every 256 units
    /// along both axes.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let (floor_x, x0) = lattice(x);
        let (floor_y, y0) = lattice(y);
        let x1 = x0 + 1;
        let y1 = y0 + 1;

        let sx = x - floor_x;
        let sy = y - floor_y;

        let u = fade(sx);
        let v = fade(sy);

        let aa = self.permutation.hash(x0, y0);
        let ab = self.permutation.hash(x0, y1);
        let ba = self.permutation.hash(x1, y0);
        let bb = self.permutation.hash(x1, y1);

        let value = lerp2(
            u,
            v,
            grad(aa, sx, sy),
            grad(ba, sx - 1.0, sy),
            grad(ab, sx, sy - 1.0),
            grad(bb, sx - 1.0, sy - 1.0),
        );

        (value + 1.0) / 2.0
    }
}

/// Fractal sum of [`PerlinNoiseSampler`] layers.
///
/// Each octave doubles the frequency and multiplies the amplitude by `persistence`. The sum is
/// divided by the total amplitude, so the result stays on the scale of a single octave.
#[derive(Clone, Copy, Debug)]
pub struct OctavePerlinNoiseSampler<'a> {
    sampler: PerlinNoiseSampler<'a>,
    octaves: NonZeroU32,
    persistence: f64,
    amplitude: f64,
}

impl<'a> OctavePerlinNoiseSampler<'a> {
    /// `amplitude` must be positive, `persistence` non-negative and [`Self::max_value`] finite,
    /// otherwise the normalization divides by zero or infinity.
    pub fn new(
        sampler: PerlinNoiseSampler<'a>,
        octaves: NonZeroU32,
        persistence: f64,
        amplitude: f64,
    ) -> Self {
        Self {
            sampler,
            octaves,
            persistence,
            amplitude,
        }
    }

    pub fn octaves(&self) -> NonZeroU32 {
        self.octaves
    }

    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn set_octaves(&mut self, octaves: NonZeroU32) {
        self.octaves = octaves;
    }

    pub fn set_persistence(&mut self, persistence: f64) {
        self.persistence = persistence;
    }

    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude = amplitude;
    }

    /// The sum of every octave's amplitude, used to normalize [`Self::sample`].
    pub fn max_value(&self) -> f64 {
        let mut amplitude = self.amplitude;
        let mut max_value = 0f64;
        for _ in 0..self.octaves.get() {
            max_value += amplitude;
            amplitude *= self.persistence;
        }
        max_value
    }

    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // The configured amplitude is only the starting point; each call decays its own copy.
        let mut amplitude = self.amplitude;
        let mut frequency = 1f64;
        let mut total = 0f64;
        let mut max_value = 0f64;

        for _ in 0..self.octaves.get() {
            total += self.sampler.sample(x * frequency, y * frequency) * amplitude;
            max_value += amplitude;

            amplitude *= self.persistence;
            frequency *= 2.0;
        }

        total / max_value
    }
}
