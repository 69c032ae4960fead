use std::ops::Index;

/// A `width` x `height` grid of noise values, stored column by column.
///
/// Logically indexed as `[x][y]`, with `x` in `0..width` and `y` in `0..height`.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightMap {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl HeightMap {
    /// Fills the map column by column, calling `f(x, y)` once per cell.
    pub(crate) fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut values = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                values.push(f(x, y));
            }
        }

        Self {
            width,
            height,
            values,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.values[self.index_of(x, y)])
    }

    /// Every value, column by column.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn column(&self, x: usize) -> Option<&[f64]> {
        if x >= self.width {
            return None;
        }
        let start = x * self.height;
        Some(&self.values[start..start + self.height])
    }

    /// Iterates `(x, y, value)` in the order the map was generated.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| (index / self.height, index % self.height, *value))
    }

    pub fn min_max(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
                (min.min(*value), max.max(*value))
            })
    }

    /// Splits the map into one `Vec` per column, so `columns[x][y]` addresses a cell.
    pub fn into_columns(self) -> Vec<Vec<f64>> {
        self.values
            .chunks(self.height)
            .map(|column| column.to_vec())
            .collect()
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }
}

impl Index<(usize, usize)> for HeightMap {
    type Output = f64;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) is outside of a {}x{} height map",
            x,
            y,
            self.width,
            self.height
        );
        &self.values[self.index_of(x, y)]
    }
}

#[cfg(test)]
mod test {
    use super::HeightMap;

    fn numbered(width: usize, height: usize) -> HeightMap {
        HeightMap::from_fn(width, height, |x, y| (x * 10 + y) as f64)
    }

    #[test]
    fn dimensions() {
        let map = numbered(3, 2);
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 2);
        assert_eq!(map.as_slice().len(), 6);
    }

    #[test]
    fn column_major_layout() {
        let map = numbered(3, 2);
        assert_eq!(map.as_slice(), &[0.0, 1.0, 10.0, 11.0, 20.0, 21.0]);
        assert_eq!(map.column(1), Some(&[10.0, 11.0][..]));
        assert_eq!(map.column(3), None);
    }

    #[test]
    fn lookups() {
        let map = numbered(3, 2);
        assert_eq!(map.get(2, 1), Some(21.0));
        assert_eq!(map[(1, 0)], 10.0);
        assert_eq!(map.get(3, 0), None);
        assert_eq!(map.get(0, 2), None);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let map = numbered(3, 2);
        let _ = map[(0, 2)];
    }

    #[test]
    fn iter_visits_every_cell() {
        let map = numbered(3, 2);
        let cells: Vec<_> = map.iter().collect();
        assert_eq!(cells.len(), 6);
        for (x, y, value) in cells {
            assert_eq!(value, (x * 10 + y) as f64);
        }
    }

    #[test]
    fn min_max() {
        assert_eq!(numbered(3, 2).min_max(), (0.0, 21.0));
        assert_eq!(numbered(1, 1).min_max(), (0.0, 0.0));
    }

    #[test]
    fn into_columns() {
        let columns = numbered(3, 2).into_columns();
        assert_eq!(
            columns,
            vec![vec![0.0, 1.0], vec![10.0, 11.0], vec![20.0, 21.0]]
        );
        assert_eq!(columns[2][1], 21.0);
    }
}
