//! Fixed-capacity simplex storage
//!
//! The simplex lives on the stack for the whole query: newest point at index
//! 0, at most `N` points, and reduction steps build a fresh value instead of
//! removing by index.

/// Ordered support points, newest first
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Simplex<P, const N: usize> {
    points: [P; N],
    len: usize,
}

impl<P: Copy, const N: usize> Simplex<P, N> {
    /// Simplex holding a single point
    pub(crate) fn single(point: P) -> Self {
        Self { points: [point; N], len: 1 }
    }

    /// Simplex holding `points` in the given order (newest first)
    ///
    /// # Panics
    ///
    /// Panics if `points` is empty or longer than `N`.
    pub(crate) fn from_points(points: &[P]) -> Self {
        assert!(
            !points.is_empty() && points.len() <= N,
            "simplex takes 1..={} points, got {}",
            N,
            points.len()
        );
        let mut simplex = Self::single(points[0]);
        simplex.points[..points.len()].copy_from_slice(points);
        simplex.len = points.len();
        simplex
    }

    /// Insert `point` as the newest vertex
    ///
    /// # Panics
    ///
    /// Panics if the simplex is already full.
    pub(crate) fn push_front(&mut self, point: P) {
        assert!(self.len < N, "simplex already holds {} points", N);
        self.points.copy_within(0..self.len, 1);
        self.points[0] = point;
        self.len += 1;
    }

    /// Number of points held
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Held points, newest first
    pub(crate) fn points(&self) -> &[P] {
        &self.points[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut simplex: Simplex<i32, 4> = Simplex::single(1);
        simplex.push_front(2);
        simplex.push_front(3);

        assert_eq!(simplex.len(), 3);
        assert_eq!(simplex.points(), &[3, 2, 1]);
    }

    #[test]
    fn test_fills_to_capacity() {
        let mut simplex: Simplex<i32, 3> = Simplex::single(1);
        simplex.push_front(2);
        simplex.push_front(3);
        assert_eq!(simplex.points(), &[3, 2, 1]);
    }

    #[test]
    #[should_panic(expected = "already holds")]
    fn test_push_past_capacity_panics() {
        let mut simplex: Simplex<i32, 2> = Simplex::from_points(&[1, 2]);
        simplex.push_front(3);
    }

    #[test]
    fn test_from_points_keeps_order() {
        let simplex: Simplex<i32, 4> = Simplex::from_points(&[7, 5, 9]);
        assert_eq!(simplex.points(), &[7, 5, 9]);
        assert_eq!(simplex.len(), 3);
    }
}
