// File: crates/chart-core/src/scale.rs
// Summary: Linear data <-> pixel transform shared by the renderer and the view state.

/// Maps the data interval `[d0, d1]` onto the pixel interval `[p0, p1]`.
/// `p1 < p0` is allowed (screen Y grows downwards).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub p0: f32,
    pub p1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, p0: f32, p1: f32) -> Self {
        Self { d0, d1, p0, p1 }
    }

    #[inline]
    fn span(&self) -> f64 {
        let s = self.d1 - self.d0;
        if s.abs() < 1e-12 { 1e-12 } else { s }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.p0 + ((v - self.d0) / self.span()) as f32 * (self.p1 - self.p0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let pspan = self.p1 - self.p0;
        if pspan.abs() < f32::EPSILON {
            return self.d0;
        }
        self.d0 + ((px - self.p0) / pspan) as f64 * self.span()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_pixel_range_maps_max_to_top() {
        let s = LinearScale::new(0.0, 10.0, 500.0, 100.0);
        assert_eq!(s.to_px(0.0), 500.0);
        assert_eq!(s.to_px(10.0), 100.0);
        assert!((s.from_px(300.0) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_range_does_not_divide_by_zero() {
        let s = LinearScale::new(3.0, 3.0, 0.0, 100.0);
        assert!(s.to_px(3.0).is_finite());
    }
}
