/// Inclusive `[min, max]` range allowed for the zoom factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleExtent {
    min: f64,
    max: f64,
}

impl ScaleExtent {
    /// Extent from bounds; `None` unless both are finite, positive and
    /// ordered.
    pub fn new(min: f64, max: f64) -> Option<Self> {
        let valid = min.is_finite() && max.is_finite() && min > 0.0 && min <= max;
        valid.then_some(Self { min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamp a zoom factor into the extent.
    pub fn clamp(&self, k: f64) -> f64 {
        k.clamp(self.min, self.max)
    }

    /// Bounds as `[min, max]`.
    pub fn to_array(self) -> [f64; 2] {
        [self.min, self.max]
    }
}

impl Default for ScaleExtent {
    fn default() -> Self {
        Self {
            min: 0.1,
            max: 1e3,
        }
    }
}

impl TryFrom<[f64; 2]> for ScaleExtent {
    type Error = [f64; 2];

    fn try_from(bounds: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(bounds[0], bounds[1]).ok_or(bounds)
    }
}

/// Current zoom factor `k`, kept inside a [`ScaleExtent`].
///
/// `k = 1` is the identity transform: the projection is shown at its own
/// base ("unity") scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    k: f64,
    extent: ScaleExtent,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::new(ScaleExtent::default())
    }
}

impl ZoomTransform {
    /// Identity transform clamped to `extent`.
    pub fn new(extent: ScaleExtent) -> Self {
        Self {
            k: extent.clamp(1.0),
            extent,
        }
    }

    /// Current zoom factor.
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Current extent.
    pub fn extent(&self) -> ScaleExtent {
        self.extent
    }

    /// Replace the extent and re-clamp the current factor.
    pub fn set_extent(&mut self, extent: ScaleExtent) {
        self.extent = extent;
        self.k = extent.clamp(self.k);
    }

    /// Set the factor, clamped to the extent. Non-finite input is ignored.
    pub fn scale_to(&mut self, k: f64) {
        if k.is_finite() {
            self.k = self.extent.clamp(k);
        }
    }

    /// Multiply the factor, clamped to the extent.
    pub fn scale_by(&mut self, factor: f64) {
        self.scale_to(self.k * factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_extents() {
        assert!(ScaleExtent::new(2.0, 1.0).is_none());
        assert!(ScaleExtent::new(0.0, 1.0).is_none());
        assert!(ScaleExtent::new(f64::NAN, 1.0).is_none());
        assert!(ScaleExtent::new(1.0, f64::INFINITY).is_none());
        assert!(ScaleExtent::new(1.0, 1.0).is_some());
    }

    #[test]
    fn try_from_array() {
        let extent = ScaleExtent::try_from([0.5, 4.0]);
        assert_eq!(extent.map(ScaleExtent::to_array), Ok([0.5, 4.0]));
        assert_eq!(ScaleExtent::try_from([4.0, 0.5]), Err([4.0, 0.5]));
    }

    #[test]
    fn transform_clamps() {
        let mut zoom = ZoomTransform::new(ScaleExtent::new(0.5, 2.0).unwrap_or_default());
        assert_eq!(zoom.k(), 1.0);
        zoom.scale_by(10.0);
        assert_eq!(zoom.k(), 2.0);
        zoom.scale_to(0.01);
        assert_eq!(zoom.k(), 0.5);
        zoom.scale_to(f64::NAN);
        assert_eq!(zoom.k(), 0.5);
    }

    #[test]
    fn new_extent_reclamps() {
        let mut zoom = ZoomTransform::default();
        zoom.scale_to(50.0);
        zoom.set_extent(ScaleExtent::new(1.0, 8.0).unwrap_or_default());
        assert_eq!(zoom.k(), 8.0);
    }

    #[test]
    fn identity_outside_extent_is_clamped() {
        let zoom = ZoomTransform::new(ScaleExtent::new(2.0, 4.0).unwrap_or_default());
        assert_eq!(zoom.k(), 2.0);
    }
}
