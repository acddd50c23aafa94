use glam::DVec3;

/// An N×3 list of points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    pub points: Vec<DVec3>,
}

impl PointSet {
    pub fn from_points<P: Into<mint::Vector3<f64>>>(points: impl IntoIterator<Item = P>) -> Self {
        Self {
            points: points
                .into_iter()
                .map(|p| DVec3::from(p.into()))
                .collect(),
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.points.len(), 3)
    }

    /// Axis-aligned bounds as `(min, max)`, `None` for an empty set.
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }
}
