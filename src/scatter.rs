use crate::PointSet;
use glam::{DMat4, DQuat, DVec3};

/// Glyphs from nearest to farthest.
const GLYPHS: [char; 5] = ['@', '#', 'o', '+', '.'];
/// Width over height of a terminal character cell.
const CELL_ASPECT: f64 = 0.5;

pub struct ScatterParams {
    pub width: usize,
    pub height: usize,
    /// Rotation of the camera around the vertical axis, in radians.
    pub yaw: f64,
    /// Elevation of the camera above the horizontal plane, in radians.
    pub pitch: f64,
    pub fov_y: f64,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            width: 64,
            height: 32,
            yaw: 30f64.to_radians(),
            pitch: 20f64.to_radians(),
            fov_y: 45f64.to_radians(),
        }
    }
}

/// Camera circling a target, always facing it.
pub struct OrbitCamera {
    pub target: DVec3,
    pub orientation: DQuat,
    pub distance: f64,
    pub fov_y: f64,
    pub depth: f64,
}

impl OrbitCamera {
    pub fn position(&self) -> DVec3 {
        self.target + self.orientation * DVec3::Z * self.distance
    }

    pub fn get_view_matrix(&self) -> DMat4 {
        DMat4::from_rotation_translation(self.orientation, self.position()).inverse()
    }

    pub fn get_projection_matrix(&self, aspect: f64) -> DMat4 {
        let near = (self.distance - self.depth).max(1e-3 * self.distance);
        DMat4::perspective_rh(self.fov_y, aspect, near, self.distance + self.depth)
    }
}

/// Non-interactive 3D scatter plot drawn into a grid of characters.
pub struct ScatterView {
    pub params: ScatterParams,
}

impl ScatterView {
    pub fn new(params: ScatterParams) -> Self {
        Self { params }
    }

    /// Frames the whole set: looks at the centre of its bounds from far
    /// enough away for the bounding sphere to fit in the view.
    pub fn camera(&self, set: &PointSet) -> OrbitCamera {
        let (target, radius) = match set.bounds() {
            Some((lo, hi)) => (0.5 * (lo + hi), 0.5 * lo.distance(hi)),
            None => (DVec3::ZERO, 1.0),
        };
        let radius = if radius > 0.0 { radius } else { 1.0 };
        let p = &self.params;
        OrbitCamera {
            target,
            orientation: DQuat::from_rotation_y(p.yaw) * DQuat::from_rotation_x(-p.pitch),
            distance: 1.1 * radius / (0.5 * p.fov_y).sin(),
            fov_y: p.fov_y,
            depth: radius,
        }
    }

    pub fn render(&self, set: &PointSet) -> String {
        let ScatterParams { width, height, .. } = self.params;
        if width == 0 || height == 0 {
            return String::new();
        }
        let mut cells = vec![' '; width * height];
        let mut nearest = vec![f64::INFINITY; width * height];

        let camera = self.camera(set);
        let aspect = width as f64 * CELL_ASPECT / height as f64;
        let view = camera.get_view_matrix();
        let view_proj = camera.get_projection_matrix(aspect) * view;
        let near = camera.distance - camera.depth;

        let mut drawn = 0;
        for &p in set.points.iter() {
            let clip = view_proj * p.extend(1.0);
            if clip.w <= 0.0 {
                continue;
            }
            let ndc = clip.truncate() / clip.w;
            if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 {
                continue;
            }
            let col = (0.5 * (ndc.x + 1.0) * (width - 1) as f64).round() as usize;
            let row = (0.5 * (1.0 - ndc.y) * (height - 1) as f64).round() as usize;
            let index = row * width + col;

            let depth = -view.transform_point3(p).z;
            if depth >= nearest[index] {
                continue;
            }
            nearest[index] = depth;
            let shade = ((depth - near) / (2.0 * camera.depth)).clamp(0.0, 1.0);
            cells[index] = GLYPHS[(shade * (GLYPHS.len() - 1) as f64).round() as usize];
            drawn += 1;
        }
        log::debug!("Plotted {} of {} points", drawn, set.points.len());

        let mut out = String::with_capacity((width + 1) * height);
        for row in cells.chunks(width) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(yaw: f64, pitch: f64) -> ScatterView {
        ScatterView::new(ScatterParams {
            width: 21,
            height: 11,
            yaw,
            pitch,
            ..Default::default()
        })
    }

    fn marks(text: &str) -> Vec<(usize, usize, char)> {
        text.lines()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .filter(|&(_, c)| c != ' ')
                    .map(move |(col, c)| (row, col, c))
            })
            .collect()
    }

    #[test]
    fn empty_set_is_blank() {
        let text = small(0.0, 0.0).render(&PointSet::default());
        assert_eq!(text.lines().count(), 11);
        assert!(text.lines().all(|line| line.len() == 21 && line.trim().is_empty()));
    }

    #[test]
    fn single_point_is_centered() {
        let set = PointSet::from_points([[3.0, -2.0, 7.0]]);
        let text = small(0.4, 0.3).render(&set);
        assert_eq!(marks(&text), vec![(5, 10, 'o')]);
    }

    #[test]
    fn nearer_point_wins() {
        let set = PointSet::from_points([[0.0, 0.0, -1.0], [0.0, 0.0, 1.0]]);
        let text = small(0.0, 0.0).render(&set);
        assert_eq!(marks(&text), vec![(5, 10, GLYPHS[0])]);
    }

    #[test]
    fn yaw_turns_the_view() {
        let set = PointSet::from_points([[1.0, 0.0, 0.0], [-1.0, 0.0, 0.0]]);
        let front = marks(&small(0.0, 0.0).render(&set));
        assert_eq!(front.len(), 2);
        assert!(front.iter().all(|&(row, _, _)| row == 5));
        assert_eq!(front[0].1 + front[1].1, 20);

        let side = marks(&small(90f64.to_radians(), 0.0).render(&set));
        assert_eq!(side.len(), 1);
        assert_eq!((side[0].0, side[0].1), (5, 10));
    }

    #[test]
    fn icosahedron_fits_in_view() {
        let set = PointSet::from_points(crate::generate());
        let view = ScatterView::new(ScatterParams::default());
        let text = view.render(&set);
        assert_eq!(text.lines().count(), 32);
        assert!(marks(&text).len() > 6);
    }
}
