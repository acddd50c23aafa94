use crate::shape::{to_unit_sphere, Icosahedron, RawLayout};
use glam::DVec3;
use std::{collections::HashMap, mem};

/// Unit sphere mesh built by recursively splitting the faces of an
/// icosahedron.
pub struct Icosphere {
    pub vertices: Vec<DVec3>,
    pub triangles: Vec<[u32; 3]>,
}

impl Icosphere {
    pub fn new(levels: u32) -> Self {
        let mut sphere = Self::from(Icosahedron::new(RawLayout::Canonical));
        for _ in 0..levels {
            sphere.subdivide();
        }
        log::info!(
            "Icosphere level {}: {} vertices, {} triangles",
            levels,
            sphere.vertices.len(),
            sphere.triangles.len()
        );
        sphere
    }

    /// Splits every triangle into four. Midpoints are projected onto the
    /// unit sphere and shared by the two triangles on either side of an edge.
    pub fn subdivide(&mut self) {
        let mut midpoints = HashMap::<(u32, u32), u32>::new();
        let faces = mem::take(&mut self.triangles);
        let mut triangles = Vec::with_capacity(faces.len() * 4);
        for [a, b, c] in faces {
            let ab = self.midpoint(&mut midpoints, a, b);
            let bc = self.midpoint(&mut midpoints, b, c);
            let ca = self.midpoint(&mut midpoints, c, a);
            triangles.extend_from_slice(&[[a, ab, ca], [ab, b, bc], [bc, c, ca], [ab, bc, ca]]);
        }
        self.triangles = triangles;
    }

    fn midpoint(&mut self, cache: &mut HashMap<(u32, u32), u32>, a: u32, b: u32) -> u32 {
        let key = (a.min(b), a.max(b));
        if let Some(&index) = cache.get(&key) {
            return index;
        }
        let mid = 0.5 * (self.vertices[a as usize] + self.vertices[b as usize]);
        let index = self.vertices.len() as u32;
        self.vertices.push(to_unit_sphere(mid));
        cache.insert(key, index);
        index
    }
}

impl From<Icosahedron> for Icosphere {
    fn from(ico: Icosahedron) -> Self {
        Self {
            vertices: ico.vertices.to_vec(),
            triangles: ico
                .triangles
                .iter()
                .map(|t| t.map(u32::from))
                .collect(),
        }
    }
}
