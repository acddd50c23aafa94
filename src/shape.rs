use glam::DVec3;
use std::{fmt, str};

/// `(1 + √5) / 2`, the edge ratio of the icosahedron's golden rectangles.
pub fn golden_ratio() -> f64 {
    (1.0 + 5.0f64.sqrt()) / 2.0
}

/// Which list of raw coordinates to normalize.
///
/// The debugging script this toolkit grew out of listed `(1, t, 0)` twice,
/// at indices 1 and 3, so its output has a repeated vertex and lacks
/// `(1, -t, 0)`. `Reference` keeps that list as-is so old output can be
/// reproduced; `Canonical` is the proper 12-vertex construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RawLayout {
    Reference,
    #[default]
    Canonical,
}

impl str::FromStr for RawLayout {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reference" => Ok(Self::Reference),
            "canonical" => Ok(Self::Canonical),
            other => Err(format!(
                "unknown layout '{}', expected 'reference' or 'canonical'",
                other
            )),
        }
    }
}

impl fmt::Display for RawLayout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Self::Reference => "reference",
            Self::Canonical => "canonical",
        })
    }
}

/// Raw, un-normalized vertices: four per golden rectangle, one rectangle in
/// each coordinate plane.
pub fn raw_vertices(layout: RawLayout) -> [DVec3; 12] {
    let t = golden_ratio();
    let fourth = match layout {
        RawLayout::Reference => DVec3::new(1.0, t, 0.0),
        RawLayout::Canonical => DVec3::new(1.0, -t, 0.0),
    };
    [
        DVec3::new(-1.0, t, 0.0),
        DVec3::new(1.0, t, 0.0),
        DVec3::new(-1.0, -t, 0.0),
        fourth,
        DVec3::new(0.0, -1.0, t),
        DVec3::new(0.0, 1.0, t),
        DVec3::new(0.0, -1.0, -t),
        DVec3::new(0.0, 1.0, -t),
        DVec3::new(t, 0.0, -1.0),
        DVec3::new(t, 0.0, 1.0),
        DVec3::new(-t, 0.0, -1.0),
        DVec3::new(-t, 0.0, 1.0),
    ]
}

/// Projects `v` onto the unit sphere by dividing every component by `|v|`.
pub fn to_unit_sphere(v: DVec3) -> DVec3 {
    let length = (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
    assert!(length > 0.0, "Cannot normalize zero-length vector {:?}", v);
    v / length
}

pub struct Icosahedron {
    pub layout: RawLayout,
    pub vertices: [DVec3; 12],
    /// Faces of the canonical layout, wound counter-clockwise from outside.
    /// Under `RawLayout::Reference` vertex 3 sits on top of vertex 1, so
    /// the faces around it are not a valid mesh.
    pub triangles: [[u16; 3]; 20],
}

impl Icosahedron {
    /// The face table always describes the canonical solid; only use
    /// `triangles` with `RawLayout::Canonical`.
    pub fn new(layout: RawLayout) -> Self {
        // http://blog.andreaskahler.com/2009/06/creating-icosphere-mesh-in-code.html
        Self {
            layout,
            vertices: generate_with(layout),
            triangles: [
                // 5 faces around point 0
                [0, 11, 5],
                [0, 5, 1],
                [0, 1, 7],
                [0, 7, 10],
                [0, 10, 11],
                // 5 adjacent faces
                [1, 5, 9],
                [5, 11, 4],
                [11, 10, 2],
                [10, 7, 6],
                [7, 1, 8],
                // 5 faces around point 3
                [3, 9, 4],
                [3, 4, 2],
                [3, 2, 6],
                [3, 6, 8],
                [3, 8, 9],
                // 5 adjacent faces
                [4, 9, 5],
                [2, 4, 11],
                [6, 2, 10],
                [8, 6, 7],
                [9, 8, 1],
            ],
        }
    }

    /// What the shader literal computes: every vertex scaled by `radius`
    /// and moved to `position`.
    pub fn placed(&self, radius: f64, position: DVec3) -> [DVec3; 12] {
        self.vertices.map(|v| v * radius + position)
    }
}

/// The 12 unit vertices of the canonical icosahedron, in construction order.
pub fn generate() -> [DVec3; 12] {
    generate_with(RawLayout::default())
}

pub fn generate_with(layout: RawLayout) -> [DVec3; 12] {
    let vertices = raw_vertices(layout).map(to_unit_sphere);
    log::debug!("Generated {} vertices with {} layout", vertices.len(), layout);
    vertices
}
