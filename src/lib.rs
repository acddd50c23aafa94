pub mod io;
mod icosphere;
mod points;
mod render;
mod scatter;
mod shape;

pub use icosphere::Icosphere;
pub use points::PointSet;
pub use render::{render, render_line, write_to, RenderMode, ShaderTemplate};
pub use scatter::{OrbitCamera, ScatterParams, ScatterView};
pub use shape::{
    generate, generate_with, golden_ratio, raw_vertices, to_unit_sphere, Icosahedron, RawLayout,
};
