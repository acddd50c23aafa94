use glam::DVec3;
use std::io;

/// Names used by the shader literal. None of them are resolved here: they
/// must exist in the kernel the lines get pasted into.
#[derive(Clone, Debug, PartialEq)]
pub struct ShaderTemplate {
    /// Destination array.
    pub array: String,
    /// Base index the vertex index is added to.
    pub base_index: String,
    /// Three-component vector constructor.
    pub vector_type: String,
    pub radius: String,
    pub position: String,
}

impl Default for ShaderTemplate {
    fn default() -> Self {
        Self {
            array: "generatedSpherePoints".to_string(),
            base_index: "i".to_string(),
            vector_type: "simd_float3".to_string(),
            radius: "radius".to_string(),
            position: "position".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum RenderMode {
    /// `Vertex 0 = x, y, z`
    #[default]
    Compact,
    /// `generatedSpherePoints[i+0] = simd_float3(x, y, z) * radius + position;`
    ShaderLiteral(ShaderTemplate),
}

pub fn render_line(index: usize, v: DVec3, mode: &RenderMode) -> String {
    match *mode {
        RenderMode::Compact => format!("Vertex {} = {:?}, {:?}, {:?}", index, v.x, v.y, v.z),
        RenderMode::ShaderLiteral(ref tpl) => format!(
            "{}[{}+{}] = {}({:?}, {:?}, {:?}) * {} + {};",
            tpl.array,
            tpl.base_index,
            index,
            tpl.vector_type,
            v.x,
            v.y,
            v.z,
            tpl.radius,
            tpl.position,
        ),
    }
}

/// One line per vertex, in input order.
pub fn render(vertices: &[DVec3], mode: &RenderMode) -> Vec<String> {
    vertices
        .iter()
        .enumerate()
        .map(|(index, &v)| render_line(index, v, mode))
        .collect()
}

pub fn write_to(vertices: &[DVec3], mode: &RenderMode, out: &mut impl io::Write) -> io::Result<()> {
    for (index, &v) in vertices.iter().enumerate() {
        writeln!(out, "{}", render_line(index, v, mode))?;
    }
    out.flush()
}
