use unit_icosphere as ico;
use std::{io, process};

#[derive(argh::FromArgs)]
/// Print the vertices of an icosahedron projected onto the unit sphere.
struct Args {
    /// print lines ready to paste into a kernel body
    #[argh(switch)]
    shader: bool,
    /// raw vertex list to normalize: "canonical" or "reference"
    #[argh(option, default = "ico::RawLayout::Canonical")]
    layout: ico::RawLayout,
    /// split the faces this many times and print the icosphere vertices
    #[argh(option, default = "0")]
    subdivide: u32,
    /// array assigned to by shader lines
    #[argh(option, default = "String::from(\"generatedSpherePoints\")")]
    array: String,
    /// vector constructor used by shader lines
    #[argh(option, default = "String::from(\"simd_float3\")")]
    vector_type: String,
}

fn main() {
    env_logger::init();
    let args: Args = argh::from_env();

    let mode = if args.shader {
        ico::RenderMode::ShaderLiteral(ico::ShaderTemplate {
            array: args.array,
            vector_type: args.vector_type,
            ..Default::default()
        })
    } else {
        ico::RenderMode::Compact
    };

    let vertices = if args.subdivide > 0 {
        if args.layout != ico::RawLayout::Canonical {
            log::warn!("Subdivision always starts from the canonical layout");
        }
        ico::Icosphere::new(args.subdivide).vertices
    } else {
        ico::generate_with(args.layout).to_vec()
    };

    if let Err(e) = ico::write_to(&vertices, &mode, &mut io::stdout().lock()) {
        eprintln!("Failed to write vertices: {}", e);
        process::exit(1);
    }
}
