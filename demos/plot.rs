use unit_icosphere as ico;
use std::process;

#[derive(argh::FromArgs)]
/// Show a 3D scatter view of a point set in the terminal.
struct Args {
    /// points file: text with one "x y z" per line, or .ply, optionally gzipped
    #[argh(positional)]
    path: String,
    /// plot width in characters
    #[argh(option, default = "64")]
    width: usize,
    /// plot height in characters
    #[argh(option, default = "32")]
    height: usize,
    /// camera rotation around the vertical axis, in degrees
    #[argh(option, default = "30.0")]
    yaw: f64,
    /// camera elevation, in degrees
    #[argh(option, default = "20.0")]
    pitch: f64,
}

fn main() {
    env_logger::init();
    let args: Args = argh::from_env();

    let set = match ico::io::load(&args.path) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Unable to load {}: {}", args.path, e);
            process::exit(1);
        }
    };
    println!("{:?}", set.shape());

    let view = ico::ScatterView::new(ico::ScatterParams {
        width: args.width,
        height: args.height,
        yaw: args.yaw.to_radians(),
        pitch: args.pitch.to_radians(),
        ..Default::default()
    });
    print!("{}", view.render(&set));
}
