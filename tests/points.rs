use unit_icosphere::{
    generate, io, render, PointSet, RenderMode, ScatterParams, ScatterView,
};
use std::{fs, io::Write as _};

#[test]
fn compact_output_reads_back() -> Result<(), io::LoadError> {
    let vertices = generate();
    let text = render(&vertices, &RenderMode::Compact).join("\n");
    let set = io::parse(&text)?;
    assert_eq!(set.shape(), (12, 3));
    assert_eq!(set.points, vertices.to_vec());
    Ok(())
}

#[test]
fn load_text_file() -> Result<(), io::LoadError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("points.xyz");
    fs::write(&path, "# debug dump\n0 0 1\n1, 0, 0\n\n0.0 -1.0 0.0\n")?;
    let set = io::load(&path)?;
    assert_eq!(
        set,
        PointSet::from_points([[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, -1.0, 0.0]])
    );
    Ok(())
}

#[test]
fn load_gzipped_ply() -> Result<(), io::LoadError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("points.ply.gz");
    let mut data = b"ply\nformat binary_little_endian 1.0\nelement vertex 2\nproperty float x\nproperty float y\nproperty float z\nend_header\n".to_vec();
    for value in [1.0f32, 2.0, 3.0, -1.5, 0.0, 0.25] {
        data.extend_from_slice(&value.to_le_bytes());
    }
    let mut encoder = flate2::write::GzEncoder::new(fs::File::create(&path)?, flate2::Compression::default());
    encoder.write_all(&data)?;
    encoder.finish()?;

    let set = io::load(&path)?;
    assert_eq!(
        set,
        PointSet::from_points([[1.0, 2.0, 3.0], [-1.5, 0.0, 0.25]])
    );
    Ok(())
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = io::load(dir.path().join("nothing.txt")).unwrap_err();
    assert!(matches!(err, io::LoadError::Io(_)));
}

#[test]
fn bad_line_is_reported() {
    let err = io::parse("1 2 3\n4 5 six\n").unwrap_err();
    assert_eq!(err.to_string(), "line 2: invalid number 'six'");
}

#[test]
fn plot_loaded_points() -> Result<(), io::LoadError> {
    let set = io::parse("0 0 0\n1 1 1\n-1 2 0.5\n")?;
    let view = ScatterView::new(ScatterParams {
        width: 40,
        height: 20,
        ..Default::default()
    });
    let text = view.render(&set);
    assert_eq!(text.lines().count(), 20);
    assert!(text.lines().all(|line| line.chars().count() == 40));
    assert!(text.chars().any(|c| c != ' ' && c != '\n'));
    Ok(())
}
