use super::LoadError;
use crate::PointSet;
use glam::DVec3;
use std::io;

/// Reads one point per line. Everything after `#` is a comment, and a
/// `label =` prefix is dropped so `Vertex 0 = x, y, z` lines read back.
pub fn parse_line(line: &str) -> Result<Option<DVec3>, String> {
    let line = line.split('#').next().unwrap_or_default();
    let values = match line.split_once('=') {
        Some((_, rest)) => rest,
        None => line,
    };
    let words = values
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>();
    match words.len() {
        0 => Ok(None),
        3 => {
            let mut coords = [0.0; 3];
            for (c, w) in coords.iter_mut().zip(words) {
                *c = w
                    .parse()
                    .map_err(|_| format!("invalid number '{}'", w))?;
            }
            Ok(Some(DVec3::from(coords)))
        }
        n => Err(format!("expected 3 coordinates, found {}", n)),
    }
}

pub fn read(reader: impl io::BufRead) -> Result<PointSet, LoadError> {
    let mut points = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Ok(Some(p)) => points.push(p),
            Ok(None) => {}
            Err(message) => return Err(LoadError::Parse { line: i + 1, message }),
        }
    }
    Ok(PointSet { points })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators() {
        let expected = Some(DVec3::new(1.0, -2.5, 3e-2));
        assert_eq!(parse_line("1 -2.5 3e-2"), Ok(expected));
        assert_eq!(parse_line("1,-2.5,3e-2"), Ok(expected));
        assert_eq!(parse_line("  1.0, -2.5,\t0.03  "), Ok(expected));
    }

    #[test]
    fn labels_and_comments() {
        assert_eq!(
            parse_line("Vertex 4 = 0.0, -0.5, 0.5 # bottom"),
            Ok(Some(DVec3::new(0.0, -0.5, 0.5)))
        );
        assert_eq!(parse_line("# header"), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
    }

    #[test]
    fn malformed() {
        assert!(parse_line("1 2").is_err());
        assert!(parse_line("1 2 3 4").is_err());
        assert_eq!(parse_line("1 two 3"), Err("invalid number 'two'".to_string()));
    }

    #[test]
    fn error_reports_line() {
        let err = read("1 2 3\n\n4 5\n".as_bytes()).unwrap_err();
        match err {
            LoadError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {}", other),
        }
    }
}
