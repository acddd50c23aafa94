use super::LoadError;
use crate::PointSet;
use glam::DVec3;
use std::io;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Format {
    Ascii,
    BinaryLittleEndian,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Scalar {
    F32,
    F64,
    /// Any other scalar type, kept only for its byte size.
    Skip(usize),
}

impl Scalar {
    fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "float" | "float32" => Self::F32,
            "double" | "float64" => Self::F64,
            "char" | "uchar" | "int8" | "uint8" => Self::Skip(1),
            "short" | "ushort" | "int16" | "uint16" => Self::Skip(2),
            "int" | "uint" | "int32" | "uint32" => Self::Skip(4),
            _ => return None,
        })
    }

    fn size(self) -> usize {
        match self {
            Self::F32 => 4,
            Self::F64 => 8,
            Self::Skip(size) => size,
        }
    }

    /// Only called for the float slots the header accepted. Bits are
    /// stored little-endian and swapped on big-endian hosts.
    fn decode(self, bytes: &[u8]) -> f64 {
        match self {
            Self::F64 => f64::from_bits(u64::from_le(bytemuck::pod_read_unaligned(&bytes[..8]))),
            _ => f32::from_bits(u32::from_le(bytemuck::pod_read_unaligned(&bytes[..4]))) as f64,
        }
    }
}

/// Position of a coordinate within a vertex record.
#[derive(Clone, Copy)]
struct Slot {
    column: usize,
    offset: usize,
    scalar: Scalar,
}

struct Header {
    format: Format,
    count: usize,
    stride: usize,
    coords: [Slot; 3],
    lines: usize,
}

const MAX_RESERVE: usize = 1 << 16;

fn header_error(message: impl Into<String>) -> LoadError {
    LoadError::Header(message.into())
}

fn read_header(reader: &mut impl io::BufRead) -> Result<Header, LoadError> {
    let mut format = None;
    let mut count = None;
    let mut in_vertex = false;
    let mut column = 0;
    let mut stride = 0;
    let mut coords: [Option<Slot>; 3] = [None; 3];
    let mut lines = 0;

    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(header_error("missing end_header"));
        }
        lines += 1;
        let mut words = line.split_whitespace();
        let keyword = match words.next() {
            Some(word) => word,
            None => continue,
        };
        if lines == 1 && keyword != "ply" {
            return Err(header_error("missing 'ply' magic"));
        }
        match keyword {
            "ply" | "comment" | "obj_info" => {}
            "format" => {
                format = Some(match words.next() {
                    Some("ascii") => Format::Ascii,
                    Some("binary_little_endian") => Format::BinaryLittleEndian,
                    other => {
                        return Err(header_error(format!(
                            "unsupported format {}",
                            other.unwrap_or_default()
                        )))
                    }
                });
                if words.next() != Some("1.0") {
                    return Err(header_error("unsupported version"));
                }
            }
            "element" => match (words.next(), count) {
                (Some("vertex"), None) => {
                    let n = words.next().and_then(|w| w.parse().ok());
                    count = Some(n.ok_or_else(|| header_error("bad vertex count"))?);
                    in_vertex = true;
                }
                // Elements after the vertices are never read.
                (_, Some(_)) => in_vertex = false,
                (other, None) => {
                    return Err(header_error(format!(
                        "element '{}' before vertex",
                        other.unwrap_or_default()
                    )))
                }
            },
            "property" if in_vertex => {
                let ty = words.next().unwrap_or_default();
                let scalar = Scalar::parse(ty)
                    .ok_or_else(|| header_error(format!("unsupported property type '{}'", ty)))?;
                let slot = Some(Slot {
                    column,
                    offset: stride,
                    scalar,
                });
                match words.next() {
                    Some("x") => coords[0] = slot,
                    Some("y") => coords[1] = slot,
                    Some("z") => coords[2] = slot,
                    Some(other) => log::debug!("Skipping property: {}", other),
                    None => return Err(header_error("property without a name")),
                }
                column += 1;
                stride += scalar.size();
            }
            "property" => {}
            "end_header" => break,
            other => return Err(header_error(format!("unexpected section '{}'", other))),
        }
    }

    let mut slots = Vec::with_capacity(3);
    for (slot, name) in coords.into_iter().zip(["x", "y", "z"]) {
        match slot {
            Some(slot) if matches!(slot.scalar, Scalar::F32 | Scalar::F64) => slots.push(slot),
            Some(_) => return Err(header_error(format!("property '{}' is not a float", name))),
            None => return Err(header_error(format!("missing property '{}'", name))),
        }
    }

    Ok(Header {
        format: format.ok_or_else(|| header_error("missing format"))?,
        count: count.ok_or_else(|| header_error("missing vertex element"))?,
        stride,
        coords: [slots[0], slots[1], slots[2]],
        lines,
    })
}

/// Reads the `x`, `y`, `z` properties of every vertex. Anything stored
/// after the vertex element (faces, edges) is left unread.
pub fn read(mut reader: impl io::BufRead) -> Result<PointSet, LoadError> {
    let header = read_header(&mut reader)?;
    log::info!(
        "Reading {} {:?} vertices with stride {} from PLY",
        header.count,
        header.format,
        header.stride
    );

    // The count comes from the file; short data fails in the loops below.
    let mut points = Vec::with_capacity(header.count.min(MAX_RESERVE));
    match header.format {
        Format::BinaryLittleEndian => {
            let mut scratch = vec![0u8; header.stride];
            for _ in 0..header.count {
                reader.read_exact(&mut scratch)?;
                let [x, y, z] = header
                    .coords
                    .map(|slot| slot.scalar.decode(&scratch[slot.offset..]));
                points.push(DVec3::new(x, y, z));
            }
        }
        Format::Ascii => {
            let mut line = String::new();
            for i in 0..header.count {
                line.clear();
                let line_number = header.lines + i + 1;
                if reader.read_line(&mut line)? == 0 {
                    return Err(LoadError::Parse {
                        line: line_number,
                        message: format!("expected {} vertices, found {}", header.count, i),
                    });
                }
                let words = line.split_whitespace().collect::<Vec<_>>();
                let mut coords = [0.0; 3];
                for (c, slot) in coords.iter_mut().zip(header.coords) {
                    let word = words.get(slot.column).ok_or_else(|| LoadError::Parse {
                        line: line_number,
                        message: format!("missing column {}", slot.column),
                    })?;
                    *c = word.parse().map_err(|_| LoadError::Parse {
                        line: line_number,
                        message: format!("invalid number '{}'", word),
                    })?;
                }
                points.push(DVec3::from(coords));
            }
        }
    }
    Ok(PointSet { points })
}
