//! Reading and writing of Portable Float Map (PFM) images.
//!
//! A PFM file starts with three ASCII lines:
//!
//! ```text
//! PF
//! <width> <height>
//! <endianness>
//! ```
//!
//! where the endianness is `-1.0` for little endian and `1.0` for big
//! endian data. The header is followed by `width * height` RGB
//! triples of 32 bit floats, starting with the bottom row of the
//! image.

// std
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
// others
use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};
use log::{debug, info};
// pbrt
use crate::core::error::PfmError;
use crate::core::image::HdrImage;
use crate::core::pbrt::{Float, Spectrum};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    fn header_value(self) -> &'static str {
        match self {
            Endianness::Little => "-1.0",
            Endianness::Big => "1.0",
        }
    }
}

impl Default for Endianness {
    fn default() -> Self {
        Endianness::Little
    }
}

fn write_body<B: ByteOrder, W: Write>(image: &HdrImage, stream: &mut W) -> std::io::Result<()> {
    for y in (0..image.height).rev() {
        for x in 0..image.width {
            let color: Spectrum = image.get_pixel(x, y);
            stream.write_f32::<B>(color.r())?;
            stream.write_f32::<B>(color.g())?;
            stream.write_f32::<B>(color.b())?;
        }
    }
    Ok(())
}

/// Encode *image* as PFM into *stream*.
pub fn write_pfm<W: Write>(
    image: &HdrImage,
    stream: &mut W,
    endianness: Endianness,
) -> std::io::Result<()> {
    let header = format!(
        "PF\n{} {}\n{}\n",
        image.width,
        image.height,
        endianness.header_value()
    );
    stream.write_all(header.as_bytes())?;
    match endianness {
        Endianness::Little => write_body::<LittleEndian, W>(image, stream),
        Endianness::Big => write_body::<BigEndian, W>(image, stream),
    }
}

fn read_line<R: BufRead>(stream: &mut R) -> Result<String, PfmError> {
    let mut line = String::new();
    stream.read_line(&mut line)?;
    Ok(line.trim_end_matches(|c| c == '\n' || c == '\r').to_string())
}

pub fn parse_img_size(line: &str) -> Result<(usize, usize), PfmError> {
    let elements: Vec<&str> = line.split_whitespace().collect();
    if elements.len() != 2 {
        return Err(PfmError::InvalidSize(line.to_string()));
    }
    let width: usize = elements[0]
        .parse()
        .map_err(|_| PfmError::InvalidSize(line.to_string()))?;
    let height: usize = elements[1]
        .parse()
        .map_err(|_| PfmError::InvalidSize(line.to_string()))?;
    // three floats per pixel have to be addressable
    if width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3 * std::mem::size_of::<f32>()))
        .is_none()
    {
        return Err(PfmError::InvalidSize(line.to_string()));
    }
    Ok((width, height))
}

pub fn parse_endianness(line: &str) -> Result<Endianness, PfmError> {
    let value: Float = line
        .trim()
        .parse()
        .map_err(|_| PfmError::InvalidEndianness(line.to_string()))?;
    if value == 1.0 as Float {
        Ok(Endianness::Big)
    } else if value == -1.0 as Float {
        Ok(Endianness::Little)
    } else {
        Err(PfmError::InvalidEndianness(line.to_string()))
    }
}

fn read_float<B: ByteOrder, R: BufRead>(stream: &mut R) -> Result<Float, PfmError> {
    stream.read_f32::<B>().map_err(|err| {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            PfmError::MissingData
        } else {
            PfmError::Io(err)
        }
    })
}

/// Rows are stored bottom to top. Pixels are collected as they are
/// read, a truncated file fails before the full image is allocated.
fn read_body<B: ByteOrder, R: BufRead>(
    width: usize,
    height: usize,
    stream: &mut R,
) -> Result<HdrImage, PfmError> {
    let mut rows: Vec<Vec<Spectrum>> = Vec::new();
    for _ in 0..height {
        let mut row: Vec<Spectrum> = Vec::new();
        for _ in 0..width {
            let r = read_float::<B, R>(stream)?;
            let g = read_float::<B, R>(stream)?;
            let b = read_float::<B, R>(stream)?;
            row.push(Spectrum::rgb(r, g, b));
        }
        rows.push(row);
    }
    rows.reverse();
    Ok(HdrImage {
        width,
        height,
        pixels: rows.concat(),
    })
}

/// Decode a PFM image from *stream*.
pub fn read_pfm<R: BufRead>(stream: &mut R) -> Result<HdrImage, PfmError> {
    let magic = read_line(stream)?;
    if magic != "PF" {
        return Err(PfmError::InvalidMagic);
    }
    let (width, height) = parse_img_size(&read_line(stream)?)?;
    let endianness = parse_endianness(&read_line(stream)?)?;
    debug!("PFM header: {}x{}, {:?} endian", width, height, endianness);
    match endianness {
        Endianness::Little => read_body::<LittleEndian, R>(width, height, stream),
        Endianness::Big => read_body::<BigEndian, R>(width, height, stream),
    }
}

pub fn save_pfm<P: AsRef<Path>>(
    image: &HdrImage,
    path: P,
    endianness: Endianness,
) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_pfm(image, &mut writer, endianness)?;
    writer.flush()?;
    info!("Wrote HDR image to {:?}", path.as_ref());
    Ok(())
}

pub fn load_pfm<P: AsRef<Path>>(path: P) -> Result<HdrImage, PfmError> {
    let mut reader = BufReader::new(File::open(path.as_ref())?);
    read_pfm(&mut reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const LE_REFERENCE_BYTES: [u8; 84] = [
        0x50, 0x46, 0x0a, 0x33, 0x20, 0x32, 0x0a, 0x2d, 0x31, 0x2e, 0x30, 0x0a, 0x00, 0x00, 0xc8,
        0x42, 0x00, 0x00, 0x48, 0x43, 0x00, 0x00, 0x96, 0x43, 0x00, 0x00, 0xc8, 0x43, 0x00, 0x00,
        0xfa, 0x43, 0x00, 0x00, 0x16, 0x44, 0x00, 0x00, 0x2f, 0x44, 0x00, 0x00, 0x48, 0x44, 0x00,
        0x00, 0x61, 0x44, 0x00, 0x00, 0x20, 0x41, 0x00, 0x00, 0xa0, 0x41, 0x00, 0x00, 0xf0, 0x41,
        0x00, 0x00, 0x20, 0x42, 0x00, 0x00, 0x48, 0x42, 0x00, 0x00, 0x70, 0x42, 0x00, 0x00, 0x8c,
        0x42, 0x00, 0x00, 0xa0, 0x42, 0x00, 0x00, 0xb4, 0x42,
    ];

    const BE_REFERENCE_BYTES: [u8; 83] = [
        0x50, 0x46, 0x0a, 0x33, 0x20, 0x32, 0x0a, 0x31, 0x2e, 0x30, 0x0a, 0x42, 0xc8, 0x00, 0x00,
        0x43, 0x48, 0x00, 0x00, 0x43, 0x96, 0x00, 0x00, 0x43, 0xc8, 0x00, 0x00, 0x43, 0xfa, 0x00,
        0x00, 0x44, 0x16, 0x00, 0x00, 0x44, 0x2f, 0x00, 0x00, 0x44, 0x48, 0x00, 0x00, 0x44, 0x61,
        0x00, 0x00, 0x41, 0x20, 0x00, 0x00, 0x41, 0xa0, 0x00, 0x00, 0x41, 0xf0, 0x00, 0x00, 0x42,
        0x20, 0x00, 0x00, 0x42, 0x48, 0x00, 0x00, 0x42, 0x70, 0x00, 0x00, 0x42, 0x8c, 0x00, 0x00,
        0x42, 0xa0, 0x00, 0x00, 0x42, 0xb4, 0x00, 0x00,
    ];

    fn reference_image() -> HdrImage {
        let mut img = HdrImage::new(3, 2);
        img.set_pixel(0, 0, Spectrum::rgb(1.0e1, 2.0e1, 3.0e1));
        img.set_pixel(1, 0, Spectrum::rgb(4.0e1, 5.0e1, 6.0e1));
        img.set_pixel(2, 0, Spectrum::rgb(7.0e1, 8.0e1, 9.0e1));
        img.set_pixel(0, 1, Spectrum::rgb(1.0e2, 2.0e2, 3.0e2));
        img.set_pixel(1, 1, Spectrum::rgb(4.0e2, 5.0e2, 6.0e2));
        img.set_pixel(2, 1, Spectrum::rgb(7.0e2, 8.0e2, 9.0e2));
        img
    }

    #[test]
    fn write_little_endian() {
        let mut buf: Vec<u8> = Vec::new();
        write_pfm(&reference_image(), &mut buf, Endianness::Little).unwrap();
        assert_eq!(buf, LE_REFERENCE_BYTES.to_vec());
    }

    #[test]
    fn write_big_endian() {
        let mut buf: Vec<u8> = Vec::new();
        write_pfm(&reference_image(), &mut buf, Endianness::Big).unwrap();
        assert_eq!(buf, BE_REFERENCE_BYTES.to_vec());
    }

    #[test]
    fn read_both_endiannesses() {
        for bytes in [&LE_REFERENCE_BYTES[..], &BE_REFERENCE_BYTES[..]].iter() {
            let img = read_pfm(&mut Cursor::new(bytes.to_vec())).unwrap();
            assert_eq!(img, reference_image());
        }
    }

    #[test]
    fn header_parsing() {
        assert_eq!(parse_img_size("3 2").unwrap(), (3, 2));
        assert!(parse_img_size("-1 3").is_err());
        assert!(parse_img_size("3 2 1").is_err());
        assert!(parse_img_size("3").is_err());
        assert!(parse_img_size("a b").is_err());
        assert!(matches!(
            parse_img_size("4294967296 4294967297"),
            Err(PfmError::InvalidSize(_))
        ));
        assert!(matches!(
            parse_img_size(&format!("{} 2", usize::MAX)),
            Err(PfmError::InvalidSize(_))
        ));
        assert_eq!(parse_endianness("1.0").unwrap(), Endianness::Big);
        assert_eq!(parse_endianness("-1.0").unwrap(), Endianness::Little);
        assert!(matches!(
            parse_endianness("0.5"),
            Err(PfmError::InvalidEndianness(_))
        ));
        assert!(matches!(
            parse_endianness("abc"),
            Err(PfmError::InvalidEndianness(_))
        ));
    }

    #[test]
    fn malformed_files() {
        let mut bad_magic = Cursor::new(b"PX\n3 2\n-1.0\n".to_vec());
        assert!(matches!(read_pfm(&mut bad_magic), Err(PfmError::InvalidMagic)));
        let truncated = LE_REFERENCE_BYTES[..LE_REFERENCE_BYTES.len() - 2].to_vec();
        assert!(matches!(
            read_pfm(&mut Cursor::new(truncated)),
            Err(PfmError::MissingData)
        ));
        let mut overflowing = Cursor::new(b"PF\n4294967296 4294967297\n-1.0\n".to_vec());
        assert!(matches!(
            read_pfm(&mut overflowing),
            Err(PfmError::InvalidSize(_))
        ));
        // a huge but addressable size fails on the missing pixels
        let mut huge = Cursor::new(b"PF\n100000 100000\n-1.0\n".to_vec());
        assert!(matches!(read_pfm(&mut huge), Err(PfmError::MissingData)));
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join("rs_tracer_pfm_round_trip.pfm");
        save_pfm(&reference_image(), &path, Endianness::Big).unwrap();
        let img = load_pfm(&path).unwrap();
        assert_eq!(img, reference_image());
        let _ = std::fs::remove_file(&path);
    }
}
