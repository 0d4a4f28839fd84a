use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use log::debug;
use y4m::{Colorspace, Frame, Ratio, VendorExtensionString};

use crate::media::LsbCarrier;
use crate::result::Result;
use crate::ShroudError;

/// Stream parameters that are carried over to the output.
///
/// `colorspace` is the one of the source, the output is always written as 8 bit 4:4:4.
#[derive(Debug, Clone)]
pub struct Y4mHeader {
    pub width: usize,
    pub height: usize,
    pub framerate: Ratio,
    pub pixel_aspect: Ratio,
    pub colorspace: Colorspace,
    /// the `X…` header fields without their `X`
    pub vendor_extensions: Vec<VendorExtensionString>,
}

impl Y4mHeader {
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// width and height of the chroma planes, `None` for layouts that are not 8 bit
    fn chroma_size(&self) -> Option<(usize, usize)> {
        let (w, h) = (self.width, self.height);
        match self.colorspace {
            Colorspace::C444 => Some((w, h)),
            Colorspace::C422 => Some(((w + 1) / 2, h)),
            Colorspace::C420
            | Colorspace::C420jpeg
            | Colorspace::C420paldv
            | Colorspace::C420mpeg2 => Some(((w + 1) / 2, (h + 1) / 2)),
            Colorspace::Cmono => Some((0, 0)),
            _ => None,
        }
    }

    fn is_full_chroma(&self) -> bool {
        matches!(self.colorspace, Colorspace::C444)
    }
}

/// A YUV4MPEG2 video of which only the first frame is kept in memory.
///
/// The first frame is held as interleaved `Y, Cb, Cr` triples, row major, so that
/// it is traversed exactly like the `R, G, B` triples of an image. Subsampled chroma
/// is upsampled to full resolution on reading.
#[derive(Debug)]
pub struct Y4mVideo {
    source: PathBuf,
    header: Y4mHeader,
    first_frame: Vec<u8>,
}

impl Y4mVideo {
    pub fn from_file(file: &Path) -> Result<Self> {
        let reader = File::open(file).map_err(|source| ShroudError::ReadError { source })?;
        let (header, first_frame) = read_first_frame(BufReader::new(reader))?;

        Ok(Self {
            source: file.to_path_buf(),
            header,
            first_frame,
        })
    }

    pub fn header(&self) -> &Y4mHeader {
        &self.header
    }

    /// re-reads the source and writes it to `writer`, with the (possibly modified) first frame in place of the original one
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let reader = File::open(&self.source).map_err(|source| ShroudError::ReadError { source })?;
        copy_with_first_frame(BufReader::new(reader), writer, &self.first_frame)
    }
}

impl LsbCarrier for Y4mVideo {
    fn samples(&self) -> &[u8] {
        &self.first_frame
    }

    fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.first_frame
    }
}

fn open_decoder<R: Read>(reader: R) -> Result<(y4m::Decoder<R>, Y4mHeader)> {
    let decoder = y4m::decode(reader).map_err(ShroudError::InvalidVideoMedia)?;
    let vendor_extensions = decoder
        .get_raw_params()
        .split(|b| *b == b' ')
        .filter_map(|field| field.strip_prefix(b"X"))
        .map(|value| VendorExtensionString::new(value.to_vec()))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(ShroudError::InvalidVideoMedia)?;
    let header = Y4mHeader {
        width: decoder.get_width(),
        height: decoder.get_height(),
        framerate: decoder.get_framerate(),
        pixel_aspect: decoder.get_pixel_aspect(),
        colorspace: decoder.get_colorspace(),
        vendor_extensions,
    };
    if header.chroma_size().is_none() {
        return Err(ShroudError::UnsupportedVideoColorspace(header.colorspace));
    }

    Ok((decoder, header))
}

/// reads the stream header and the first frame as interleaved 4:4:4 triples, nothing else is read
pub fn read_first_frame<R: Read>(reader: R) -> Result<(Y4mHeader, Vec<u8>)> {
    let (mut decoder, header) = open_decoder(reader)?;
    let frame = match decoder.read_frame() {
        Ok(frame) => frame,
        Err(y4m::Error::EOF) => return Err(ShroudError::EmptyVideo),
        Err(e) => return Err(ShroudError::InvalidVideoMedia(e)),
    };
    let triples = to_triples(&frame, &header)?;
    debug!(
        "read first video frame of {}x{} ({:?})",
        header.width, header.height, header.colorspace
    );

    Ok((header, triples))
}

/// copies a stream frame by frame as 8 bit 4:4:4, replacing the first frame with `first_frame` (interleaved triples)
///
/// Header fields other than the colorspace are kept, vendor extensions included.
/// Frames of a subsampled source are upsampled, frame parameters are kept for every frame.
pub fn copy_with_first_frame<R: Read, W: Write>(
    reader: R,
    writer: W,
    first_frame: &[u8],
) -> Result<()> {
    let (mut decoder, header) = open_decoder(reader)?;
    if first_frame.len() != header.pixel_count() * 3 {
        return Err(ShroudError::InvalidVideoMedia(y4m::Error::BadInput));
    }
    let first_params = match decoder.read_frame() {
        Ok(frame) => frame_params(&frame),
        Err(y4m::Error::EOF) => return Err(ShroudError::EmptyVideo),
        Err(e) => return Err(ShroudError::InvalidVideoMedia(e)),
    };

    let mut builder = y4m::encode(header.width, header.height, header.framerate)
        .with_colorspace(Colorspace::C444)
        .with_pixel_aspect(header.pixel_aspect);
    for extension in &header.vendor_extensions {
        builder = builder.append_vendor_extension(extension.clone());
    }
    let mut encoder = builder
        .write_header(writer)
        .map_err(ShroudError::VideoEncodingError)?;

    write_triples(&mut encoder, first_frame, first_params)?;

    let mut frames = 1;
    loop {
        match decoder.read_frame() {
            Ok(frame) if header.is_full_chroma() => encoder
                .write_frame(&frame)
                .map_err(ShroudError::VideoEncodingError)?,
            Ok(frame) => write_triples(
                &mut encoder,
                &to_triples(&frame, &header)?,
                frame_params(&frame),
            )?,
            Err(y4m::Error::EOF) => break,
            Err(e) => return Err(ShroudError::InvalidVideoMedia(e)),
        }
        frames += 1;
    }
    debug!("copied {frames} video frames");

    Ok(())
}

fn frame_params(frame: &Frame) -> Option<Vec<u8>> {
    frame.get_raw_params().map(<[u8]>::to_vec)
}

fn write_triples<W: Write>(
    encoder: &mut y4m::Encoder<W>,
    triples: &[u8],
    params: Option<Vec<u8>>,
) -> Result<()> {
    let [y, u, v] = deinterleave(triples);
    encoder
        .write_frame(&Frame::new([&y, &u, &v], params))
        .map_err(ShroudError::VideoEncodingError)
}

/// interleaves the planes of a frame into `Y, Cb, Cr` triples, chroma is repeated for subsampled layouts
fn to_triples(frame: &Frame, header: &Y4mHeader) -> Result<Vec<u8>> {
    let (w, h) = (header.width, header.height);
    let (cw, ch) = header
        .chroma_size()
        .ok_or(ShroudError::UnsupportedVideoColorspace(header.colorspace))?;
    let (y, u, v) = (frame.get_y_plane(), frame.get_u_plane(), frame.get_v_plane());
    if y.len() != w * h || u.len() != cw * ch || v.len() != cw * ch {
        return Err(ShroudError::InvalidVideoMedia(y4m::Error::BadInput));
    }

    let mut triples = vec![0u8; w * h * 3];
    for row in 0..h {
        for col in 0..w {
            let p = row * w + col;
            triples[3 * p] = y[p];
            if cw == 0 {
                // monochrome
                triples[3 * p + 1] = 128;
                triples[3 * p + 2] = 128;
            } else {
                let c = (row * ch / h) * cw + col * cw / w;
                triples[3 * p + 1] = u[c];
                triples[3 * p + 2] = v[c];
            }
        }
    }

    Ok(triples)
}

fn deinterleave(triples: &[u8]) -> [Vec<u8>; 3] {
    let n = triples.len() / 3;
    let mut planes = [vec![0u8; n], vec![0u8; n], vec![0u8; n]];
    for i in 0..n {
        for (c, plane) in planes.iter_mut().enumerate() {
            plane[i] = triples[3 * i + c];
        }
    }
    planes
}
