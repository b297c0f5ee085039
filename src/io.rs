use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, GrayImage, Luma};
use thiserror::Error;

use crate::gray::GrayBuffer;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("cannot read input image: {0}")]
    Read(#[from] std::io::Error),
    #[error("cannot decode input image: {0}")]
    Malformed(#[from] image::ImageError),
    #[error("unsupported image format (want GIF, JPEG or PNG)")]
    UnsupportedFormat,
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("cannot create output file: {0}")]
    Create(#[from] std::io::Error),
    #[error("cannot encode output image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Containers the tool reads. Output always reuses the container the input
/// decoded from, whatever the output path's extension says.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImageFormat {
    Gif,
    Jpeg,
    Png,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Gif => "gif",
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }
}

/// Decode an image file, sniffing the container from its content.
pub fn load_image(path: &Path) -> Result<(DynamicImage, ImageFormat), DecodeError> {
    let reader = image::io::Reader::open(path)?.with_guessed_format()?;
    let format = match reader.format() {
        Some(image::ImageFormat::Gif) => ImageFormat::Gif,
        Some(image::ImageFormat::Jpeg) => ImageFormat::Jpeg,
        Some(image::ImageFormat::Png) => ImageFormat::Png,
        _ => return Err(DecodeError::UnsupportedFormat),
    };
    Ok((reader.decode()?, format))
}

/// Encode a dithered plane into `format` at `path`. Samples must already be
/// two-level, so narrowing to 8 bits is lossless.
pub fn save_image(img: &GrayBuffer, path: &Path, format: ImageFormat) -> Result<(), EncodeError> {
    let out = GrayImage::from_fn(img.width(), img.height(), |x, y| Luma([img.get(x, y) as u8]));
    match format {
        ImageFormat::Gif => {
            // the gif encoder takes RGB frames and palettizes them itself
            let rgb = DynamicImage::ImageLuma8(out).into_rgb8();
            image::save_buffer_with_format(
                path,
                &rgb,
                rgb.width(),
                rgb.height(),
                ColorType::Rgb8,
                image::ImageFormat::Gif,
            )?;
        }
        ImageFormat::Jpeg => {
            let writer = BufWriter::new(File::create(path)?);
            JpegEncoder::new_with_quality(writer, 100).encode(
                &out,
                out.width(),
                out.height(),
                ColorType::L8,
            )?;
        }
        ImageFormat::Png => {
            image::save_buffer_with_format(
                path,
                &out,
                out.width(),
                out.height(),
                ColorType::L8,
                image::ImageFormat::Png,
            )?;
        }
    }
    Ok(())
}
