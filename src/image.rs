use crate::error::Img2PdfError;
use image::{DynamicImage, ImageFormat};
use lopdf::{Dictionary, Object, ObjectId, Stream};
use jpeg_decoder::PixelFormat;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use std::{io::Cursor, path::Path};

pub enum RasterImageType {
    /// Baseline JPEG data that PDF readers can decode themselves, kept as the
    /// original file bytes
    DirectlyEmbeddableJpeg { data: Vec<u8>, gray: bool },
    Image(DynamicImage),
}

/// A decoded raster image, ready to be embedded in a document
pub struct Image {
    pub image: RasterImageType,
    pub width: u32,
    pub height: u32,
}

struct EncodeOutput {
    filter: &'static str,
    color_space: &'static str,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    /// Read and decode an image from disk. The file is decoded exactly once;
    /// the result carries both the dimensions and the pixel data.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Image, Img2PdfError> {
        let path = path.as_ref();
        let is_tga = if let Some(ext) = path.extension() {
            ext.to_ascii_lowercase() == std::ffi::OsString::from("tga")
        } else {
            false
        };

        let data = std::fs::read(path)?;

        let format = if is_tga {
            ImageFormat::Tga
        } else {
            image::guess_format(&data)?
        };
        let decoded = image::load_from_memory_with_format(&data, format)?;
        let width = decoded.width();
        let height = decoded.height();

        // the decoder converts CMYK and YCCK to RGB, so only the file's own
        // component count says whether its bytes are RGB
        let image = match jpeg_pixel_format(format, &data) {
            // we can embed it directly!
            Some(PixelFormat::RGB24) => {
                RasterImageType::DirectlyEmbeddableJpeg { data, gray: false }
            }
            Some(PixelFormat::L8) => RasterImageType::DirectlyEmbeddableJpeg { data, gray: true },
            _ => RasterImageType::Image(decoded),
        };

        Ok(Image {
            image,
            width,
            height,
        })
    }

    fn encode_raster(&self) -> EncodeOutput {
        match &self.image {
            RasterImageType::DirectlyEmbeddableJpeg { data, gray } => EncodeOutput {
                filter: "DCTDecode",
                color_space: if *gray { "DeviceGray" } else { "DeviceRGB" },
                bytes: data.clone(),
                mask: None,
            },
            RasterImageType::Image(image) => {
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<u8> = image.to_rgba8().pixels().map(|p| p.0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

                EncodeOutput {
                    filter: "FlateDecode",
                    color_space: "DeviceRGB",
                    bytes,
                    mask,
                }
            }
        }
    }

    fn xobject_dict(&self, color_space: &str, filter: &str) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", Object::Name(b"Image".to_vec()));
        dict.set("Width", Object::Integer(self.width as i64));
        dict.set("Height", Object::Integer(self.height as i64));
        dict.set("ColorSpace", Object::Name(color_space.as_bytes().to_vec()));
        dict.set("BitsPerComponent", Object::Integer(8));
        dict.set("Filter", Object::Name(filter.as_bytes().to_vec()));
        dict
    }

    /// Adds this image (and its transparency mask, if it has one) to the
    /// document as image XObjects, returning the id of the image object
    pub fn embed(&self, doc: &mut lopdf::Document) -> ObjectId {
        let encoded = self.encode_raster();

        let mut dict = self.xobject_dict(encoded.color_space, encoded.filter);

        // add a transparency mask if we have one
        if let Some(mask) = encoded.mask {
            let mask_dict = self.xobject_dict("DeviceGray", "FlateDecode");
            let mask_id = doc.add_object(Stream::new(mask_dict, mask));
            dict.set("SMask", Object::Reference(mask_id));
        }

        doc.add_object(Stream::new(dict, encoded.bytes))
    }
}

/// The pixel format stored in a JPEG's frame header, or [None] if `data`
/// isn't a JPEG the header can be read from
fn jpeg_pixel_format(format: ImageFormat, data: &[u8]) -> Option<PixelFormat> {
    if format != ImageFormat::Jpeg {
        return None;
    }
    let mut decoder = jpeg_decoder::Decoder::new(Cursor::new(data));
    decoder.read_info().ok()?;
    decoder.info().map(|info| info.pixel_format)
}
