//! CPU-side pixel storage with an optional device texture
//!
//! An [`Image`] owns a row-major RGBA pixel buffer that can be decoded from
//! and encoded to disk, and uploaded to the GPU for display inside a layer.

use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::ops::{Index, IndexMut};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use bytemuck::{Pod, Zeroable};
use glow::{HasContext, NativeTexture};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageReader};
use thiserror::Error;

/// Image loading and pixel access errors
#[derive(Error, Debug)]
pub enum ImageError {
    /// The path does not resolve to an existing file
    #[error("no file found at \"{0}\"")]
    NotFound(PathBuf),

    /// The file exists but its bytes could not be parsed as a raster image
    #[error("failed to decode image: {0}")]
    Decode(String),

    /// The encoder rejected the pixel buffer
    #[error("failed to encode image: {0}")]
    Encode(String),

    /// A checked pixel access was out of range
    #[error("{dimension} index {index} is out of range (must be < {bound})")]
    OutOfRange {
        /// Which dimension was violated
        dimension: Dimension,
        /// The requested index
        index: u32,
        /// The exclusive bound for that dimension
        bound: u32,
    },

    /// IO error while reading or writing the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Names the dimension a checked pixel access violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Row index (`h`), bounded by the image height
    Row,
    /// Column index (`w`), bounded by the image width
    Column,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

/// A single RGBA pixel with four 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Pixel {
    /// Red channel in `[0, 255]`
    pub r: u8,
    /// Green channel in `[0, 255]`
    pub g: u8,
    /// Blue channel in `[0, 255]`
    pub b: u8,
    /// Alpha (opacity) in `[0, 255]`
    pub a: u8,
}

impl Pixel {
    /// Opaque white, the fill value for new and grown images
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    /// Construct a pixel from all four channels
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Construct an opaque pixel from the color channels
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Device texture handle owned by an [`Image`]
///
/// Keeps a shared reference to the GL function table so the texture can be
/// freed when the owning image goes away, regardless of where that happens.
struct DeviceTexture {
    gl: Rc<glow::Context>,
    raw: NativeTexture,
}

impl fmt::Debug for DeviceTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceTexture")
            .field("raw", &self.raw)
            .finish_non_exhaustive()
    }
}

impl Drop for DeviceTexture {
    fn drop(&mut self) {
        unsafe { self.gl.delete_texture(self.raw) };
    }
}

/// A row-major RGBA image with an optional GPU-resident copy
///
/// The device texture reflects the pixel buffer as of the *last*
/// [`send_to_device`](Image::send_to_device) call; mutating or resizing the
/// buffer does not touch the device copy until the next upload.
#[derive(Debug)]
pub struct Image {
    height: u32,
    width: u32,
    pixels: Vec<Pixel>,
    texture: Option<DeviceTexture>,
}

impl Image {
    /// Create an image of the given height and width, all pixels opaque white
    #[must_use]
    pub fn new(height: u32, width: u32) -> Self {
        let len = height as usize * width as usize;
        Self {
            height,
            width,
            pixels: vec![Pixel::WHITE; len],
            texture: None,
        }
    }

    /// Load an image from a file
    ///
    /// The format is detected from the file contents, never the extension,
    /// and the result is normalized to four channels regardless of what the
    /// source stores.
    ///
    /// # Errors
    /// [`ImageError::NotFound`] if the path does not exist,
    /// [`ImageError::Decode`] if the bytes cannot be parsed as a supported
    /// raster format.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ImageError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImageError::NotFound(path.to_path_buf()));
        }

        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let decoded = reader
            .decode()
            .map_err(|e| ImageError::Decode(e.to_string()))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::debug!("loaded image {width}x{height} from {}", path.display());

        let pixels = rgba
            .into_raw()
            .chunks_exact(4)
            .map(|c| Pixel::rgba(c[0], c[1], c[2], c[3]))
            .collect();

        Ok(Self {
            height,
            width,
            pixels,
            texture: None,
        })
    }

    /// Image width in pixels
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Linear size of the pixel buffer (`height * width`)
    #[must_use]
    pub fn size(&self) -> usize {
        self.pixels.len()
    }

    /// The full pixel buffer in row-major order
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// The pixel buffer as raw RGBA bytes, row stride exactly `4 * width`
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Pixel at row `h`, column `w`, without dimension validation
    ///
    /// The linear index is computed as `h * width + w`; an out-of-range `w`
    /// with a small `h` lands on the wrong row rather than failing. Callers
    /// are responsible for pre-validating. Use [`at`](Self::at) for the
    /// checked variant.
    #[must_use]
    pub fn pixel(&self, h: u32, w: u32) -> &Pixel {
        &self.pixels[h as usize * self.width as usize + w as usize]
    }

    /// Mutable pixel at row `h`, column `w`, without dimension validation
    ///
    /// See [`pixel`](Self::pixel) for the indexing caveat.
    pub fn pixel_mut(&mut self, h: u32, w: u32) -> &mut Pixel {
        &mut self.pixels[h as usize * self.width as usize + w as usize]
    }

    /// Pixel at row `h`, column `w`, with bounds checking
    ///
    /// # Errors
    /// [`ImageError::OutOfRange`] naming the violated dimension.
    pub fn at(&self, h: u32, w: u32) -> Result<&Pixel, ImageError> {
        self.check_bounds(h, w)?;
        Ok(self.pixel(h, w))
    }

    /// Mutable pixel at row `h`, column `w`, with bounds checking
    ///
    /// # Errors
    /// [`ImageError::OutOfRange`] naming the violated dimension.
    pub fn at_mut(&mut self, h: u32, w: u32) -> Result<&mut Pixel, ImageError> {
        self.check_bounds(h, w)?;
        Ok(self.pixel_mut(h, w))
    }

    fn check_bounds(&self, h: u32, w: u32) -> Result<(), ImageError> {
        if h >= self.height {
            return Err(ImageError::OutOfRange {
                dimension: Dimension::Row,
                index: h,
                bound: self.height,
            });
        }
        if w >= self.width {
            return Err(ImageError::OutOfRange {
                dimension: Dimension::Column,
                index: w,
                bound: self.width,
            });
        }
        Ok(())
    }

    /// Resize the image without remapping pixel content
    ///
    /// The buffer is resized in place: surviving pixels keep their *linear*
    /// position, so if the width changes their row/column mapping changes
    /// with it. Cells exposed by growing are opaque white. A device texture
    /// uploaded before the resize keeps its old dimensions until the next
    /// [`send_to_device`](Self::send_to_device).
    pub fn resize(&mut self, height: u32, width: u32) {
        self.height = height;
        self.width = width;
        self.pixels
            .resize(height as usize * width as usize, Pixel::WHITE);
    }

    /// Save the image as a PNG file
    ///
    /// Returns `false` if the file could not be written; the cause is logged
    /// at warn level.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        match self.write_png(path) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("failed to write PNG to \"{}\": {e}", path.display());
                false
            }
        }
    }

    fn write_png(&self, path: &Path) -> Result<(), ImageError> {
        let file = File::create(path)?;
        let encoder = PngEncoder::new(BufWriter::new(file));
        encoder
            .write_image(
                self.as_bytes(),
                self.width,
                self.height,
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| ImageError::Encode(e.to_string()))
    }

    /// Save the image as a JPEG file at maximum quality
    ///
    /// JPEG has no alpha channel, so the alpha values are discarded. Returns
    /// `false` if the file could not be written; the cause is logged at warn
    /// level.
    pub fn save_jpg<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        match self.write_jpg(path) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("failed to write JPEG to \"{}\": {e}", path.display());
                false
            }
        }
    }

    fn write_jpg(&self, path: &Path) -> Result<(), ImageError> {
        let rgb: Vec<u8> = self
            .pixels
            .iter()
            .flat_map(|p| [p.r, p.g, p.b])
            .collect();
        let file = File::create(path)?;
        let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), 100);
        encoder
            .write_image(&rgb, self.width, self.height, ExtendedColorType::Rgb8)
            .map_err(|e| ImageError::Encode(e.to_string()))
    }

    /// Upload the pixel buffer to the GPU
    ///
    /// The first call allocates a texture with linear min/mag filtering and
    /// uploads the full buffer; every later call re-uploads the full buffer
    /// to the existing texture. There is no dirty-region tracking.
    pub fn send_to_device(&mut self, gl: &Rc<glow::Context>) {
        let bytes: &[u8] = bytemuck::cast_slice(&self.pixels);
        if let Some(texture) = &self.texture {
            unsafe {
                gl.bind_texture(glow::TEXTURE_2D, Some(texture.raw));
                gl.tex_image_2d(
                    glow::TEXTURE_2D,
                    0,
                    glow::RGBA as i32,
                    self.width as i32,
                    self.height as i32,
                    0,
                    glow::RGBA,
                    glow::UNSIGNED_BYTE,
                    Some(bytes),
                );
                gl.bind_texture(glow::TEXTURE_2D, None);
            }
        } else {
            // Device failures are fatal by design, and texture allocation
            // only fails on a lost or absent context.
            let raw = unsafe { gl.create_texture() }.expect("device texture allocation failed");
            unsafe {
                gl.bind_texture(glow::TEXTURE_2D, Some(raw));
                gl.tex_parameter_i32(
                    glow::TEXTURE_2D,
                    glow::TEXTURE_MIN_FILTER,
                    glow::LINEAR as i32,
                );
                gl.tex_parameter_i32(
                    glow::TEXTURE_2D,
                    glow::TEXTURE_MAG_FILTER,
                    glow::LINEAR as i32,
                );
                gl.pixel_store_i32(glow::UNPACK_ROW_LENGTH, 0);
                gl.tex_image_2d(
                    glow::TEXTURE_2D,
                    0,
                    glow::RGBA as i32,
                    self.width as i32,
                    self.height as i32,
                    0,
                    glow::RGBA,
                    glow::UNSIGNED_BYTE,
                    Some(bytes),
                );
                gl.bind_texture(glow::TEXTURE_2D, None);
            }
            self.texture = Some(DeviceTexture {
                gl: Rc::clone(gl),
                raw,
            });
        }
    }

    /// Free the device texture and clear the handle
    ///
    /// No-op if the image is not on the GPU. Also runs automatically when
    /// the image is dropped.
    pub fn release_from_device(&mut self) {
        self.texture = None;
    }

    /// Whether a device texture exists for this image
    ///
    /// Presence does not mean the device copy is up to date with the pixel
    /// buffer; that is the caller's responsibility.
    #[must_use]
    pub const fn on_gpu(&self) -> bool {
        self.texture.is_some()
    }

    /// The raw GL texture handle, if the image is on the GPU
    #[must_use]
    pub fn texture(&self) -> Option<NativeTexture> {
        self.texture.as_ref().map(|t| t.raw)
    }

    /// The UI-library texture id for drawing this image in a layer
    #[must_use]
    pub fn texture_id(&self) -> Option<imgui::TextureId> {
        self.texture
            .as_ref()
            .map(|t| imgui::TextureId::new(t.raw.0.get() as usize))
    }
}

impl Index<usize> for Image {
    type Output = Pixel;

    fn index(&self, i: usize) -> &Pixel {
        &self.pixels[i]
    }
}

impl IndexMut<usize> for Image {
    fn index_mut(&mut self, i: usize) -> &mut Pixel {
        &mut self.pixels[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn new_image_is_opaque_white() {
        let img = Image::new(4, 6);
        assert_eq!(img.size(), 24);
        assert_eq!(img.height(), 4);
        assert_eq!(img.width(), 6);
        assert!(img.pixels().iter().all(|p| *p == Pixel::WHITE));
    }

    #[test]
    fn linear_and_row_column_access_agree() {
        let mut img = Image::new(3, 5);
        *img.pixel_mut(2, 4) = Pixel::rgb(10, 20, 30);
        assert_eq!(img[2 * 5 + 4], Pixel::rgb(10, 20, 30));

        img[7] = Pixel::rgba(1, 2, 3, 4);
        assert_eq!(*img.pixel(1, 2), Pixel::rgba(1, 2, 3, 4));
    }

    #[test]
    fn checked_access_reports_the_violated_dimension() {
        let mut img = Image::new(3, 5);

        assert!(img.at(2, 4).is_ok());
        for (h, w, dimension) in [
            (3, 0, Dimension::Row),
            (4, 0, Dimension::Row),
            (0, 5, Dimension::Column),
            (0, 6, Dimension::Column),
            // Row violation wins when both are out of range
            (3, 5, Dimension::Row),
        ] {
            match img.at(h, w) {
                Err(ImageError::OutOfRange {
                    dimension: d,
                    index,
                    bound,
                }) => {
                    assert_eq!(d, dimension);
                    assert_eq!(index, if d == Dimension::Row { h } else { w });
                    assert_eq!(bound, if d == Dimension::Row { 3 } else { 5 });
                }
                other => panic!("expected OutOfRange for ({h}, {w}), got {other:?}"),
            }
        }
        assert!(img.at_mut(3, 0).is_err());
    }

    #[test]
    fn resize_preserves_linear_prefix_and_fills_white() {
        let mut img = Image::new(2, 2);
        img[0] = Pixel::rgb(1, 1, 1);
        img[1] = Pixel::rgb(2, 2, 2);
        img[2] = Pixel::rgb(3, 3, 3);
        img[3] = Pixel::rgb(4, 4, 4);

        img.resize(3, 3);
        assert_eq!(img.size(), 9);
        // The first four pixels survive in linear order, not by row/column
        assert_eq!(img[0], Pixel::rgb(1, 1, 1));
        assert_eq!(img[1], Pixel::rgb(2, 2, 2));
        assert_eq!(img[2], Pixel::rgb(3, 3, 3));
        assert_eq!(img[3], Pixel::rgb(4, 4, 4));
        assert!((4..9).all(|i| img[i] == Pixel::WHITE));

        img.resize(1, 2);
        assert_eq!(img.size(), 2);
        assert_eq!(img[1], Pixel::rgb(2, 2, 2));
    }

    #[test]
    fn png_round_trip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let mut img = Image::new(5, 7);
        for i in 0..img.size() {
            img[i] = Pixel::rgba(i as u8, (i * 3) as u8, (i * 7) as u8, 255 - i as u8);
        }
        assert!(img.save_png(&path));

        let back = Image::open(&path).unwrap();
        assert_eq!(back.height(), img.height());
        assert_eq!(back.width(), img.width());
        assert_eq!(back.pixels(), img.pixels());
    }

    #[test]
    fn jpg_round_trip_preserves_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");

        let mut img = Image::new(8, 12);
        for i in 0..img.size() {
            img[i] = Pixel::rgb((i * 5) as u8, 128, (255 - i) as u8);
        }
        assert!(img.save_jpg(&path));

        // JPEG is lossy, so only the dimensions are guaranteed
        let back = Image::open(&path).unwrap();
        assert_eq!(back.height(), 8);
        assert_eq!(back.width(), 12);
    }

    #[test]
    fn decode_sniffs_content_not_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mislabeled.jpg");

        let img = Image::new(2, 2);
        assert!(img.save_png(&path));

        let back = Image::open(&path).unwrap();
        assert_eq!(back.size(), 4);
    }

    #[test]
    fn missing_file_reports_not_found() {
        let err = Image::open("/definitely/not/a/real/file.png").unwrap_err();
        assert!(matches!(err, ImageError::NotFound(_)));
    }

    #[test]
    fn unparseable_file_reports_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"this is not an image").unwrap();
        drop(file);

        let err = Image::open(&path).unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)), "got {err:?}");
    }

    #[test]
    fn fresh_image_has_no_device_texture() {
        let mut img = Image::new(1, 1);
        assert!(!img.on_gpu());
        assert!(img.texture().is_none());
        assert!(img.texture_id().is_none());

        // Releasing without an upload is a no-op, twice in a row included
        img.release_from_device();
        img.release_from_device();
        assert!(!img.on_gpu());
    }
}
