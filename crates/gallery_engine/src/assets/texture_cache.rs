//! Texture loading and caching
//!
//! Decodes image files into RGBA8 pixel blocks ready for GPU upload and
//! caches them by path so a texture shared by several scene objects is
//! decoded once. The cache holds CPU-side data only; uploading is the
//! renderer's business.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::AssetError;

/// Decoded image data ready for GPU upload
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels (always 4 for RGBA)
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path, converting to RGBA8
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AssetError::NotFound(path.display().to_string()));
        }

        let img = image::open(path)
            .map_err(|e| AssetError::InvalidData(format!("{}: {}", path.display(), e)))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::debug!("decoded {}x{} texture from {}", width, height, path.display());

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
            channels: 4,
        })
    }

    /// Create a solid color image
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);
        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }
        Self {
            data,
            width,
            height,
            channels: 4,
        }
    }

    /// Size of the pixel data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

/// Path-keyed cache of decoded textures
#[derive(Default)]
pub struct TextureCache {
    images: HashMap<PathBuf, ImageData>,
}

impl TextureCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a texture, decoding it on first use
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<&ImageData, AssetError> {
        let path = path.as_ref();
        if !self.images.contains_key(path) {
            let image = ImageData::from_file(path)?;
            self.images.insert(path.to_path_buf(), image);
        }
        Ok(&self.images[path])
    }

    /// Look up a texture already in the cache
    pub fn get<P: AsRef<Path>>(&self, path: P) -> Option<&ImageData> {
        self.images.get(path.as_ref())
    }

    /// Number of cached textures
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Drop every cached texture
    pub fn clear(&mut self) {
        self.images.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 opaque white PNG
    const WHITE_PIXEL_PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
        0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
        0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0B, 0x49, 0x44, 0x41, 0x54, 0x78,
        0x9C, 0x63, 0xF8, 0x0F, 0x04, 0x00, 0x09, 0xFB, 0x03, 0xFD, 0xFB, 0x5E, 0x6B, 0x2B,
        0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn test_png_decodes_to_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("white.png");
        std::fs::write(&path, WHITE_PIXEL_PNG).unwrap();

        let image = ImageData::from_file(&path).unwrap();
        assert_eq!((image.width, image.height), (1, 1));
        assert_eq!(image.channels, 4);
        assert_eq!(image.data, vec![255, 255, 255, 255]);
    }

    #[test]
    fn test_cache_decodes_once_per_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("white.png");
        std::fs::write(&path, WHITE_PIXEL_PNG).unwrap();

        let mut cache = TextureCache::new();
        cache.load(&path).unwrap();
        cache.load(&path).unwrap();
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&path).is_some());
    }

    #[test]
    fn test_solid_color_image() {
        let img = ImageData::solid_color(4, 4, [255, 0, 0, 255]);
        assert_eq!(img.width, 4);
        assert_eq!(img.height, 4);
        assert_eq!(img.channels, 4);
        assert_eq!(img.size_bytes(), 4 * 4 * 4);
        assert_eq!(&img.data[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_missing_texture_is_not_found() {
        assert!(matches!(
            ImageData::from_file("/no/such/texture.png"),
            Err(AssetError::NotFound(_))
        ));
    }

    #[test]
    fn test_cache_load_failure_leaves_cache_empty() {
        let mut cache = TextureCache::new();
        assert!(cache.load("/no/such/texture.png").is_err());
        assert!(cache.is_empty());
    }
}
