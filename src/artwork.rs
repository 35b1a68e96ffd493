use std::io::Cursor;

use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat};
use serde::Serialize;

/// A fetched image encoded as a base64 PNG string, ready to embed in a JSON
/// payload or a data URL.
#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct Artwork(String);

impl Artwork {
    pub fn from_image(image: &DynamicImage) -> Result<Self> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png)?;
        Ok(Self(STANDARD.encode(buffer.into_inner())))
    }

    pub fn get_string(&self) -> &String {
        &self.0
    }
}

impl From<&Artwork> for Artwork {
    fn from(value: &Artwork) -> Self {
        Artwork(value.0.clone())
    }
}
