use std::io::{BufReader, Cursor};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::Error;

/// PNG bytes of a captured signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureImage {
    png: Vec<u8>,
}

impl SignatureImage {
    pub fn from_png(png: Vec<u8>) -> Self {
        SignatureImage { png }
    }

    /// Accepts `data:image/png;base64,...` (what a signature pad produces) or
    /// bare base64.
    pub fn from_data_url(url: &str) -> Result<Self, Error> {
        let payload = match url.strip_prefix("data:") {
            Some(rest) => {
                let (meta, data) = rest
                    .split_once(',')
                    .ok_or_else(|| Error::Signature("data URL has no payload".into()))?;
                let mut parts = meta.split(';');
                let mime = parts.next().unwrap_or("");
                if !mime.eq_ignore_ascii_case("image/png") {
                    return Err(Error::Signature(format!("unsupported image type '{mime}'")));
                }
                if !parts.any(|p| p.eq_ignore_ascii_case("base64")) {
                    return Err(Error::Signature("data URL is not base64-encoded".into()));
                }
                data
            }
            None => url,
        };
        let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        let png = STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| Error::Signature(format!("base64 decode error: {e}")))?;
        if png.is_empty() {
            return Err(Error::Signature("signature image is empty".into()));
        }
        Ok(SignatureImage { png })
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub(crate) fn decode(&self) -> Result<DecodedImage, Error> {
        let reader = image::ImageReader::with_format(
            BufReader::new(Cursor::new(&self.png)),
            image::ImageFormat::Png,
        );
        let decoded = reader
            .decode()
            .map_err(|e| Error::Signature(format!("cannot decode PNG: {e}")))?;
        let rgba: image::RgbaImage = decoded.to_rgba8();
        let (width, height) = (rgba.width(), rgba.height());
        let has_alpha = rgba.pixels().any(|p| p.0[3] < 255);

        let rgb: Vec<u8> = rgba
            .pixels()
            .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
            .collect();
        let alpha = has_alpha.then(|| rgba.pixels().map(|p| p.0[3]).collect());

        Ok(DecodedImage {
            width,
            height,
            rgb,
            alpha,
        })
    }
}

/// A captured signature: the image plus the date it was captured.
/// Immutable; re-signing builds a new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    image: SignatureImage,
    captured_at: Option<String>,
}

impl Signature {
    pub fn new(image: SignatureImage, captured_at: Option<String>) -> Self {
        Signature { image, captured_at }
    }

    pub fn image(&self) -> &SignatureImage {
        &self.image
    }

    pub fn captured_at(&self) -> Option<&str> {
        self.captured_at.as_deref()
    }
}

/// Raw pixels ready for an image XObject: 8-bit RGB plus an optional
/// 8-bit soft mask.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
    pub alpha: Option<Vec<u8>>,
}
