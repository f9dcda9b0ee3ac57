//! QR bitmap rendering.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use qrcode::render::svg;

use crate::error::{AppError, AppResult};

/// Output formats for a rendered QR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    #[default]
    Png,
    Svg,
}

impl RenderFormat {
    /// ## Errors
    /// Returns `AppError::BadRequest` for anything but `png` or `svg`.
    pub fn from_query(value: &str) -> AppResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            other => Err(AppError::BadRequest(format!(
                "unsupported render format {other:?}, expected png or svg"
            ))),
        }
    }

    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }
}

/// ## Summary
/// Renders `data` as a PNG at least `size` pixels on each side.
///
/// ## Errors
/// Returns `AppError::QrError` if the data does not fit in a QR code, or
/// `AppError::ImageError` if PNG encoding fails.
pub fn render_png(data: &str, size: u32) -> AppResult<Vec<u8>> {
    let code = QrCode::new(data.as_bytes())?;
    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(size, size)
        .build();

    let mut png_bytes = Vec::new();
    DynamicImage::ImageLuma8(image).write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)?;

    tracing::debug!(size, bytes = png_bytes.len(), "Rendered PNG");
    Ok(png_bytes)
}

/// ## Summary
/// Renders `data` as SVG markup at least `size` pixels on each side.
///
/// ## Errors
/// Returns `AppError::QrError` if the data does not fit in a QR code.
pub fn render_svg(data: &str, size: u32) -> AppResult<String> {
    let code = QrCode::new(data.as_bytes())?;
    Ok(code
        .render()
        .min_dimensions(size, size)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn renders_png_at_least_requested_size() {
        let bytes = render_png("WIFI:T:WPA;S:MyNetwork;P:password123;;", 200).unwrap();
        assert!(bytes.starts_with(PNG_SIGNATURE));

        let image = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();
        assert!(image.width() >= 200);
        assert_eq!(image.width(), image.height());
    }

    #[test]
    fn renders_svg() {
        let svg = render_svg("geo:37.7749,-122.4194", 128).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#000000"));
    }

    #[test]
    fn oversized_data_is_rejected() {
        let err = render_png(&"x".repeat(8000), 256).unwrap_err();
        assert!(matches!(err, AppError::QrError(_)));
    }

    #[test]
    fn parses_format() {
        assert_eq!(RenderFormat::from_query("SVG").unwrap(), RenderFormat::Svg);
        assert_eq!(RenderFormat::from_query("png").unwrap(), RenderFormat::Png);
        assert!(RenderFormat::from_query("gif").is_err());
    }
}
