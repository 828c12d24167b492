use anyhow::{Context, Result};
use eframe::egui;

/// What the preview area currently shows.
pub enum PreviewState {
    Frame {
        texture: egui::TextureHandle,
        time: f64,
    },
    Failed {
        time: f64,
        message: String,
    },
}

impl PreviewState {
    pub fn time(&self) -> f64 {
        match self {
            PreviewState::Frame { time, .. } | PreviewState::Failed { time, .. } => *time,
        }
    }
}

/// Decode an encoded image into an egui texture
pub fn load_frame_texture(
    ctx: &egui::Context,
    encoded: &[u8],
    name: &str,
) -> Result<egui::TextureHandle> {
    let image = image::load_from_memory(encoded).context("preview frame is not a valid image")?;
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = rgba.into_raw();

    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);

    Ok(ctx.load_texture(name, color_image, egui::TextureOptions::default()))
}

#[cfg(test)]
pub(crate) fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(4, 2, image::Rgba([200, 10, 10, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_becomes_texture() {
        let ctx = egui::Context::default();
        let texture = load_frame_texture(&ctx, &tiny_png(), "preview").unwrap();
        assert_eq!(texture.size(), [4, 2]);
    }

    #[test]
    fn test_garbage_is_an_error() {
        let ctx = egui::Context::default();
        assert!(load_frame_texture(&ctx, b"not a png", "preview").is_err());
    }
}
