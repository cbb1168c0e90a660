//! Bild-Export: Snapshot mit Beschriftung (Titel, Zeitstempel, Stückliste)
//! zusammensetzen und als PNG kodieren.

use crate::core::PartsSummary;
use crate::render::text;
use anyhow::Result;
use chrono::{DateTime, Local};
use image::{ImageEncoder, Rgba, RgbaImage};
use std::path::Path;

/// Beschriftung eines exportierten Bildes.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportAnnotation {
    /// Titelzeile
    pub title: String,
    /// Formatierter Zeitstempel
    pub timestamp: String,
    /// Teile-Zählung der Struktur
    pub summary: PartsSummary,
}

impl ExportAnnotation {
    /// Erstellt eine Beschriftung zum Zeitpunkt `now`.
    pub fn new(title: &str, now: DateTime<Local>, summary: PartsSummary) -> Self {
        Self {
            title: title.to_string(),
            timestamp: now.format("%Y-%m-%d %H:%M").to_string(),
            summary,
        }
    }

    /// Textzeilen des Banners.
    pub fn lines(&self) -> Vec<String> {
        let s = &self.summary;
        vec![
            format!("{} - {}", self.title, self.timestamp),
            format!("Rohre: {} x 20cm, {} x 40cm", s.pipes_20, s.pipes_40),
            format!(
                "Verbinder: {} x 2-Wege, {} x 3-Wege, {} x 4-Wege",
                s.two_way, s.three_way, s.four_way
            ),
        ]
    }
}

/// Zeichnet das Beschriftungs-Banner auf eine Kopie des Frames.
pub fn compose(frame: &RgbaImage, annotation: &ExportAnnotation) -> RgbaImage {
    let mut image = frame.clone();
    let width = image.width();
    let scale = (width / 640).clamp(1, 4);
    let line_h = text::text_height(scale) + scale * 3;
    let lines = annotation.lines();
    let bar_h = line_h * lines.len() as u32 + scale * 6;

    text::draw_rect_blended(
        &mut image,
        0,
        0,
        width,
        bar_h,
        Rgba([30, 30, 30, 255]),
        0.7,
    );

    let tx = (scale * 4) as i32;
    let mut ty = (scale * 3) as i32;
    for line in &lines {
        text::draw_text(&mut image, tx, ty, line, Rgba([255, 255, 255, 255]), scale);
        ty += line_h as i32;
    }
    image
}

/// Kodiert ein Bild als PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buffer);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(buffer)
}

/// Schreibt ein Bild als PNG-Datei.
pub fn write_png(path: &Path, image: &RgbaImage) -> Result<()> {
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Standard-Dateiname mit Zeitstempel, z.B. `pipe-lattice-20261014-093000.png`.
pub fn default_file_name(prefix: &str, now: DateTime<Local>) -> String {
    format!("{}-{}.png", prefix, now.format("%Y%m%d-%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 10, 14, 9, 30, 0)
            .single()
            .expect("eindeutige Lokalzeit erwartet")
    }

    fn summary() -> PartsSummary {
        PartsSummary {
            pipes_20: 14,
            pipes_40: 5,
            free_anchors: 1,
            two_way: 7,
            three_way: 8,
            four_way: 0,
        }
    }

    #[test]
    fn test_annotation_lines_contain_counts() {
        let annotation = ExportAnnotation::new("Regal", fixed_time(), summary());
        let lines = annotation.lines();
        assert_eq!(lines[0], "Regal - 2026-10-14 09:30");
        assert_eq!(lines[1], "Rohre: 14 x 20cm, 5 x 40cm");
        assert!(lines[2].contains("8 x 3-Wege"));
    }

    #[test]
    fn test_compose_draws_banner_and_keeps_size() {
        let frame = RgbaImage::from_pixel(320, 200, Rgba([200, 200, 200, 255]));
        let annotation = ExportAnnotation::new("Test", fixed_time(), summary());
        let composed = compose(&frame, &annotation);

        assert_eq!(composed.dimensions(), frame.dimensions());
        // Banner abgedunkelt, Bildunterkante unverändert
        assert!(composed.get_pixel(300, 2)[0] < 200);
        assert_eq!(composed.get_pixel(10, 199), frame.get_pixel(10, 199));
    }

    #[test]
    fn test_encode_png_has_signature() {
        let image = RgbaImage::new(4, 4);
        let bytes = encode_png(&image).expect("PNG-Kodierung erwartet");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            default_file_name("pipe-lattice", fixed_time()),
            "pipe-lattice-20261014-093000.png"
        );
    }
}
