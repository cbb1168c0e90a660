//! Software-Rasterizer für Standbilder der Szene.
//!
//! Isometrische Drahtgitter-Ansicht: Rohre als Linien, Verbinder als
//! halbtransparente Quadrate. Die Projektion wird so skaliert, dass die
//! gesamte Struktur mit Rand ins Bild passt.

use super::text::{blend_pixel, put_pixel_checked};
use crate::shared::RenderScene;
use glam::{Vec2, Vec3};
use image::{Rgba, RgbaImage};

const COS_30: f32 = 0.866_025_4;
const SIN_30: f32 = 0.5;
/// Bildrand in Pixeln.
const MARGIN_PX: f32 = 48.0;

/// Isometrische Projektion (Bildschirm-y zeigt nach unten).
fn isometric(world: Vec3) -> Vec2 {
    Vec2::new(
        (world.x - world.y) * COS_30,
        (world.x + world.y) * SIN_30 - world.z,
    )
}

/// Abbildung projizierter Koordinaten auf Bildpixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    scale: f32,
    offset: Vec2,
}

impl Projection {
    /// Passt alle Punkte mittig in ein Bild der Größe `width`×`height`.
    pub fn fit(points: impl IntoIterator<Item = Vec3>, width: u32, height: u32) -> Self {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for p in points {
            let iso = isometric(p);
            min = min.min(iso);
            max = max.max(iso);
        }
        if !min.is_finite() || !max.is_finite() {
            min = Vec2::ZERO;
            max = Vec2::ZERO;
        }

        let extent = (max - min).max(Vec2::splat(0.1));
        let avail = Vec2::new(
            (width as f32 - 2.0 * MARGIN_PX).max(1.0),
            (height as f32 - 2.0 * MARGIN_PX).max(1.0),
        );
        let scale = (avail.x / extent.x).min(avail.y / extent.y);
        let center = (min + max) * 0.5;
        let offset = Vec2::new(width as f32, height as f32) * 0.5 - center * scale;
        Self { scale, offset }
    }

    /// Weltpunkt → Pixelposition.
    pub fn project(&self, world: Vec3) -> Vec2 {
        isometric(world) * self.scale + self.offset
    }
}

/// Wandelt eine RGBA-Farbe (0..1) in 8-Bit-Kanäle.
pub fn to_rgba8(color: [f32; 4]) -> Rgba<u8> {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba([c(color[0]), c(color[1]), c(color[2]), c(color[3])])
}

/// Zeichnet eine dicke Linie (DDA mit quadratischem Pinsel).
fn draw_line(image: &mut RgbaImage, from: Vec2, to: Vec2, width: u32, color: [f32; 4]) {
    let rgba = to_rgba8(color);
    let alpha = color[3];
    let steps = (to - from).abs().max_element().ceil().max(1.0) as i32;
    let half = width as i32 / 2;
    for i in 0..=steps {
        let p = from.lerp(to, i as f32 / steps as f32);
        let (cx, cy) = (p.x.round() as i32, p.y.round() as i32);
        for dy in -half..=half {
            for dx in -half..=half {
                if alpha >= 1.0 {
                    put_pixel_checked(image, cx + dx, cy + dy, rgba);
                } else {
                    blend_pixel(image, cx + dx, cy + dy, rgba, alpha);
                }
            }
        }
    }
}

/// Zeichnet ein zentriertes, geblendetes Quadrat.
fn draw_square(image: &mut RgbaImage, center: Vec2, size: u32, color: [f32; 4]) {
    let rgba = to_rgba8(color);
    let half = size as i32 / 2;
    let (cx, cy) = (center.x.round() as i32, center.y.round() as i32);
    for dy in -half..=half {
        for dx in -half..=half {
            blend_pixel(image, cx + dx, cy + dy, rgba, color[3]);
        }
    }
}

/// Zeichnet nur den Rand eines Quadrats (Anker-Markierung).
fn draw_square_outline(image: &mut RgbaImage, center: Vec2, size: u32, color: [f32; 4]) {
    let rgba = to_rgba8(color);
    let half = size as i32 / 2;
    let (cx, cy) = (center.x.round() as i32, center.y.round() as i32);
    for d in -half..=half {
        for (x, y) in [
            (cx + d, cy - half),
            (cx + d, cy + half),
            (cx - half, cy + d),
            (cx + half, cy + d),
        ] {
            put_pixel_checked(image, x, y, rgba);
        }
    }
}

/// Rendert die Szene in ein neues Bild der Export-Größe.
pub fn render(scene: &RenderScene) -> RgbaImage {
    let export = &scene.options.export;
    let (width, height) = (export.width_px.max(1), export.height_px.max(1));
    let mut image = RgbaImage::from_pixel(width, height, to_rgba8(scene.options.background_color));

    let points = scene
        .nodes
        .iter()
        .map(|n| n.point.to_world())
        .chain(scene.ghost.iter().flat_map(|g| g.endpoints().map(|p| p.to_world())));
    let projection = Projection::fit(points, width, height);

    for pipe in &scene.pipes {
        draw_line(
            &mut image,
            projection.project(pipe.start.to_world()),
            projection.project(pipe.end().to_world()),
            export.pipe_width_px,
            scene.pipe_color(pipe),
        );
    }

    if let Some(ghost) = &scene.ghost {
        draw_line(
            &mut image,
            projection.project(ghost.start.to_world()),
            projection.project(ghost.end().to_world()),
            export.pipe_width_px,
            scene.options.ghost_color,
        );
    }

    for node in &scene.nodes {
        draw_square(
            &mut image,
            projection.project(node.point.to_world()),
            export.connector_size_px,
            scene.node_color(node),
        );
    }

    if let Some(anchor) = scene.anchor {
        draw_square_outline(
            &mut image,
            projection.project(anchor.to_world()),
            export.connector_size_px + 6,
            scene.options.ghost_color,
        );
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_projection_keeps_points_inside_image() {
        let points = [Vec3::ZERO, Vec3::new(1.6, 0.8, 1.2)];
        let projection = Projection::fit(points, 640, 480);
        for p in points {
            let px = projection.project(p);
            assert!(px.x >= MARGIN_PX - 0.5 && px.x <= 640.0 - MARGIN_PX + 0.5);
            assert!(px.y >= MARGIN_PX - 0.5 && px.y <= 480.0 - MARGIN_PX + 0.5);
        }
    }

    #[test]
    fn test_single_point_is_centered() {
        let projection = Projection::fit([Vec3::ZERO], 200, 100);
        let px = projection.project(Vec3::ZERO);
        assert_relative_eq!(px.x, 100.0, epsilon = 1e-3);
        assert_relative_eq!(px.y, 50.0, epsilon = 1e-3);
    }

    #[test]
    fn test_higher_z_is_drawn_above() {
        let projection = Projection::fit([Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)], 200, 200);
        let low = projection.project(Vec3::ZERO);
        let high = projection.project(Vec3::new(0.0, 0.0, 1.0));
        assert!(high.y < low.y);
    }

    #[test]
    fn test_color_conversion_clamps() {
        assert_eq!(to_rgba8([1.5, -0.2, 0.5, 1.0]), Rgba([255, 0, 128, 255]));
    }
}
