//! Minimalistisches Bitmap-Text-Rendering für Export-Beschriftungen.
//!
//! Eingebetteter 5×7 Font mit Großbuchstaben, Ziffern und den Satzzeichen
//! für Titel, Zeitstempel und Stückliste. Kleinbuchstaben werden als
//! Großbuchstaben gezeichnet, unbekannte Zeichen als Leerraum.

use image::{Rgba, RgbaImage};

const CHAR_WIDTH: usize = 5;
const CHAR_HEIGHT: usize = 7;

/// Zeichnet einen Text-String auf ein RGBA-Bild.
///
/// `scale` = 1 entspricht 5×7 Pixeln pro Zeichen.
pub fn draw_text(image: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba<u8>, scale: u32) {
    let advance = (CHAR_WIDTH as i32 + 1) * scale as i32;
    let mut cursor_x = x;

    for ch in text.chars() {
        if let Some(glyph) = glyph_for(ch) {
            draw_glyph(image, cursor_x, y, &glyph, color, scale);
        }
        cursor_x += advance;
    }
}

/// Pixelbreite eines Texts.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * CHAR_WIDTH as u32 * scale + (chars - 1) * scale
}

/// Pixelhöhe einer Textzeile.
pub fn text_height(scale: u32) -> u32 {
    CHAR_HEIGHT as u32 * scale
}

fn draw_glyph(
    image: &mut RgbaImage,
    x: i32,
    y: i32,
    glyph: &[u8; CHAR_HEIGHT],
    color: Rgba<u8>,
    scale: u32,
) {
    let s = scale as i32;
    for (row, &bits) in glyph.iter().enumerate() {
        for col in 0..CHAR_WIDTH {
            if bits & (1 << (CHAR_WIDTH - 1 - col)) == 0 {
                continue;
            }
            for sy in 0..s {
                for sx in 0..s {
                    put_pixel_checked(image, x + col as i32 * s + sx, y + row as i32 * s + sy, color);
                }
            }
        }
    }
}

/// Setzt ein Pixel, wenn es innerhalb des Bildes liegt.
pub(crate) fn put_pixel_checked(image: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < image.width() && (y as u32) < image.height() {
        image.put_pixel(x as u32, y as u32, color);
    }
}

/// Blendet ein Pixel mit `alpha` über den Bestand.
pub(crate) fn blend_pixel(image: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, alpha: f32) {
    if x < 0 || y < 0 || (x as u32) >= image.width() || (y as u32) >= image.height() {
        return;
    }
    let alpha = alpha.clamp(0.0, 1.0);
    let bg = image.get_pixel(x as u32, y as u32);
    let blended = Rgba([
        blend_channel(bg[0], color[0], alpha),
        blend_channel(bg[1], color[1], alpha),
        blend_channel(bg[2], color[2], alpha),
        255,
    ]);
    image.put_pixel(x as u32, y as u32, blended);
}

/// Zeichnet ein gefülltes Rechteck mit Alpha-Blending.
pub fn draw_rect_blended(
    image: &mut RgbaImage,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    color: Rgba<u8>,
    alpha: f32,
) {
    for dy in 0..h as i32 {
        for dx in 0..w as i32 {
            blend_pixel(image, x + dx, y + dy, color, alpha);
        }
    }
}

fn blend_channel(base: u8, overlay: u8, alpha: f32) -> u8 {
    let result = base as f32 * (1.0 - alpha) + overlay as f32 * alpha;
    result.round().clamp(0.0, 255.0) as u8
}

/// Glyph eines Zeichens; Bits 4–0 einer Zeile sind die Spalten von links.
fn glyph_for(ch: char) -> Option<[u8; CHAR_HEIGHT]> {
    #[rustfmt::skip]
    let glyph = match ch.to_ascii_uppercase() {
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        '/' => [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        _ => return None,
    };
    Some(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("AB", 1), 11);
        assert_eq!(text_width("A", 1), 5);
        assert_eq!(text_width("", 1), 0);
        assert_eq!(text_width("AB", 2), 22);
    }

    #[test]
    fn test_lowercase_uses_uppercase_glyph() {
        assert_eq!(glyph_for('r'), glyph_for('R'));
        assert!(glyph_for('#').is_none());
    }

    #[test]
    fn test_draw_text_sets_pixels() {
        let mut img = RgbaImage::from_pixel(20, 10, Rgba([0, 0, 0, 255]));
        draw_text(&mut img, 0, 0, "L", Rgba([255, 255, 255, 255]), 1);
        // Linke Spalte des "L" komplett gesetzt
        for y in 0..7 {
            assert_eq!(img.get_pixel(0, y)[0], 255);
        }
        assert_eq!(img.get_pixel(4, 0)[0], 0);
    }

    #[test]
    fn test_draw_out_of_bounds() {
        let mut img = RgbaImage::new(10, 10);
        draw_text(&mut img, -5, -5, "X", Rgba([255, 0, 0, 255]), 1);
        draw_rect_blended(&mut img, 8, 8, 10, 10, Rgba([255, 0, 0, 255]), 0.5);
    }
}
