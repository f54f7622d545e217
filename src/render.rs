use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        iso_8859_1::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb888,
    prelude::*,
    text::{Alignment, Text},
};

use crate::assets::Sprite;
use crate::game::Game;
use crate::player::Facing;

/// Caption shown above the sprite while the jump feedback is active.
const CAPTION: &str = "Pay attention in class!";

pub struct Renderer {
    pub width: u32,
    pub height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn draw(&self, frame: &mut [u8], game: &Game) {
        // Background, same light grey as the original canvas.
        self.clear(frame, 0xd0, 0xd0, 0xd0);

        let p = &game.player;
        if let Some(sprite) = game.current_sprite() {
            self.blit_scaled(
                frame,
                sprite,
                p.pos.x as i32,
                p.pos.y as i32,
                p.width as i32,
                p.height as i32,
                p.facing == Facing::Left,
            );
        }

        if p.show_text {
            let style = MonoTextStyle::new(&FONT_10X20, Rgb888::CSS_PURPLE);
            let anchor = Point::new(
                (p.pos.x + p.width / 2.0) as i32,
                (p.pos.y - 20.0) as i32,
            );
            let mut fb = FrameBuf {
                frame,
                width: self.width,
                height: self.height,
            };
            let _ = Text::with_alignment(CAPTION, anchor, style, Alignment::Center).draw(&mut fb);
        }
    }

    /// Shown instead of the game when the animation frames failed to decode.
    pub fn draw_load_error(&self, frame: &mut [u8], detail: &str) {
        self.clear(frame, 18, 18, 20);

        let center_x = self.width as i32 / 2;
        let center_y = self.height as i32 / 2;
        let mut fb = FrameBuf {
            frame,
            width: self.width,
            height: self.height,
        };

        let banner = MonoTextStyle::new(&FONT_10X20, Rgb888::RED);
        let _ = Text::with_alignment(
            "ASSET LOAD FAILED",
            Point::new(center_x, center_y - 10),
            banner,
            Alignment::Center,
        )
        .draw(&mut fb);

        let small = MonoTextStyle::new(&FONT_6X10, Rgb888::WHITE);
        let _ = Text::with_alignment(
            detail,
            Point::new(center_x, center_y + 15),
            small,
            Alignment::Center,
        )
        .draw(&mut fb);
    }

    fn clear(&self, frame: &mut [u8], r: u8, g: u8, b: u8) {
        for px in frame.chunks_exact_mut(4) {
            px[0] = r;
            px[1] = g;
            px[2] = b;
            px[3] = 255;
        }
    }

    fn put_px(&self, frame: &mut [u8], x: i32, y: i32, r: u8, g: u8, b: u8) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        frame[idx] = r;
        frame[idx + 1] = g;
        frame[idx + 2] = b;
        frame[idx + 3] = 255;
    }

    /// Nearest-neighbor blit of `sprite` into the `w`×`h` box at `(x, y)`.
    /// `mirror` flips horizontally within the same box, so a mirrored sprite
    /// occupies exactly the pixels an unmirrored one would.
    fn blit_scaled(
        &self,
        frame: &mut [u8],
        sprite: &Sprite,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        mirror: bool,
    ) {
        if w <= 0 || h <= 0 || sprite.width == 0 || sprite.height == 0 {
            return;
        }
        for yy in 0..h {
            let sy = (yy as u32 * sprite.height) / h as u32;
            for xx in 0..w {
                let u = if mirror { w - 1 - xx } else { xx };
                let sx = (u as u32 * sprite.width) / w as u32;
                let idx = ((sy * sprite.width + sx) * 4) as usize;
                // Hard alpha cutoff; the demo art has no soft edges.
                if sprite.rgba[idx + 3] < 128 {
                    continue;
                }
                self.put_px(
                    frame,
                    x + xx,
                    y + yy,
                    sprite.rgba[idx],
                    sprite.rgba[idx + 1],
                    sprite.rgba[idx + 2],
                );
            }
        }
    }
}

/// embedded-graphics target backed by the RGBA backbuffer, used for the
/// caption and error text.
struct FrameBuf<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl DrawTarget for FrameBuf<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
                let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
                self.frame[idx] = color.r();
                self.frame[idx + 1] = color.g();
                self.frame[idx + 2] = color.b();
                self.frame[idx + 3] = 255;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuf<'_> {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
