//! Pixel buffer in front of the hardware driver
//!
//! Actors read and write logical colors. Global brightness is only
//! applied when the frame is presented, so reading a pixel back always
//! returns the color an actor wrote.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    OutputDriver,
    color::{BLACK, Rgb},
    math8::scale8,
};

/// Fixed-length pixel buffer that can be flushed to hardware
pub trait PixelSink<const N: usize> {
    fn pixels(&self) -> &[Rgb; N];

    fn pixels_mut(&mut self) -> &mut [Rgb; N];

    /// Read a pixel; the index wraps around the strip
    fn get_pixel(&self, index: usize) -> Rgb {
        if N == 0 {
            return BLACK;
        }
        self.pixels()[index % N]
    }

    /// Write a pixel; the index wraps around the strip
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if N == 0 {
            return;
        }
        self.pixels_mut()[index % N] = color;
    }

    fn len(&self) -> usize {
        N
    }

    fn is_empty(&self) -> bool {
        N == 0
    }

    /// Set global brightness (0-255) for subsequent presents
    fn set_brightness(&mut self, brightness: u8);

    /// Push the current buffer to the hardware
    fn present(&mut self);
}

/// LED strip frame buffer with global brightness
pub struct Strip<D: OutputDriver, const N: usize> {
    driver: D,
    pixels: [Rgb; N],
    output: [Rgb; N],
    brightness: u8,
}

impl<D: OutputDriver, const N: usize> Strip<D, N> {
    pub const fn new(driver: D, brightness: u8) -> Self {
        Self {
            driver,
            pixels: [BLACK; N],
            output: [BLACK; N],
            brightness,
        }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Colors as last sent to the driver, after brightness scaling
    pub const fn output(&self) -> &[Rgb; N] {
        &self.output
    }
}

impl<D: OutputDriver, const N: usize> PixelSink<N> for Strip<D, N> {
    fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    fn pixels_mut(&mut self) -> &mut [Rgb; N] {
        &mut self.pixels
    }

    fn set_brightness(&mut self, brightness: u8) {
        #[cfg(feature = "esp32-log")]
        println!("[Strip.set_brightness] brightness {}", brightness);
        self.brightness = brightness;
    }

    fn present(&mut self) {
        if self.brightness == 255 {
            self.output = self.pixels;
        } else {
            for (out, pixel) in self.output.iter_mut().zip(&self.pixels) {
                *out = Rgb {
                    r: scale8(pixel.r, self.brightness),
                    g: scale8(pixel.g, self.brightness),
                    b: scale8(pixel.b, self.brightness),
                };
            }
        }
        self.driver.write(&self.output);
    }
}
