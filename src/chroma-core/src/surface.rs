//! In-memory pixel surface.
//!
//! [`FrameBuffer`] is a [`Screen`] backed by a plain pixel grid. It stands in
//! for a real display in tests and headless tools, and it is the paint target
//! for editor swatches. Acquisitions and releases are counted so callers can
//! check that every device context was handed back.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::color::Color;
use crate::error::CaptureError;
use crate::geometry::{Point, Rect};
use crate::screen::{DeviceContext, Screen};

/// A width × height grid of colors with an optional pointer position.
#[derive(Debug)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    pointer: Option<Point>,
    available: bool,
    acquired: AtomicUsize,
    released: AtomicUsize,
}

impl FrameBuffer {
    /// Creates a surface filled with a single color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![fill; len],
            pointer: None,
            available: true,
            acquired: AtomicUsize::new(0),
            released: AtomicUsize::new(0),
        }
    }

    /// Creates a surface whose pixels are computed from their coordinates.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(Point) -> Color) -> Self {
        let mut frame = Self::new(width, height, Color::EMPTY);
        for y in 0..height {
            for x in 0..width {
                let at = Point::new(x as i32, y as i32);
                frame.pixels[y as usize * width as usize + x as usize] = f(at);
            }
        }
        frame
    }

    /// Returns the surface width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the surface height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the full surface area.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn index(&self, at: Point) -> Option<usize> {
        self.bounds()
            .contains_point(at)
            .then(|| at.y as usize * self.width as usize + at.x as usize)
    }

    /// Returns the pixel at `at`, or `None` outside the surface.
    pub fn get(&self, at: Point) -> Option<Color> {
        self.index(at).map(|i| self.pixels[i])
    }

    /// Writes one pixel. Returns `false` if `at` is outside the surface.
    pub fn set(&mut self, at: Point, color: Color) -> bool {
        match self.index(at) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Fills `area`, clipped to the surface.
    pub fn fill_rect(&mut self, area: Rect, color: Color) {
        let Some(clip) = area.intersection(self.bounds()) else {
            return;
        };

        for y in clip.y..clip.bottom() {
            let row = y as usize * self.width as usize;
            let start = row + clip.x as usize;
            self.pixels[start..start + clip.width as usize].fill(color);
        }
    }

    /// Sets or clears the pointer position.
    pub fn set_pointer(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
    }

    /// Enables or disables pixel readback.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Number of device contexts handed out so far.
    pub fn acquisitions(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    /// Number of device contexts returned so far.
    pub fn releases(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

/// Device context borrowed from a [`FrameBuffer`].
#[derive(Debug)]
pub struct FrameContext<'a> {
    frame: &'a FrameBuffer,
}

impl DeviceContext for FrameContext<'_> {
    fn read_pixel(&mut self, at: Point) -> Result<Color, CaptureError> {
        self.frame
            .get(at)
            .ok_or(CaptureError::OutOfBounds { x: at.x, y: at.y })
    }

    fn release(&mut self) {
        self.frame.released.fetch_add(1, Ordering::SeqCst);
    }
}

impl Screen for FrameBuffer {
    type Context<'a> = FrameContext<'a>;

    fn acquire(&self) -> Result<Self::Context<'_>, CaptureError> {
        if !self.available {
            return Err(CaptureError::Unavailable(
                "pixel readback is disabled on this surface".to_string(),
            ));
        }
        self.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(FrameContext { frame: self })
    }

    fn pointer_position(&self) -> Result<Point, CaptureError> {
        self.pointer.ok_or(CaptureError::NoPointer)
    }
}
