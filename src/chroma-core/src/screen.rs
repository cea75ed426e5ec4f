//! Screen pixel sampling through an injected capability.
//!
//! The color math never talks to a display server directly. A platform layer
//! implements [`Screen`], which hands out a [`DeviceContext`] for reading
//! pixels. Contexts are held by a [`DeviceGuard`], so they are released on
//! every exit path, including a failed read.
//!
//! Platforms that expose a single shared device context are not reentrant.
//! Wrap such a screen in a [`ScreenSampler`] to serialize captures.
//!
//! # Examples
//!
//! ```
//! use chroma_core::geometry::Point;
//! use chroma_core::surface::FrameBuffer;
//! use chroma_core::{color_from_position, Color};
//!
//! let mut frame = FrameBuffer::new(4, 4, Color::BLACK);
//! frame.set(Point::new(1, 2), Color::RED);
//!
//! assert_eq!(color_from_position(&frame, Point::new(1, 2)).unwrap(), Color::RED);
//! assert_eq!(frame.releases(), 1);
//! ```

use parking_lot::Mutex;

use crate::color::Color;
use crate::error::{CaptureError, Result};
use crate::geometry::Point;

/// A transient handle for reading pixels from a display surface.
pub trait DeviceContext {
    /// Reads the color of a single pixel.
    fn read_pixel(&mut self, at: Point) -> std::result::Result<Color, CaptureError>;

    /// Returns the handle to the platform.
    ///
    /// Called exactly once by [`DeviceGuard`].
    fn release(&mut self);
}

/// A display that can be sampled and that knows where the pointer is.
pub trait Screen {
    /// Device context type handed out by [`Screen::acquire`].
    type Context<'a>: DeviceContext
    where
        Self: 'a;

    /// Acquires a device context for pixel readback.
    fn acquire(&self) -> std::result::Result<Self::Context<'_>, CaptureError>;

    /// Returns the current pointer position in screen coordinates.
    fn pointer_position(&self) -> std::result::Result<Point, CaptureError>;
}

/// Owns a [`DeviceContext`] and releases it when dropped.
pub struct DeviceGuard<C: DeviceContext> {
    context: C,
    released: bool,
}

impl<C: DeviceContext> DeviceGuard<C> {
    /// Takes ownership of an acquired context.
    pub fn new(context: C) -> Self {
        tracing::trace!("device context acquired");
        Self {
            context,
            released: false,
        }
    }

    /// Reads one pixel through the guarded context.
    pub fn read_pixel(&mut self, at: Point) -> std::result::Result<Color, CaptureError> {
        self.context.read_pixel(at)
    }

    /// Releases the context now instead of at the end of the scope.
    pub fn release(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if !self.released {
            self.released = true;
            self.context.release();
            tracing::trace!("device context released");
        }
    }
}

impl<C: DeviceContext> Drop for DeviceGuard<C> {
    fn drop(&mut self) {
        self.release_once();
    }
}

/// Samples the pixel at `position`.
///
/// Fails with [`crate::Error::CaptureUnavailable`] when no context can be
/// acquired or the read fails.
pub fn color_from_position<S: Screen + ?Sized>(screen: &S, position: Point) -> Result<Color> {
    let context = screen
        .acquire()
        .inspect_err(|e| tracing::debug!(error = %e, "failed to acquire device context"))?;
    let mut device = DeviceGuard::new(context);

    let color = device
        .read_pixel(position)
        .inspect_err(|e| tracing::debug!(%position, error = %e, "pixel readback failed"))?;
    Ok(color)
}

/// Samples the pixel under the pointer.
pub fn cursor_pointer_color<S: Screen + ?Sized>(screen: &S) -> Result<Color> {
    let cursor = screen.pointer_position()?;
    color_from_position(screen, cursor)
}

/// Serializes captures on a screen whose device context is shared.
///
/// Only one sample runs at a time; concurrent callers block on an internal
/// lock for the duration of the acquire, read and release.
pub struct ScreenSampler<S> {
    screen: S,
    lock: Mutex<()>,
}

impl<S: Screen> ScreenSampler<S> {
    /// Wraps a screen.
    pub fn new(screen: S) -> Self {
        Self {
            screen,
            lock: Mutex::new(()),
        }
    }

    /// Returns the wrapped screen.
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Unwraps the sampler.
    pub fn into_inner(self) -> S {
        self.screen
    }

    /// Samples the pixel at `position` while holding the capture lock.
    pub fn sample(&self, position: Point) -> Result<Color> {
        let _serial = self.lock.lock();
        color_from_position(&self.screen, position)
    }

    /// Samples the pixel under the pointer while holding the capture lock.
    pub fn sample_cursor(&self) -> Result<Color> {
        let _serial = self.lock.lock();
        cursor_pointer_color(&self.screen)
    }
}
