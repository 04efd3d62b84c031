//! Collapse replay and GIF generation for wave runs

use std::path::Path;

use image::{Frame, Rgba, RgbaImage};

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{Result, SketchError, invalid_parameter};
use crate::io::image::{arms_for, paint_square, paint_tile};
use crate::wfc::WaveGrid;

// Gray used for cells not yet placed, matching a full-entropy PNG export
const OPEN_SHADE: Rgba<u8> = Rgba([159, 159, 159, 255]);

/// One recorded solver event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveEvent {
    /// A cell was committed to a tile
    Placed {
        /// Row of the placed cell
        row: usize,
        /// Column of the placed cell
        col: usize,
        /// Index of the chosen tile
        tile: usize,
    },
    /// The grid hit a contradiction and was wiped
    Restarted,
}

/// Records collapse events so a finished run can be replayed as animation
///
/// The capture snapshots the grid shape and per-tile arm layout up front,
/// then stores one event per solver step. Export replays the events onto a
/// blank grid, emitting a frame per placement and wiping the grid on each
/// restart so contradictions are visible in the animation.
pub struct CollapseCapture {
    events: Vec<WaveEvent>,
    rows: usize,
    cols: usize,
    arm_table: Vec<[bool; 4]>,
}

impl CollapseCapture {
    /// Create a capture for the given grid
    pub fn new(grid: &WaveGrid) -> Self {
        let arm_table = grid.catalog().tiles().iter().map(arms_for).collect();
        Self {
            events: Vec::with_capacity(grid.rows() * grid.cols()),
            rows: grid.rows(),
            cols: grid.cols(),
            arm_table,
        }
    }

    /// Record a tile placement
    pub fn record_placement(&mut self, row: usize, col: usize, tile: usize) {
        self.events.push(WaveEvent::Placed { row, col, tile });
    }

    /// Record a contradiction restart
    pub fn record_restart(&mut self) {
        self.events.push(WaveEvent::Restarted);
    }

    /// All recorded events in step order
    pub fn events(&self) -> &[WaveEvent] {
        &self.events
    }

    /// Number of recorded events
    pub const fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Replay the capture into an animated GIF
    ///
    /// Skips frames when the requested delay outpaces what GIF viewers
    /// honor: a 10ms request against a 50ms viewer floor keeps every fifth
    /// frame so the apparent speed survives. The final frame holds longer so
    /// the finished grid can be seen.
    ///
    /// # Errors
    ///
    /// Returns an error if no events were captured, `tile_pixels` or
    /// `frame_delay_ms` is zero, file system operations fail, or GIF
    /// encoding fails.
    pub fn export_gif(&self, path: &Path, tile_pixels: u32, frame_delay_ms: u32) -> Result<()> {
        if self.events.is_empty() {
            return Err(invalid_parameter(
                "events",
                &"empty",
                &"no collapse events captured",
            ));
        }
        if tile_pixels == 0 {
            return Err(invalid_parameter(
                "tile_pixels",
                &tile_pixels,
                &"must be positive",
            ));
        }
        if frame_delay_ms == 0 {
            return Err(invalid_parameter(
                "frame_delay_ms",
                &frame_delay_ms,
                &"must be positive",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let frames = self.generate_frames(tile_pixels, effective_delay_ms, skip_factor);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SketchError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(path).map_err(|e| SketchError::FileSystem {
            path: path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| SketchError::ImageExport {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, tile_pixels: u32, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let mut cells: Vec<Option<usize>> = vec![None; self.rows * self.cols];
        let mut frames = Vec::new();

        frames.push(self.render_frame(&cells, tile_pixels, delay_ms));

        let mut event_count = 0;
        for event in &self.events {
            match *event {
                WaveEvent::Placed { row, col, tile } => {
                    if let Some(cell) = cells.get_mut(row * self.cols + col) {
                        *cell = Some(tile);
                    }
                }
                WaveEvent::Restarted => {
                    cells.fill(None);
                }
            }

            event_count += 1;
            if event_count % skip_factor == 0 {
                frames.push(self.render_frame(&cells, tile_pixels, delay_ms));
            }
        }

        if event_count % skip_factor != 0 {
            frames.push(self.render_frame(&cells, tile_pixels, delay_ms));
        }

        // Hold the finished grid on screen
        if let Some(last) = frames.last().map(|frame| frame.buffer().clone()) {
            frames.push(Frame::from_parts(
                last,
                0,
                0,
                image::Delay::from_numer_denom_ms(delay_ms * 25, 1),
            ));
        }

        frames
    }

    fn render_frame(&self, cells: &[Option<usize>], tile_pixels: u32, delay_ms: u32) -> Frame {
        let mut img = RgbaImage::new(
            self.cols as u32 * tile_pixels,
            self.rows as u32 * tile_pixels,
        );

        for (index, cell) in cells.iter().enumerate() {
            let origin_x = (index % self.cols) as u32 * tile_pixels;
            let origin_y = (index / self.cols) as u32 * tile_pixels;
            match cell {
                Some(tile) => {
                    let arms = self.arm_table.get(*tile).copied().unwrap_or([false; 4]);
                    paint_tile(&mut img, origin_x, origin_y, tile_pixels, arms);
                }
                None => paint_square(&mut img, origin_x, origin_y, tile_pixels, OPEN_SHADE),
            }
        }

        Frame::from_parts(img, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
    }
}
