//! PNG export for simulation snapshots

use std::path::Path;

use glam::Vec2;
use image::{ImageBuffer, Rgba, RgbaImage};

use crate::automata::LifeBoard;
use crate::io::error::{Result, SketchError, invalid_parameter};
use crate::wfc::{Cell, Direction, Tile, WaveGrid};

/// Dot colors for scatter exports, indexed modulo its length
pub const PALETTE: [[u8; 4]; 8] = [
    [239, 71, 111, 255],
    [255, 209, 102, 255],
    [6, 214, 160, 255],
    [17, 138, 178, 255],
    [155, 93, 229, 255],
    [241, 91, 181, 255],
    [254, 228, 64, 255],
    [0, 187, 249, 255],
];

const TRACK_BACKGROUND: Rgba<u8> = Rgba([245, 242, 235, 255]);
const TRACK_ARM: Rgba<u8> = Rgba([35, 31, 32, 255]);
const BOARD_ALIVE: Rgba<u8> = Rgba([35, 31, 32, 255]);
const BOARD_DEAD: Rgba<u8> = Rgba([245, 242, 235, 255]);
const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);
const PATH_INK: Rgba<u8> = Rgba([25, 25, 30, 255]);
const SCATTER_BACKGROUND: Rgba<u8> = Rgba([12, 12, 16, 255]);

/// Render a wave grid as a PNG of procedurally drawn tiles
///
/// Collapsed cells draw their tile: a bar runs from the cell center to each
/// edge whose signature carries a feature. Open cells render as a gray
/// square, darker the more options remain.
///
/// # Errors
///
/// Returns an error if `tile_pixels` is zero, the parent directory cannot be
/// created, or the image cannot be saved.
pub fn export_wave_png(grid: &WaveGrid, tile_pixels: u32, path: &Path) -> Result<()> {
    if tile_pixels == 0 {
        return Err(invalid_parameter(
            "tile_pixels",
            &tile_pixels,
            &"must be positive",
        ));
    }

    let width = grid.cols() as u32 * tile_pixels;
    let height = grid.rows() as u32 * tile_pixels;
    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let Some(cell) = grid.cell_at(row, col) else {
                continue;
            };
            let origin_x = col as u32 * tile_pixels;
            let origin_y = row as u32 * tile_pixels;
            if cell.is_collapsed() {
                let arms = tile_arms(grid, row, col);
                paint_tile(&mut img, origin_x, origin_y, tile_pixels, arms);
            } else {
                let fraction = cell.entropy() as f32 / grid.catalog().len() as f32;
                let level = fraction.mul_add(-96.0, 255.0) as u8;
                let shade = Rgba([level, level, level, 255]);
                paint_square(&mut img, origin_x, origin_y, tile_pixels, shade);
            }
        }
    }

    write_png(&img, path)
}

/// Render a life board as a PNG of filled squares
///
/// # Errors
///
/// Returns an error if `cell_pixels` is zero, the parent directory cannot be
/// created, or the image cannot be saved.
pub fn export_board_png(board: &LifeBoard, cell_pixels: u32, path: &Path) -> Result<()> {
    if cell_pixels == 0 {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &"must be positive",
        ));
    }

    let width = board.cols() as u32 * cell_pixels;
    let height = board.rows() as u32 * cell_pixels;
    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let shade = if board.is_alive(row, col) {
                BOARD_ALIVE
            } else {
                BOARD_DEAD
            };
            paint_square(
                &mut img,
                col as u32 * cell_pixels,
                row as u32 * cell_pixels,
                cell_pixels,
                shade,
            );
        }
    }

    write_png(&img, path)
}

/// Plot a point trail onto a white canvas
///
/// Points falling outside the canvas are skipped rather than clamped, so a
/// walker that wanders off the edge leaves no false marks on the border.
///
/// # Errors
///
/// Returns an error if either canvas dimension is zero, the parent directory
/// cannot be created, or the image cannot be saved.
pub fn export_path_png(points: &[Vec2], width: u32, height: u32, path: &Path) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(invalid_parameter(
            "canvas",
            &format!("{width}x{height}"),
            &"both dimensions must be positive",
        ));
    }

    let mut img: RgbaImage = ImageBuffer::from_pixel(width, height, PAPER);
    for point in points {
        if !(point.x.is_finite() && point.y.is_finite()) {
            continue;
        }
        let px = point.x.round();
        let py = point.y.round();
        if px < 0.0 || py < 0.0 {
            continue;
        }
        let (px, py) = (px as u32, py as u32);
        if px < width && py < height {
            img.put_pixel(px, py, PATH_INK);
        }
    }

    write_png(&img, path)
}

/// Plot colored particles from the unit square onto a dark canvas
///
/// Each position is scaled by `size` and drawn as a two-pixel dot in its
/// palette color.
///
/// # Errors
///
/// Returns an error if `size` is zero, the parent directory cannot be
/// created, or the image cannot be saved.
pub fn export_scatter_png(
    positions: &[Vec2],
    colors: &[usize],
    size: u32,
    path: &Path,
) -> Result<()> {
    if size == 0 {
        return Err(invalid_parameter("size", &size, &"must be positive"));
    }

    let mut img: RgbaImage = ImageBuffer::from_pixel(size, size, SCATTER_BACKGROUND);
    for (index, position) in positions.iter().enumerate() {
        let color_index = colors.get(index).copied().unwrap_or(0) % PALETTE.len();
        let rgba = PALETTE.get(color_index).copied().unwrap_or([255; 4]);
        let px = (position.x * size as f32) as u32;
        let py = (position.y * size as f32) as u32;
        for dy in 0..2u32 {
            for dx in 0..2u32 {
                let x = px.saturating_add(dx);
                let y = py.saturating_add(dy);
                if x < size && y < size {
                    img.put_pixel(x, y, Rgba(rgba));
                }
            }
        }
    }

    write_png(&img, path)
}

fn tile_arms(grid: &WaveGrid, row: usize, col: usize) -> [bool; 4] {
    grid.cell_at(row, col)
        .and_then(Cell::sole_option)
        .and_then(|index| grid.catalog().tile(index))
        .map_or([false; 4], arms_for)
}

// Which of the four arms a tile draws: one per featured edge
pub(crate) fn arms_for(tile: &Tile) -> [bool; 4] {
    let mut arms = [false; 4];
    for direction in Direction::ALL {
        if let Some(arm) = arms.get_mut(direction.index()) {
            *arm = edge_has_feature(tile.edge(direction));
        }
    }
    arms
}

// An edge signature carries a feature when its characters are not all equal
fn edge_has_feature(edge: &str) -> bool {
    let mut chars = edge.chars();
    chars.next().is_some_and(|first| chars.any(|c| c != first))
}

pub(crate) fn paint_tile(
    img: &mut RgbaImage,
    origin_x: u32,
    origin_y: u32,
    tile_pixels: u32,
    arms: [bool; 4],
) {
    let band_start = tile_pixels / 3;
    let band_end = tile_pixels - band_start;
    let half = tile_pixels / 2;
    let [up, right, down, left] = arms;
    for y in 0..tile_pixels {
        for x in 0..tile_pixels {
            let vertical_band = x >= band_start && x < band_end;
            let horizontal_band = y >= band_start && y < band_end;
            let on_arm = (up && vertical_band && y <= half)
                || (down && vertical_band && y >= half)
                || (left && horizontal_band && x <= half)
                || (right && horizontal_band && x >= half);
            let color = if on_arm { TRACK_ARM } else { TRACK_BACKGROUND };
            img.put_pixel(origin_x + x, origin_y + y, color);
        }
    }
}

pub(crate) fn paint_square(
    img: &mut RgbaImage,
    origin_x: u32,
    origin_y: u32,
    side: u32,
    color: Rgba<u8>,
) {
    for y in 0..side {
        for x in 0..side {
            img.put_pixel(origin_x + x, origin_y + y, color);
        }
    }
}

fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SketchError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| SketchError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
