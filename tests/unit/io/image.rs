//! Tests for PNG export of grids, boards, paths, and scatters

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use sketchkit::automata::LifeBoard;
    use sketchkit::io::image::{
        PALETTE, export_board_png, export_path_png, export_scatter_png, export_wave_png,
    };
    use sketchkit::wfc::{StepOutcome, TileCatalog, TileDef, WaveGrid, train_track};
    use tempfile::TempDir;

    fn load_rgba(path: &std::path::Path) -> image::RgbaImage {
        image::open(path).expect("artifact opens").to_rgba8()
    }

    // Tests path points land as ink pixels on a white canvas
    // Verified by plotting onto the wrong axis order
    #[test]
    fn test_export_path_plots_points() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("walk.png");
        let points = [Vec2::new(2.0, 3.0), Vec2::new(7.0, 0.0)];

        export_path_png(&points, 10, 10, &path).expect("export succeeds");

        let img = load_rgba(&path);
        assert_eq!(img.dimensions(), (10, 10));
        assert_eq!(img.get_pixel(2, 3).0, [25, 25, 30, 255]);
        assert_eq!(img.get_pixel(7, 0).0, [25, 25, 30, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    // Tests off-canvas and non-finite points are skipped, not clamped
    // Verified by clamping strays onto the border
    #[test]
    fn test_export_path_skips_out_of_range() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strays.png");
        let points = [
            Vec2::new(100.0, 3.0),
            Vec2::new(-5.0, 2.0),
            Vec2::new(f32::NAN, 1.0),
            Vec2::new(4.0, f32::INFINITY),
        ];

        export_path_png(&points, 8, 8, &path).expect("export succeeds");

        let img = load_rgba(&path);
        for pixel in img.pixels() {
            assert_eq!(pixel.0, [255, 255, 255, 255]);
        }
    }

    // Tests canvas dimension validation
    // Verified by allowing a zero-width canvas
    #[test]
    fn test_export_path_rejects_zero_canvas() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.png");
        assert!(export_path_png(&[], 0, 10, &path).is_err());
        assert!(export_path_png(&[], 10, 0, &path).is_err());
    }

    // Tests scatter dots scale from the unit square into palette pixels
    // Verified by scaling positions by the wrong image dimension
    #[test]
    fn test_export_scatter_plots_dots() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scatter.png");
        let positions = [Vec2::new(0.0625, 0.0625)];
        let colors = [2usize];

        export_scatter_png(&positions, &colors, 800, &path).expect("export succeeds");

        let img = load_rgba(&path);
        assert_eq!(img.dimensions(), (800, 800));
        // A two-pixel dot in the third palette color at 0.0625 * 800
        assert_eq!(img.get_pixel(50, 50).0, PALETTE[2]);
        assert_eq!(img.get_pixel(51, 51).0, PALETTE[2]);
        assert_eq!(img.get_pixel(0, 0).0, [12, 12, 16, 255]);
    }

    // Tests color indices wrap around the palette and default to its head
    // Verified by dropping the modulo on the color index
    #[test]
    fn test_export_scatter_color_wrapping() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wrapped.png");
        // Second position has no color entry and falls back to index zero
        let positions = [Vec2::new(0.1, 0.1), Vec2::new(0.5, 0.5)];
        let colors = [PALETTE.len() + 2];

        export_scatter_png(&positions, &colors, 100, &path).expect("export succeeds");

        let img = load_rgba(&path);
        assert_eq!(img.get_pixel(10, 10).0, PALETTE[2]);
        assert_eq!(img.get_pixel(50, 50).0, PALETTE[0]);
    }

    // Tests scatter size validation
    // Verified by allowing a zero-sized image
    #[test]
    fn test_export_scatter_rejects_zero_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("zero.png");
        assert!(export_scatter_png(&[], &[], 0, &path).is_err());
    }

    // Tests live and dead board cells render in their fill colors
    // Verified by swapping the alive and dead shades
    #[test]
    fn test_export_board_colors_cells() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.png");
        let mut board = LifeBoard::new(3, 3).expect("board builds");
        board.set(1, 1, true);

        export_board_png(&board, 2, &path).expect("export succeeds");

        let img = load_rgba(&path);
        assert_eq!(img.dimensions(), (6, 6));
        assert_eq!(img.get_pixel(2, 2).0, [35, 31, 32, 255]);
        assert_eq!(img.get_pixel(3, 3).0, [35, 31, 32, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [245, 242, 235, 255]);
        assert_eq!(img.get_pixel(5, 5).0, [245, 242, 235, 255]);
    }

    // Tests cell pixel validation
    // Verified by allowing zero-pixel cells
    #[test]
    fn test_export_board_rejects_zero_pixels() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.png");
        let board = LifeBoard::new(3, 3).expect("board builds");
        assert!(export_board_png(&board, 0, &path).is_err());
    }

    // Tests open cells render as entropy-shaded gray squares
    // Verified by shading with the collapsed tile colors
    #[test]
    fn test_export_wave_open_cells_shaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("open.png");
        let grid = WaveGrid::new(train_track(), 2, 2, 1).expect("grid builds");

        export_wave_png(&grid, 4, &path).expect("export succeeds");

        let img = load_rgba(&path);
        assert_eq!(img.dimensions(), (8, 8));
        // Full entropy shades at 255 - 96
        assert_eq!(img.get_pixel(0, 0).0, [159, 159, 159, 255]);
        assert_eq!(img.get_pixel(7, 7).0, [159, 159, 159, 255]);
    }

    // Tests collapsed tiles draw arms for featured edges only
    // Verified by drawing arms for every edge
    #[test]
    fn test_export_wave_draws_tile_arms() {
        let dir = TempDir::new().unwrap();
        let armed = dir.path().join("armed.png");
        let plain = dir.path().join("plain.png");

        // Every edge featured: center pixels are arm ink
        let catalog = TileCatalog::build(vec![TileDef::new("cross", ["AB", "AB", "AB", "AB"])]);
        let mut grid = WaveGrid::new(catalog, 1, 1, 1).expect("grid builds");
        assert!(matches!(grid.step(), StepOutcome::Collapsed { .. }));
        export_wave_png(&grid, 6, &armed).expect("export succeeds");

        let img = load_rgba(&armed);
        assert_eq!(img.dimensions(), (6, 6));
        assert_eq!(img.get_pixel(3, 3).0, [35, 31, 32, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [245, 242, 235, 255]);

        // No edge featured: the whole tile is background
        let catalog = TileCatalog::build(vec![TileDef::new("blank", ["AA", "AA", "AA", "AA"])]);
        let mut grid = WaveGrid::new(catalog, 1, 1, 1).expect("grid builds");
        assert!(matches!(grid.step(), StepOutcome::Collapsed { .. }));
        export_wave_png(&grid, 6, &plain).expect("export succeeds");

        let img = load_rgba(&plain);
        for pixel in img.pixels() {
            assert_eq!(pixel.0, [245, 242, 235, 255]);
        }
    }

    // Tests tile pixel validation
    // Verified by allowing zero-pixel tiles
    #[test]
    fn test_export_wave_rejects_zero_pixels() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wave.png");
        let grid = WaveGrid::new(train_track(), 2, 2, 1).expect("grid builds");
        assert!(export_wave_png(&grid, 0, &path).is_err());
    }

    // Tests export surfaces file system failures
    // Verified by swallowing directory creation errors
    #[test]
    fn test_export_fails_under_unwritable_path() {
        let points = [Vec2::new(1.0, 1.0)];
        let result = export_path_png(&points, 4, 4, std::path::Path::new("/dev/null/walk.png"));
        assert!(result.is_err());
    }

    // Tests export surfaces unknown-format save failures
    // Verified by defaulting to PNG when the extension is missing
    #[test]
    fn test_export_fails_without_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_extension");
        let points = [Vec2::new(1.0, 1.0)];
        assert!(export_path_png(&points, 4, 4, &path).is_err());
    }
}
