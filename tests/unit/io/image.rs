//! Tests for grayscale PNG export including file creation and error handling

#[cfg(test)]
mod tests {
    use noisestack::grid::NoiseGrid;
    use noisestack::io::image::export_grid_as_png;
    use tempfile::TempDir;

    // Tests PNG file creation with a gradient pattern
    // Verified by disabling file save operation
    #[test]
    fn test_export_grid_as_png_creates_file() {
        let grid =
            NoiseGrid::from_samples(2, 2, vec![0, 85, 170, 255]).expect("Failed to build grid");

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_path = temp_dir.path().join("noise.png");

        let result = export_grid_as_png(&grid, output_path.to_str().expect("Invalid path"));
        assert!(result.is_ok(), "PNG export should succeed");
        assert!(output_path.exists(), "PNG file should be created");
    }

    // Tests exported pixels round-trip the grid samples exactly
    // Verified by exporting with a lossy bit depth
    #[test]
    fn test_export_preserves_samples() {
        let samples = vec![0, 17, 34, 51, 68, 85, 102, 119, 136];
        let grid = NoiseGrid::from_samples(3, 3, samples.clone()).expect("Failed to build grid");

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_path = temp_dir.path().join("gradient.png");

        export_grid_as_png(&grid, output_path.to_str().expect("Invalid path"))
            .expect("Failed to export PNG");

        let reloaded = image::open(&output_path)
            .expect("Failed to reload PNG")
            .into_luma8();
        assert_eq!(reloaded.width(), 3);
        assert_eq!(reloaded.height(), 3);
        assert_eq!(reloaded.into_raw(), samples);
    }

    // Tests missing parent directories are created on demand
    // Verified by removing the create_dir_all call
    #[test]
    fn test_export_creates_parent_directories() {
        let grid = NoiseGrid::constant(2, 2, 64).expect("Failed to build grid");

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_path = temp_dir.path().join("nested/deep/noise.png");

        let result = export_grid_as_png(&grid, output_path.to_str().expect("Invalid path"));
        assert!(result.is_ok(), "Export should create missing directories");
        assert!(output_path.exists());
    }

    // Tests unwritable destinations surface an error
    // Verified by swallowing the save failure
    #[test]
    fn test_export_to_unwritable_path() {
        let grid = NoiseGrid::constant(2, 2, 64).expect("Failed to build grid");

        let result = export_grid_as_png(&grid, "/dev/null/nested/noise.png");
        assert!(result.is_err(), "Export below /dev/null should fail");
    }
}
