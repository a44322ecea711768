use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::Write;
use std::path::Path;

/// Writes a binary PPM (P6).
///
/// The buffer stores row 0 at the bottom of the sample window, while PPM
/// expects the top row first, so rows are written in reverse.
pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    let width = buffer.grid().width();
    let height = buffer.grid().height();

    writeln!(file, "P6")?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;

    for row in (0..height).rev() {
        file.write_all(buffer.row(row))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::grid::GridSpec;

    #[test]
    fn test_write_ppm_header_and_row_order() {
        let grid = GridSpec::new(2, 2).unwrap();
        let buffer = PixelBuffer::from_data(
            grid,
            vec![
                1, 1, 1, 2, 2, 2, // bottom row
                3, 3, 3, 4, 4, 4, // top row
            ],
        )
        .unwrap();

        let path = std::env::temp_dir().join("multibrot_write_ppm_test.ppm");
        write_ppm(&buffer, &path).unwrap();

        let contents = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&contents[..header.len()], header);
        // Top field row written first.
        assert_eq!(
            &contents[header.len()..],
            &[3, 3, 3, 4, 4, 4, 1, 1, 1, 2, 2, 2]
        );
    }
}
