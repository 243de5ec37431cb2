//! Pixel-by-pixel image comparison.

use crate::grid::PixelGrid;

/// Count the pixels that differ between two grids.
///
/// Cells where both grids overlap are compared by packed value. When the
/// sizes differ, every cell of the combined bounding box outside the overlap
/// also counts as differing, since it has no partner to match.
pub fn count_differing_pixels(a: &PixelGrid, b: &PixelGrid) -> usize {
    let rows = a.rows().min(b.rows());
    let cols = a.cols().min(b.cols());

    let mut count = 0;
    for r in 0..rows {
        for c in 0..cols {
            if a[(r, c)] != b[(r, c)] {
                count += 1;
            }
        }
    }

    let union = a.rows().max(b.rows()) * a.cols().max(b.cols());
    count + (union - rows * cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{BLACK, WHITE};

    #[test]
    fn test_identical_images() {
        let a = PixelGrid::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(count_differing_pixels(&a, &a), 0);
    }

    #[test]
    fn test_counts_changed_cells() {
        let a = PixelGrid::filled(3, 3, WHITE);
        let mut b = a.clone();
        b.set(0, 0, BLACK);
        b.set(2, 1, BLACK);
        assert_eq!(count_differing_pixels(&a, &b), 2);
        assert_eq!(count_differing_pixels(&b, &a), 2);
    }

    #[test]
    fn test_size_mismatch_counts_missing_cells() {
        let a = PixelGrid::filled(2, 2, WHITE);
        let b = PixelGrid::filled(3, 4, WHITE);
        // 3x4 box, 2x2 overlap identical
        assert_eq!(count_differing_pixels(&a, &b), 8);
        assert_eq!(count_differing_pixels(&b, &a), 8);
    }

    #[test]
    fn test_size_mismatch_disjoint_shapes() {
        // 1x3 and 3x1 span a 3x3 box with a single shared cell
        let a = PixelGrid::filled(1, 3, WHITE);
        let b = PixelGrid::filled(3, 1, BLACK);
        assert_eq!(count_differing_pixels(&a, &b), 9);
    }
}
