//! Packed 24-bit RGB pixels.
//!
//! A pixel is a single `u32` laid out as `0xRRGGBB`. The top byte is always
//! zero for values stored in a [`PixelGrid`](crate::grid::PixelGrid).

/// Pure white, used as the background fill for rotation and edge detection.
pub const WHITE: u32 = 0xFFFFFF;

/// Pure black, marks edge pixels.
pub const BLACK: u32 = 0x000000;

/// Pure green, the chroma key reference color.
pub const GREEN: u32 = 0x00FF00;

/// Mask selecting the three color bytes of a packed pixel.
pub const RGB_MASK: u32 = 0xFFFFFF;

/// Pack three 8-bit channels into `0xRRGGBB`.
#[inline]
pub fn pack(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Split a packed pixel into its `(r, g, b)` channels.
#[inline]
pub fn unpack(pixel: u32) -> (u8, u8, u8) {
    (
        ((pixel >> 16) & 0xFF) as u8,
        ((pixel >> 8) & 0xFF) as u8,
        (pixel & 0xFF) as u8,
    )
}

/// Convert an accumulated channel value back to a byte.
///
/// Rounds to nearest and saturates at the 0-255 range.
#[inline]
pub fn channel_from_f64(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_layout() {
        assert_eq!(pack(0xFF, 0x00, 0x00), 0xFF0000);
        assert_eq!(pack(0x00, 0xFF, 0x00), GREEN);
        assert_eq!(pack(0x12, 0x34, 0x56), 0x123456);
        assert_eq!(pack(255, 255, 255), WHITE);
        assert_eq!(pack(0, 0, 0), BLACK);
    }

    #[test]
    fn test_unpack_ignores_high_byte() {
        assert_eq!(unpack(0x00ABCDEF), (0xAB, 0xCD, 0xEF));
        assert_eq!(unpack(0xFFABCDEF), (0xAB, 0xCD, 0xEF));
    }

    #[test]
    fn test_channel_from_f64_rounds_and_clamps() {
        assert_eq!(channel_from_f64(127.5), 128);
        assert_eq!(channel_from_f64(127.49), 127);
        assert_eq!(channel_from_f64(-3.0), 0);
        assert_eq!(channel_from_f64(300.0), 255);
    }
}
