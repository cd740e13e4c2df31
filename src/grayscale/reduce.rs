use image::DynamicImage;

use crate::grayscale::luma::{reduce_samples, ChannelLayout};
use crate::grid::IntensityGrid;

/// Converts a decoded image of any pixel encoding into a grayscale grid.
///
/// 8-bit layouts are reduced in place. Every 16-bit sample is narrowed by
/// rounding `v / 257`, the same rule `image` applies when it converts to
/// 8 bits, so 16-bit gray agrees with 16-bit RGB of equal channels and the
/// alpha channel never changes the result. Any remaining encoding goes
/// through an 8-bit RGB conversion first.
pub fn reduce(image: &DynamicImage) -> IntensityGrid {
    let (w, h) = (image.width() as usize, image.height() as usize);
    match image {
        DynamicImage::ImageLuma8(buf)  => reduce_samples(w, h, ChannelLayout::Gray, buf.as_raw()),
        DynamicImage::ImageLumaA8(buf) => reduce_samples(w, h, ChannelLayout::GrayAlpha, buf.as_raw()),
        DynamicImage::ImageRgb8(buf)   => reduce_samples(w, h, ChannelLayout::Rgb, buf.as_raw()),
        DynamicImage::ImageRgba8(buf)  => reduce_samples(w, h, ChannelLayout::Rgba, buf.as_raw()),
        DynamicImage::ImageLuma16(buf)  => reduce_gray16(w, h, 1, buf.as_raw()),
        DynamicImage::ImageLumaA16(buf) => reduce_gray16(w, h, 2, buf.as_raw()),
        other => {
            let rgb = other.to_rgb8();
            reduce_samples(w, h, ChannelLayout::Rgb, rgb.as_raw())
        }
    }
}

#[inline]
fn narrow16(v: u16) -> u8 {
    ((u32::from(v) + 128) / 257) as u8
}

/// Keeps the first of every `channels` samples.
fn reduce_gray16(width: usize, height: usize, channels: usize, samples: &[u16]) -> IntensityGrid {
    let data = samples.chunks_exact(channels).map(|px| narrow16(px[0])).collect();
    IntensityGrid::from_raw(width, height, data)
        .unwrap_or_else(|_| IntensityGrid::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grayscale::luma::luma;
    use image::{GrayImage, ImageBuffer, Luma, LumaA, Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn rgb_image_is_weighted() {
        let img = RgbImage::from_fn(2, 1, |x, _| if x == 0 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) });
        let g = reduce(&DynamicImage::ImageRgb8(img));
        assert_eq!(g.as_raw(), &[76, 29]);
    }

    #[test]
    fn rgba_image_ignores_alpha() {
        let img = RgbaImage::from_pixel(3, 2, Rgba([12, 200, 90, 17]));
        let g = reduce(&DynamicImage::ImageRgba8(img));
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert!(g.as_raw().iter().all(|&v| v == luma(12, 200, 90)));
    }

    #[test]
    fn gray_image_is_unchanged() {
        let img = GrayImage::from_fn(4, 4, |x, y| Luma([(x * 16 + y) as u8]));
        let g = reduce(&DynamicImage::ImageLuma8(img.clone()));
        assert_eq!(g.as_raw(), img.as_raw().as_slice());
    }

    #[test]
    fn sixteen_bit_gray_rounds() {
        let img: ImageBuffer<Luma<u16>, Vec<u16>> =
            ImageBuffer::from_fn(4, 1, |x, _| Luma([[0x0000, 0x00FF, 0xAB12, 0xFFFF][x as usize]]));
        let g = reduce(&DynamicImage::ImageLuma16(img));
        assert_eq!(g.as_raw(), &[0, 1, 170, 255]);
    }

    #[test]
    fn sixteen_bit_alpha_does_not_change_gray() {
        let values = [0x0000, 0x007F, 0x0080, 0x00FF, 0x1234, 0xAB12, 0xFFFE, 0xFFFF];
        let gray: ImageBuffer<Luma<u16>, Vec<u16>> =
            ImageBuffer::from_fn(8, 2, |x, _| Luma([values[x as usize]]));
        let gray_alpha: ImageBuffer<LumaA<u16>, Vec<u16>> =
            ImageBuffer::from_fn(8, 2, |x, y| LumaA([values[x as usize], (x * 9000 + y) as u16]));
        let rgb: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_fn(8, 2, |x, _| Rgb([values[x as usize]; 3]));

        let from_gray = reduce(&DynamicImage::ImageLuma16(gray));
        assert_eq!(from_gray, reduce(&DynamicImage::ImageLumaA16(gray_alpha)));
        assert_eq!(from_gray, reduce(&DynamicImage::ImageRgb16(rgb)));
    }

    #[test]
    fn sixteen_bit_rgb_matches_eight_bit() {
        let img: ImageBuffer<Rgb<u16>, Vec<u16>> = ImageBuffer::from_pixel(1, 1, Rgb([u16::MAX, 0, 0]));
        let g = reduce(&DynamicImage::ImageRgb16(img));
        assert_eq!(g.get(0, 0), 76);
    }
}
