use crate::gray::GrayBuffer;

pub const THRESHOLD: i32 = 127;

/// The two levels every sample ends up at: `low` for samples at or below the
/// threshold, `high` above it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutputLevels {
    pub low: i32,
    pub high: i32,
}

pub const BW_LEVELS: OutputLevels = OutputLevels { low: 0, high: 255 };

impl OutputLevels {
    pub fn inverted(self) -> Self {
        OutputLevels {
            low: self.high,
            high: self.low,
        }
    }

    fn quantize_and_residual(&self, sample: i32) -> (i32, i32) {
        let quantized = if sample > THRESHOLD {
            self.high
        } else {
            self.low
        };
        (quantized, sample - quantized)
    }
}

/// Quantize `img` in place to two levels, diffusing each pixel's quantization
/// error to its not-yet-visited neighbors with the Floyd-Steinberg weights
/// (7/16 right, 3/16 below-left, 5/16 below, 1/16 below-right).
///
/// Rows are traversed top to bottom, columns left to right; error only ever
/// flows to pixels the scan has not reached yet.
pub fn floyd_steinberg(img: &mut GrayBuffer, invert: bool) {
    let levels = if invert {
        BW_LEVELS.inverted()
    } else {
        BW_LEVELS
    };
    let width = img.width();
    let height = img.height();

    for y in 0..height {
        for x in 0..width {
            let (quantized, residual) = levels.quantize_and_residual(img.get(x, y));
            img.set(x, y, quantized);

            // residual * k / 16 truncates toward zero; neighbors carry the
            // unclamped running sum until they are quantized themselves
            if x + 1 < width {
                add_contribution(img, x + 1, y, residual * 7 / 16);
                if y + 1 < height {
                    add_contribution(img, x + 1, y + 1, residual / 16);
                }
            }
            if y + 1 < height {
                add_contribution(img, x, y + 1, residual * 5 / 16);
                if x > 0 {
                    add_contribution(img, x - 1, y + 1, residual * 3 / 16);
                }
            }
        }
    }
}

fn add_contribution(img: &mut GrayBuffer, x: u32, y: u32, contribution: i32) {
    img.set(x, y, img.get(x, y) + contribution);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dithered(width: u32, height: u32, samples: Vec<i32>, invert: bool) -> GrayBuffer {
        let mut img = GrayBuffer::from_raw(width, height, samples);
        floyd_steinberg(&mut img, invert);
        img
    }

    #[test]
    fn test_golden_2x2() {
        // (0,0) = 200 quantizes to 255 with residual -55: the right neighbor
        // drops to 50 - 24 = 26 and stays low, while (1,1) accumulates
        // -3 + 8 + 16 on top of 200 and quantizes high.
        let img = dithered(2, 2, vec![200, 50, 50, 200], false);
        assert_eq!(img.samples(), &[255, 0, 0, 255]);
    }

    #[test]
    fn test_output_is_two_level() {
        for (w, h) in [(0u32, 0u32), (1, 1), (1, 7), (7, 1), (5, 4)] {
            let samples: Vec<i32> = (0..w * h).map(|i| (i * 37 % 256) as i32).collect();
            let img = dithered(w, h, samples, false);
            assert!(img.samples().iter().all(|&v| v == 0 || v == 255));
            assert_eq!(img.width(), w);
            assert_eq!(img.height(), h);
        }
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(dithered(1, 1, vec![127], false).samples(), &[0]);
        assert_eq!(dithered(1, 1, vec![128], false).samples(), &[255]);
    }

    #[test]
    fn test_invert_swaps_levels() {
        assert_eq!(dithered(1, 1, vec![128], true).samples(), &[0]);
        assert_eq!(dithered(1, 1, vec![127], true).samples(), &[255]);
    }

    #[test]
    fn test_invert_complements_flat_extremes() {
        // flat black and flat white diffuse no error in the plain run, so
        // the inverted run is the exact pixelwise complement
        for value in [0, 255] {
            let plain = dithered(3, 3, vec![value; 9], false);
            let inverted = dithered(3, 3, vec![value; 9], true);
            let complemented: Vec<i32> = inverted.samples().iter().map(|v| 255 - v).collect();
            assert_eq!(plain.samples(), complemented.as_slice());
        }
    }

    #[test]
    fn test_edges_stay_in_bounds() {
        // uniform 200 pushes error through every edge guard; finishing
        // without a panic and landing on two levels is the assertion
        let mut img = GrayBuffer::new(3, 3);
        img.fill(200);
        floyd_steinberg(&mut img, false);
        assert!(img.samples().iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn test_deterministic() {
        let samples: Vec<i32> = (0..64).map(|i| i * 4 % 256).collect();
        let a = dithered(8, 8, samples.clone(), false);
        let b = dithered(8, 8, samples, false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_mean_intensity_preserved() {
        // uniform 30% gray should land near 30% high pixels
        let mut img = GrayBuffer::new(10, 10);
        img.fill(76);
        floyd_steinberg(&mut img, false);
        let white = img.samples().iter().filter(|&&v| v == 255).count();
        assert!(
            (15..=45).contains(&white),
            "expected ~30 white pixels, got {}",
            white
        );
    }

    #[test]
    fn test_empty_buffer() {
        let mut img = GrayBuffer::new(0, 0);
        floyd_steinberg(&mut img, false);
        assert!(img.is_empty());
    }
}
