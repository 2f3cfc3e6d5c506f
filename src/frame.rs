use ndarray::{Array2, s};

/// Raw pixel width of the Stonyman array. Every row the firmware emits has
/// exactly this many samples; anything else is noise on the line.
pub const FRAME_COLS: usize = 112;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("frame shape mismatch: {0}x{1} vs {2}x{3}")]
    ShapeMismatch(usize, usize, usize, usize),
}

/// One acquired sensor reading, one sensor row per matrix row.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    data: Array2<f32>,
}

impl Frame {
    /// Build a frame from row-major samples. The buffer must hold a whole
    /// number of [`FRAME_COLS`]-wide rows; the parser only ever appends
    /// complete rows.
    pub fn from_flat(samples: Vec<f32>) -> Frame {
        let nrows = samples.len() / FRAME_COLS;
        let data = Array2::from_shape_vec((nrows, FRAME_COLS), samples)
            .expect("sample buffer holds complete rows");
        Frame { data }
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    pub fn data(&self) -> &Array2<f32> {
        &self.data
    }

    /// Element-wise `self - other`. Both frames must have the same shape.
    pub fn subtract(&self, other: &Frame) -> Result<Frame, Error> {
        if self.data.dim() != other.data.dim() {
            let (ar, ac) = self.data.dim();
            let (br, bc) = other.data.dim();
            return Err(Error::ShapeMismatch(ar, ac, br, bc));
        }
        Ok(Frame {
            data: &self.data - &other.data,
        })
    }

    /// Reverse the row order. The sensor scans bottom-up, so frames are
    /// flipped before display.
    pub fn flipud(&self) -> Frame {
        Frame {
            data: self.data.slice(s![..;-1, ..]).to_owned(),
        }
    }

    /// Smallest and largest sample in the frame, `(0.0, 0.0)` when empty.
    pub fn min_max(&self) -> (f32, f32) {
        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for &v in self.data.iter() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if lo > hi { (0.0, 0.0) } else { (lo, hi) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(nrows: usize, value: f32) -> Frame {
        Frame::from_flat(vec![value; nrows * FRAME_COLS])
    }

    #[test]
    fn subtract_elementwise() {
        let noise = filled(2, 1.0);
        let snapshot = filled(2, 0.0);
        let diff = noise.subtract(&snapshot).unwrap();
        assert_eq!(diff, filled(2, 1.0));
    }

    #[test]
    fn subtract_rejects_mismatched_shapes() {
        let a = filled(2, 1.0);
        let b = filled(3, 1.0);
        assert!(matches!(
            a.subtract(&b),
            Err(Error::ShapeMismatch(2, FRAME_COLS, 3, FRAME_COLS))
        ));
    }

    #[test]
    fn flipud_reverses_rows() {
        let mut samples = vec![1.0; FRAME_COLS];
        samples.extend(vec![2.0; FRAME_COLS]);
        let frame = Frame::from_flat(samples);

        let flipped = frame.flipud();
        assert_eq!(flipped.data()[(0, 0)], 2.0);
        assert_eq!(flipped.data()[(1, 0)], 1.0);
        assert_eq!(flipped.flipud(), frame);
    }

    #[test]
    fn empty_frame_keeps_column_arity() {
        let frame = Frame::from_flat(Vec::new());
        assert_eq!(frame.nrows(), 0);
        assert_eq!(frame.ncols(), FRAME_COLS);
        assert_eq!(frame.min_max(), (0.0, 0.0));
    }

    #[test]
    fn min_max_spans_all_samples() {
        let mut samples = vec![5.0; 2 * FRAME_COLS];
        samples[3] = -2.0;
        samples[200] = 9.0;
        assert_eq!(Frame::from_flat(samples).min_max(), (-2.0, 9.0));
    }
}
