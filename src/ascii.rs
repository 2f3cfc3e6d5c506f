use std::io::{self, Write};

use crate::frame::Frame;

/// Glyph ramp, densest first. Matches the dump charset the firmware uses
/// for its own ASCII output.
const DISP_CHARS: &[u8] = b"#@$%&x*=o+-~,. ";

/// Render the frame as ASCII art, one text row per sensor row. Bright
/// samples map to dense glyphs so the image reads correctly on a dark
/// terminal.
pub fn dump<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    let (lo, hi) = frame.min_max();
    let steps = (DISP_CHARS.len() - 1) as f32;
    let span = if hi > lo { hi - lo } else { 1.0 };

    for row in frame.data().rows() {
        let mut line = Vec::with_capacity(row.len() + 1);
        for &v in row.iter() {
            let i = ((v - lo) / span * steps).clamp(0.0, steps) as usize;
            line.push(DISP_CHARS[DISP_CHARS.len() - 1 - i]);
        }
        line.push(b'\n');
        out.write_all(&line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FRAME_COLS;

    #[test]
    fn one_text_row_per_sensor_row() {
        let frame = Frame::from_flat(vec![1.0; 2 * FRAME_COLS]);
        let mut out = Vec::new();
        dump(&mut out, &frame).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.len() == FRAME_COLS));
    }

    #[test]
    fn extremes_map_to_ramp_ends() {
        let mut samples = vec![5.0; FRAME_COLS];
        samples[0] = 0.0;
        samples[1] = 10.0;
        let mut out = Vec::new();
        dump(&mut out, &Frame::from_flat(samples)).unwrap();

        assert_eq!(out[0], b' ');
        assert_eq!(out[1], b'#');
    }

    #[test]
    fn empty_frame_dumps_nothing() {
        let mut out = Vec::new();
        dump(&mut out, &Frame::from_flat(Vec::new())).unwrap();
        assert!(out.is_empty());
    }
}
