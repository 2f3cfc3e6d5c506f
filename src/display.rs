use minifb::{Key, Scale, Window, WindowOptions};

use crate::frame::Frame;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("window error: {0}")]
    Window(minifb::Error),
}

fn gray_pixel(value: u8) -> u32 {
    let v = value as u32;
    (v << 16) | (v << 8) | v
}

/// Min-max normalize the frame to 8-bit gray and paint it row-major.
fn render(frame: &Frame) -> Vec<u32> {
    let (lo, hi) = frame.min_max();
    let span = if hi > lo { hi - lo } else { 1.0 };

    frame
        .data()
        .iter()
        .map(|&v| {
            let scaled = ((v - lo) / span * 255.0).clamp(0.0, 255.0);
            gray_pixel(scaled as u8)
        })
        .collect()
}

/// Show the frame in a grayscale window until the operator dismisses it
/// with Escape or by closing the window.
pub fn show(frame: &Frame, title: &str) -> Result<(), Error> {
    let width = frame.ncols().max(1);
    let height = frame.nrows().max(1);

    let mut framebuf = render(frame);
    framebuf.resize(width * height, gray_pixel(0));

    let mut window = Window::new(
        title,
        width,
        height,
        WindowOptions {
            scale: Scale::X4,
            ..WindowOptions::default()
        },
    )
    .map_err(Error::Window)?;
    window.set_target_fps(60);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&framebuf, width, height)
            .map_err(Error::Window)?;
    }

    Ok(())
}
