use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::frame::{FRAME_COLS, Frame};
use crate::transport::{self, Transport};

/// Asks the firmware for a Matlab-style ASCII dump of the pixel array.
pub const CMD_MATLAB_DUMP: u8 = b'M';

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(transport::Error),

    #[error("io error: {0}")]
    Io(io::Error),
}

/// Prompt the operator, block until they acknowledge on stdin, then capture
/// one frame. The acknowledgment is the synchronization point that lets the
/// operator cover or uncover the lens before the dump starts.
pub fn acquire<T: Transport>(transport: &mut T, prompt: &str) -> Result<Frame, Error> {
    await_operator(prompt).map_err(Error::Io)?;
    read_frame(transport)
}

fn await_operator(prompt: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(prompt.as_bytes())?;
    stdout.flush()?;

    let mut ack = String::new();
    io::stdin().lock().read_line(&mut ack)?;
    Ok(())
}

/// Send the dump command and accumulate rows until the terminating blank
/// line. Lines that are not exactly [`FRAME_COLS`] numeric tokens are
/// dropped without comment, matching the firmware's framing contract.
pub fn read_frame<T: Transport>(transport: &mut T) -> Result<Frame, Error> {
    transport
        .send_command(CMD_MATLAB_DUMP)
        .map_err(Error::Transport)?;

    let mut samples = Vec::new();
    let mut dropped = 0usize;

    loop {
        let line = transport.read_line().map_err(Error::Transport)?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.is_empty() {
            break;
        }
        if tokens.len() != FRAME_COLS {
            dropped += 1;
            continue;
        }
        match parse_row(&tokens) {
            Some(row) => samples.extend_from_slice(&row),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!("dropped {} malformed lines", dropped);
    }

    let frame = Frame::from_flat(samples);
    info!("acquired {}x{} frame", frame.nrows(), frame.ncols());
    Ok(frame)
}

fn parse_row(tokens: &[&str]) -> Option<Vec<f32>> {
    tokens.iter().map(|t| t.parse::<f32>().ok()).collect()
}
