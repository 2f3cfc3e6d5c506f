use std::io::{BufRead, BufReader, Write};
use std::time::Duration;

/// Firmware reads are bounded by this timeout; a read that expires without a
/// full line is reported as an empty line, which the frame parser treats as
/// end-of-frame.
const READ_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serial port error: {0}")]
    Serial(serialport::Error),

    #[error("io error: {0}")]
    Io(std::io::Error),
}

/// Line-oriented channel to the sensor board.
pub trait Transport {
    /// Write a single command byte to the device.
    fn send_command(&mut self, command: u8) -> Result<(), Error>;

    /// Read one line of text, blocking up to the transport's read timeout.
    fn read_line(&mut self) -> Result<String, Error>;
}

/// Serial connection to the Arduino running the Stonyman sketch.
pub struct SerialTransport {
    reader: BufReader<Box<dyn serialport::SerialPort>>,
}

impl SerialTransport {
    pub fn open(path: &str, baud: u32) -> Result<Self, Error> {
        let port = serialport::new(path, baud)
            .timeout(READ_TIMEOUT)
            .open()
            .map_err(Error::Serial)?;
        Ok(SerialTransport {
            reader: BufReader::new(port),
        })
    }
}

impl Transport for SerialTransport {
    fn send_command(&mut self, command: u8) -> Result<(), Error> {
        let port = self.reader.get_mut();
        port.write_all(&[command]).map_err(Error::Io)?;
        port.flush().map_err(Error::Io)
    }

    fn read_line(&mut self) -> Result<String, Error> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(_) => Ok(line),
            // The firmware terminates a dump with a blank line; a timed-out
            // read is indistinguishable from that terminator on the wire.
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Ok(String::new()),
            Err(e) => Err(Error::Io(e)),
        }
    }
}
