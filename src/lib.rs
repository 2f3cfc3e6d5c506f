pub mod ascii;
pub mod display;
pub mod frame;
pub mod stonyman;
pub mod transport;
