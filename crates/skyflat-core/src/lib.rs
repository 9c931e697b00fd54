pub mod background;
pub mod color;
pub mod consts;
pub mod difference;
pub mod error;
pub mod frame;
pub mod gradient;
pub mod io;
pub mod pipeline;
