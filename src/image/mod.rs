pub mod edge_map;
pub mod frame;
pub mod io;

pub use self::edge_map::EdgeMap;
pub use self::frame::{ChannelOrder, Frame, FrameDims};
