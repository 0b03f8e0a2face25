//! RADIUS packet codec: the fixed 20-byte header and the packet-level
//! decode/encode entry points that tie the header to the attribute list.

mod code;
mod header;
mod packet;

pub use code::Code;
pub use header::Header;
pub use packet::Packet;
