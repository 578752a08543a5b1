mod decode;

pub use decode::decode_percent;
