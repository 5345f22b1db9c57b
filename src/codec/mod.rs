// Pack and unpack engines plus the numeric value boundary type

pub mod elements;
pub mod pack;
pub mod unpack;
pub mod value;

pub use pack::pack;
pub use unpack::unpack;
pub use value::Value;
