mod holey_vec;
mod no_debug;

pub use holey_vec::HoleyVec;
pub use no_debug::NoDebug;
