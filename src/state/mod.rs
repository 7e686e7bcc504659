pub mod pointer;
pub mod touch;

pub use pointer::PointerState;
pub use touch::TouchPan;
