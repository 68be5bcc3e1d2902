pub mod modular;
mod point;

pub use point::Point;
