mod hide;
mod unveil;

pub use hide::hide;
pub use unveil::unveil;
