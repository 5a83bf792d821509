pub mod bill;
pub mod price;

pub use bill::*;
pub use price::*;
