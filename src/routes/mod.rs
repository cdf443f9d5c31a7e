mod contact;
mod health_check;
mod lead;

pub use contact::*;
pub use health_check::*;
pub use lead::*;
