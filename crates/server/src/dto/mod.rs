mod place;
mod ride;
mod route;

pub use place::*;
pub use ride::*;
pub use route::*;
