pub mod record;
pub mod session;

pub use record::*;
pub use session::*;
