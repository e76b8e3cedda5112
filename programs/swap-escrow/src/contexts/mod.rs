pub mod initialize;
pub use initialize::*;
pub mod exchange;
pub use exchange::*;
pub mod cancel;
pub use cancel::*;
