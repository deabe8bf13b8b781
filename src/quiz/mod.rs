pub mod category;
pub use category::*;

pub mod mode;
pub use mode::*;

pub mod render;
pub use render::*;

pub mod round;
pub use round::*;

pub mod scenario;
pub use scenario::*;

pub mod score;
pub use score::*;

pub mod session;
pub use session::*;
