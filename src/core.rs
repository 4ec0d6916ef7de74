pub mod error;
pub mod mapping;
pub mod sample;
pub mod traits;

pub use self::error::*;
pub use self::mapping::*;
pub use self::sample::*;
pub use self::traits::*;
