pub mod content;
pub mod error;
pub mod parallax;
pub mod scroll;
pub mod seo;
pub mod theme;
pub mod ticker;
pub mod typewriter;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
#[cfg(target_arch = "wasm32")]
mod logging;

pub use error::{Error, Result};
