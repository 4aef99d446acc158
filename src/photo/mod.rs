/// Background photo slideshow
///
/// This module handles:
/// - Scanning the photo directory on a rate limit (catalogue.rs)
/// - Picking photos without repeats until every photo was shown (pool.rs)
/// - Decoding and letterbox-scaling photos to the surface (loader.rs)
/// - The cross-fade state machine and compositing (rotator.rs)

pub mod catalogue;
pub mod loader;
pub mod pool;
pub mod rotator;

pub use loader::Surface;
pub use rotator::PhotoRotator;
