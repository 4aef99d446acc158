/// Hiragana clock face
///
/// This module handles:
/// - Transcribing numbers with the right counter readings (numbers.rs)
/// - Assembling the spoken date and time sentences (phrase.rs)

pub mod numbers;
pub mod phrase;

pub use numbers::NumberCategory;
pub use phrase::{HiraganaClock, TimePoint};
