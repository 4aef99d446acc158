/// Clock face presentation
///
/// - layout.rs: font sizing and line wrapping for the phrases
/// - outline.rs: canvas program drawing outlined text

pub mod layout;
pub mod outline;

pub use outline::OutlinedText;
