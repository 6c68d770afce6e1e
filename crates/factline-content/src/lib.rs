//! Title, script and SEO metadata generation.
//!
//! Turns a `FactBundle` into a `ContentBundle`: a template-pool title,
//! a four-section script, tags and a duration estimate. All random
//! choices run through a caller-supplied seeded RNG, so the same seed
//! and facts always produce the same script.

pub mod generator;
pub mod templates;

pub use generator::ContentGenerator;
