// Declare submodules
pub mod alphabet;
pub mod sampler;

// Re-export the building blocks used by the generators
pub use alphabet::compose;
pub use sampler::random_character;
