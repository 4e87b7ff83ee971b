pub mod alignment_matrix;
pub mod alphabet;
pub mod center;
pub mod consensus;
pub mod error;
pub mod gap_profile;
mod io;
pub mod multiple_alignment;
pub mod pairwise_alignment;
pub mod score;
pub mod star_aligner;
pub mod substitution_matrix;

pub use star_aligner::align;

#[cfg(test)]
mod tests;
