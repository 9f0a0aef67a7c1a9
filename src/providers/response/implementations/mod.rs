pub mod random_provider;
pub mod sequence_provider;
