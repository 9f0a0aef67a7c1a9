pub mod catalogue;
pub mod implementations;
pub mod trait_response;

pub use catalogue::{canned_responses, CannedResponse, LinkIcon, ResponseLink};
pub use implementations::{random_provider::RandomResponseProvider, sequence_provider::SequenceResponseProvider};
pub use trait_response::ResponseProvider;
