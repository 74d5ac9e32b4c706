// Adapters for the outward-facing ports: identity and title suggestion

pub mod identity;
pub mod title_suggester;

pub use identity::StaticIdentityProvider;
pub use title_suggester::OpenAiTitleSuggester;
