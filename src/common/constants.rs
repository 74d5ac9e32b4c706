/// Source and policy constants to ensure consistency across the codebase
// Source identifiers (used in CLI and in synthesized review ids)
pub const GOOGLE_BUSINESS_SOURCE: &str = "google";
pub const FIXTURE_SOURCE: &str = "fixture";

// Prefix for synthesized uids on externally sourced reviews
pub const EXTERNAL_UID_PREFIX: &str = "external-user-";

// Placeholder avatar service used when a source record carries no avatar.
// The record's batch position (1-based) is appended as the random seed.
pub const FALLBACK_AVATAR_BASE: &str = "https://picsum.photos/40/40?random=";

// Star rating bounds; 0 marks an external rating that could not be parsed
pub const RATING_MAX: u8 = 5;
pub const RATING_UNKNOWN: u8 = 0;

// Submission form minimums, counted in characters rather than bytes
pub const MIN_CONTENT_CHARS: usize = 10;
pub const MIN_TITLE_CHARS: usize = 3;

/// Get all supported review source identifiers
pub fn get_supported_sources() -> Vec<&'static str> {
    vec![GOOGLE_BUSINESS_SOURCE, FIXTURE_SOURCE]
}
