//! Shared constants for end-to-end tests
//!
//! This module contains all constants used across the test suite.
//! When test data changes (title ids, actor names, vote counts),
//! update only this file.

// ============================================================================
// Title ids
// ============================================================================

/// "Alpha" (2001, Drama/War, rated 9.1, 5,000 votes) - the hard-tier movie
pub const ALPHA_ID: &str = "tt0000001";

/// "Beta" (1999, Comedy, rated 8.2, 150,000 votes) - the easy-tier movie
pub const BETA_ID: &str = "tt0000002";

/// "Gamma" (2010, Drama/Thriller, rated 7.5, 75,000 votes) - the medium tier
pub const GAMMA_ID: &str = "tt0000003";

/// "Delta" (2015, Horror, rated 6.0) - below the test rating threshold
pub const DELTA_ID: &str = "tt0000004";

/// A short, not a movie - filtered by title type
pub const SHORT_ID: &str = "tt0000005";

/// Adult title - filtered by the adult flag
pub const ADULT_ID: &str = "tt0000006";

/// Movie with a null release year
pub const NO_YEAR_ID: &str = "tt0000007";

/// Movie with no genre information
pub const NO_GENRE_ID: &str = "tt0000008";

/// Movie with no row in the ratings dump
pub const UNRATED_ID: &str = "tt0000009";

/// "Epsilon" (2020, Sci-Fi, rated 8.8) - no resolvable acting credit
pub const EPSILON_ID: &str = "tt0000010";

// ============================================================================
// Titles
// ============================================================================

pub const ALPHA_TITLE: &str = "Alpha";
pub const BETA_TITLE: &str = "Beta";
pub const GAMMA_TITLE: &str = "Gamma";

// ============================================================================
// Person ids and names
// ============================================================================

/// Credited on Alpha and Gamma
pub const JANE_ID: &str = "nm0000001";
pub const JANE_NAME: &str = "Jane Doe";

/// Credited on Beta
pub const JOHN_ID: &str = "nm0000002";
pub const JOHN_NAME: &str = "John Smith";

/// Credited on Beta
pub const MARY_ID: &str = "nm0000003";
pub const MARY_NAME: &str = "Mary Major";

/// Credited on Epsilon as director - not an acting credit
pub const DIRECTOR_ID: &str = "nm0000008";

/// Credited on Epsilon as actor, but absent from the names dump
pub const GHOST_ID: &str = "nm0000009";

// ============================================================================
// Thresholds
// ============================================================================

/// Standard test threshold: admits Alpha, Beta and Gamma
pub const TEST_THRESHOLD: f64 = 7.0;

/// Threshold that only Alpha (9.1) clears
pub const ALPHA_ONLY_THRESHOLD: f64 = 9.0;

/// Threshold that nothing in the fixture set clears
pub const IMPOSSIBLE_THRESHOLD: f64 = 9.5;
