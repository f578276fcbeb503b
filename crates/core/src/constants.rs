//! Constants used throughout the PitchSite core crate.
//!
//! Field placeholders, default idea values and datastore names live here so the renderer, the
//! service and the tests agree on them.

/// Language tag that switches the document to Urdu, right-to-left.
pub const URDU_LANGUAGE_TAG: &str = "ur";

/// Language tag used when neither the idea nor the pitch carries one.
pub const DEFAULT_LANGUAGE_TAG: &str = "en";

/// Idea name used when no idea is supplied to the renderer.
pub const DEFAULT_IDEA_NAME: &str = "Startup";

/// Idea description used when no idea is supplied to the renderer.
pub const DEFAULT_IDEA_DESCRIPTION: &str = "No description available";

/// Industry assigned to synthesised ideas.
pub const DEFAULT_INDUSTRY: &str = "Technology";

pub const STARTUP_NAME_PLACEHOLDER: &str = "Your Startup";
pub const TAGLINE_PLACEHOLDER: &str = "Innovative Solutions";
pub const PITCH_PLACEHOLDER: &str = "No pitch content available";
pub const PROBLEM_PLACEHOLDER: &str = "No problem description available";
pub const SOLUTION_PLACEHOLDER: &str = "No solution description available";
pub const TARGET_AUDIENCE_PLACEHOLDER: &str = "No target audience specified";
pub const LANDING_COPY_PLACEHOLDER: &str = "Get started with us today!";

/// Default size of the datastore connection pool.
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
