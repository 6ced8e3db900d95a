// Keyword recommendation engine.
// Skill extraction → per-title scoring → presentation formatting.
// Deterministic: same text and catalog always give the same report.

pub mod engine;
pub mod extractor;
pub mod formatter;
pub mod handlers;
pub mod scorer;
