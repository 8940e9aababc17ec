//! Feature vector construction from raw grade rows.
//!
//! Grade rows arrive one per (student, subject, period). Clustering needs one
//! fixed-length vector per student, so the rows are pivoted against a frozen
//! subject order:
//!
//! | student | subject order: [1, 2, 3] | vector |
//! |---------|--------------------------|--------|
//! | 10 | 1 → 80, 3 → 70 | [80, 0, 70] |
//! | 11 | 2 → 95 | [0, 95, 0] |
//!
//! Students without a matching row are never emitted.

mod builder;


pub use builder::FeatureVectorBuilder;
