//! RocksDB column family definitions.
//!
//! # Column Families (3 total)
//! | Name | Purpose | Key Format | Value |
//! |------|---------|------------|-------|
//! | subjects | Ordered subject list | position (8 bytes BE) | SubjectRecord |
//! | grades | Raw grade rows | period prefix + student (8) + subject (8) | GradeRow |
//! | cluster_results | Latest run per period | period prefix + student (8) | ClusterResult |
//!
//! The period prefix is `academic_year \0 semester \0`; see [`crate::schema`].
//!
//! # FAIL FAST Policy
//!
//! All option builders are infallible at construction time. Errors only
//! occur at DB open time, and those are surfaced by RocksDB itself.

use rocksdb::{BlockBasedOptions, Cache, ColumnFamilyDescriptor, Options};

/// Ordered subject list.
/// Key: position (u64 BE), so iteration order is subject order
/// Value: SubjectRecord serialized via bincode
pub const CF_SUBJECTS: &str = "subjects";

/// Raw grades, grouped by period.
/// Key: period prefix + student_id (u64 BE) + subject_id (u64 BE)
/// Value: GradeRow serialized via bincode
pub const CF_GRADES: &str = "grades";

/// Clustering results, one row per student per period.
/// Key: period prefix + student_id (u64 BE)
/// Value: ClusterResult serialized via bincode
pub const CF_CLUSTER_RESULTS: &str = "cluster_results";

/// All column family names.
pub const ALL_CFS: &[&str] = &[CF_SUBJECTS, CF_GRADES, CF_CLUSTER_RESULTS];

/// Total count of CFs.
pub const CF_COUNT: usize = 3;

fn block_options(cache: &Cache) -> BlockBasedOptions {
    let mut block_opts = BlockBasedOptions::default();
    block_opts.set_block_cache(cache);
    block_opts.set_bloom_filter(10.0, false);
    block_opts.set_cache_index_and_filter_blocks(true);
    block_opts
}

/// Options for the subject list (tiny, read whole).
pub fn subjects_cf_options(cache: &Cache) -> Options {
    let mut opts = Options::default();
    opts.set_block_based_table_factory(&block_options(cache));
    opts.set_compression_type(rocksdb::DBCompressionType::None);
    opts.create_if_missing(true);
    opts
}

/// Options for grades (many small rows, scanned by period prefix).
pub fn grades_cf_options(cache: &Cache) -> Options {
    let mut opts = Options::default();
    opts.set_block_based_table_factory(&block_options(cache));
    opts.set_compression_type(rocksdb::DBCompressionType::Lz4);
    opts.create_if_missing(true);
    opts
}

/// Options for cluster results (replaced per period with range deletes).
pub fn cluster_results_cf_options(cache: &Cache) -> Options {
    let mut opts = Options::default();
    opts.set_block_based_table_factory(&block_options(cache));
    opts.set_compression_type(rocksdb::DBCompressionType::Lz4);
    opts.create_if_missing(true);
    opts
}

/// Get all column family descriptors.
pub fn get_cf_descriptors(cache: &Cache) -> Vec<ColumnFamilyDescriptor> {
    vec![
        ColumnFamilyDescriptor::new(CF_SUBJECTS, subjects_cf_options(cache)),
        ColumnFamilyDescriptor::new(CF_GRADES, grades_cf_options(cache)),
        ColumnFamilyDescriptor::new(CF_CLUSTER_RESULTS, cluster_results_cf_options(cache)),
    ]
}
