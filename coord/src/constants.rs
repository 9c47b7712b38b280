/// Shared configuration for batch conversion

/// Number of components in every coordinate row
pub const COMPONENTS: usize = 3;

/// Minimum rows handed to a single rayon task, so small batches are not split
pub const PARALLEL_MIN_ROWS: usize = 4_096;
