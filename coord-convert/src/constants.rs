/// Shared configuration for the batch converter

/// Rows converted between progress bar updates
pub const CONVERSION_CHUNK_SIZE: usize = 25_000;

/// Progress bar layout for the conversion pass
pub const PROGRESS_TEMPLATE: &str = "[{bar:40.green/blue}] {pos}/{len} points ({percent}%) {msg}";

pub const PROGRESS_CHARS: &str = "▉▊▋▌▍▎▏ ";
