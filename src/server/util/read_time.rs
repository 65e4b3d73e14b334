/// Words per minute assumed when estimating read time.
const WORDS_PER_MINUTE: usize = 200;

/// Estimates the read time of blog content in minutes.
///
/// Counts whitespace-separated words and divides by the assumed reading
/// speed, rounding up. Always returns at least one minute so empty or very
/// short posts never display a zero read time.
///
/// # Arguments
/// - `content` - Blog body text
///
/// # Returns
/// - `i32` - Estimated read time in whole minutes (minimum 1)
pub fn estimate_read_time(content: &str) -> i32 {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE);

    minutes.max(1) as i32
}
