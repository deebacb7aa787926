//! Field constraints shared by create and update requests
//!
//! Lengths are counted in characters, not bytes, so titles in Korean or
//! Japanese get the same budget as ASCII ones.

use crate::error::{KaraokeError, Result};
use crate::types::Patch;

/// Maximum playlist name length
pub const PLAYLIST_NAME_MAX: usize = 100;

/// Maximum song title length
pub const SONG_TITLE_MAX: usize = 200;

/// Maximum song artist length
pub const SONG_ARTIST_MAX: usize = 100;

/// Check a required text field: non-empty and at most `max` characters
pub fn required_text(field: &str, value: &str, max: usize) -> Result<()> {
    if value.is_empty() {
        return Err(KaraokeError::validation(format!("{field} is required")));
    }

    if value.chars().count() > max {
        return Err(KaraokeError::validation(format!(
            "{field} must be at most {max} characters"
        )));
    }

    Ok(())
}

/// Check a patched text field; absent fields always pass
pub fn patched_text(field: &str, value: &Patch<String>, max: usize) -> Result<()> {
    match value {
        Patch::Present(text) => required_text(field, text, max),
        Patch::Absent => Ok(()),
    }
}

/// Check an order value supplied for an explicit reorder
pub fn order_value(value: i64) -> Result<()> {
    if value < 0 {
        return Err(KaraokeError::validation("order must be zero or greater"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_empty() {
        let err = required_text("name", "", PLAYLIST_NAME_MAX).unwrap_err();
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn required_text_bounds_are_inclusive() {
        let exact = "a".repeat(PLAYLIST_NAME_MAX);
        assert!(required_text("name", &exact, PLAYLIST_NAME_MAX).is_ok());

        let over = "a".repeat(PLAYLIST_NAME_MAX + 1);
        assert!(required_text("name", &over, PLAYLIST_NAME_MAX).is_err());
    }

    #[test]
    fn length_counts_characters() {
        // 100 Hangul syllables are 300 bytes but still fit
        let hangul = "노".repeat(SONG_ARTIST_MAX);
        assert!(required_text("artist", &hangul, SONG_ARTIST_MAX).is_ok());
    }

    #[test]
    fn absent_patch_is_not_validated() {
        assert!(patched_text("title", &Patch::Absent, SONG_TITLE_MAX).is_ok());
        assert!(patched_text("title", &Patch::Present(String::new()), SONG_TITLE_MAX).is_err());
    }

    #[test]
    fn negative_order_is_rejected() {
        assert!(order_value(0).is_ok());
        assert!(order_value(5).is_ok());
        assert!(order_value(-1).is_err());
    }
}
