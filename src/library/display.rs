use std::fmt;

use super::model::Track;

/// `[#<id>] <artist> - <title> (<secs>s) <stars>` plus `  [tags: a, b]` when
/// the track has tags.
impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[#{}] {} - {} ({}s) {}",
            self.id(),
            self.artist(),
            self.title(),
            self.duration_secs(),
            stars(self.rating()),
        )?;

        if !self.tags().is_empty() {
            write!(f, "  [tags: {}]", join_tags(self.tags().iter(), ", "))?;
        }
        Ok(())
    }
}

fn stars(rating: u8) -> String {
    "*".repeat(usize::from(rating))
}

fn join_tags<'a>(tags: impl Iterator<Item = &'a str>, sep: &str) -> String {
    tags.collect::<Vec<_>>().join(sep)
}
