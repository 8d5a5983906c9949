//! Tag helpers. Tags are free text, but a tag of the exact form `q0`–`q5`
//! encodes a quality rating that the post pages surface as stars.

const MAX_RATING: u8 = 5;

/// First quality tag wins, scanning in tag order. `q6`, `q12` or `quality`
/// are ordinary tags.
pub fn quality_rating<S: AsRef<str>>(tags: &[S]) -> Option<u8> {
    tags.iter().map(AsRef::as_ref).find_map(parse_quality_tag)
}

fn parse_quality_tag(tag: &str) -> Option<u8> {
    let digit = tag.strip_prefix('q')?;
    if digit.len() != 1 {
        return None;
    }
    let n: u8 = digit.parse().ok()?;
    (n <= MAX_RATING).then_some(n)
}

/// Render a rating as a fixed-width star strip, e.g. `★★★☆☆` for 3.
pub fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    let mut out = String::new();
    out.extend(std::iter::repeat('★').take(filled));
    out.extend(std::iter::repeat('☆').take(MAX_RATING as usize - filled));
    out
}

/// Star strip for a post's tags, or empty when no quality tag is present.
pub fn quality_stars<S: AsRef<str>>(tags: &[S]) -> String {
    quality_rating(tags).map(stars).unwrap_or_default()
}
