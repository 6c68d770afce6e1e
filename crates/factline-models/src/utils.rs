//! Small shared helpers.

/// Lowercase a title into a storage-safe slug.
///
/// Alphanumerics are kept, runs of anything else collapse to a single
/// `-`, and leading/trailing dashes are trimmed.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("10 Amazing Facts"), "10-amazing-facts");
    }

    #[test]
    fn test_slugify_collapses_punctuation() {
        assert_eq!(
            slugify("Countries With the Weirdest Laws You Won't Believe"),
            "countries-with-the-weirdest-laws-you-won-t-believe"
        );
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  #Shorts!  "), "shorts");
    }
}
