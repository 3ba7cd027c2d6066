//! Plain-text cleanups: truncation at a marker and separator-line removal.

use wikipress_core::{Error, Result};

/// Keep everything before the first occurrence of `marker`.
///
/// Text without the marker is returned unchanged. An empty marker is a
/// configuration error.
///
/// # Examples
///
/// ```
/// use wikipress_parser::remove_after_string;
///
/// assert_eq!(remove_after_string("Hello World", "World").unwrap(), "Hello ");
/// assert_eq!(remove_after_string("Hello", "Bye").unwrap(), "Hello");
/// ```
pub fn remove_after_string(text: &str, marker: &str) -> Result<String> {
    check_marker(marker)?;
    Ok(text.split(marker).next().unwrap_or_default().to_string())
}

/// Truncate every line at its first occurrence of `marker`.
pub fn remove_after_string_in_lines(text: &str, marker: &str) -> Result<String> {
    check_marker(marker)?;
    Ok(text
        .split('\n')
        .map(|line| line.split(marker).next().unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n"))
}

fn check_marker(marker: &str) -> Result<()> {
    if marker.is_empty() {
        return Err(Error::config_error("truncation marker must not be empty"));
    }
    Ok(())
}

/// Drop lines made only of `character` repeated (ignoring surrounding whitespace).
///
/// Blank lines are kept. `character` must be exactly one character.
pub fn remove_single_char_lines(text: &str, character: &str) -> Result<String> {
    let mut chars = character.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(Error::config_error(format!(
                "expected a single character, got {character:?}"
            )));
        }
    };

    Ok(text
        .split('\n')
        .filter(|line| {
            let trimmed = line.trim();
            trimmed.is_empty() || !trimmed.chars().all(|x| x == c)
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_after_string() {
        assert_eq!(remove_after_string("Hello World", "World").unwrap(), "Hello ");
        assert_eq!(remove_after_string("Hello World", "Hello").unwrap(), "");
        assert_eq!(
            remove_after_string("a\n---\nb\n---\nc", "---").unwrap(),
            "a\n"
        );
        assert_eq!(remove_after_string("", "x").unwrap(), "");
    }

    #[test]
    fn test_remove_after_string_in_lines() {
        assert_eq!(
            remove_after_string_in_lines("keep % drop\nplain\n% all", "%").unwrap(),
            "keep \nplain\n"
        );
    }

    #[test]
    fn test_empty_marker_is_error() {
        assert!(remove_after_string("text", "").unwrap_err().is_config());
        assert!(remove_after_string_in_lines("text", "").is_err());
    }

    #[test]
    fn test_remove_single_char_lines() {
        assert_eq!(
            remove_single_char_lines("a\n---\nb", "-").unwrap(),
            "a\nb"
        );
        assert_eq!(
            remove_single_char_lines("a\n  ***  \n\nb*\n*", "*").unwrap(),
            "a\n\nb*"
        );
        assert_eq!(
            remove_single_char_lines("no separators", "-").unwrap(),
            "no separators"
        );
    }

    #[test]
    fn test_single_char_validation() {
        assert!(remove_single_char_lines("a", "").is_err());
        assert!(remove_single_char_lines("a", "--").is_err());
        assert!(remove_single_char_lines("a", "é").is_ok());
    }
}
