//! Bullet-list normalization for section content.

/// Turn free text into a markdown bullet list.
///
/// Each non-blank line becomes `- <text>`. Existing bullet markers are
/// stripped first, so running this on its own output changes nothing.
pub fn to_bullets(text: &str) -> String {
    text.lines()
        .map(strip_bullet_markers)
        .filter(|line| !line.is_empty())
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_bullet_markers(line: &str) -> &str {
    let mut rest = line.trim();
    loop {
        let Some(after) = rest.strip_prefix(['-', '*', '+']) else {
            break;
        };
        if !after.is_empty() && !after.starts_with(char::is_whitespace) {
            break;
        }
        rest = after.trim_start();
    }
    rest.trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_become_bullets() {
        assert_eq!(to_bullets("Shipped the release\n\n  Fixed the build  "), "- Shipped the release\n- Fixed the build");
    }

    #[test]
    fn existing_markers_are_not_doubled() {
        assert_eq!(to_bullets("- one\n* two\n+ three\n- - four"), "- one\n- two\n- three\n- four");
    }

    #[test]
    fn output_is_a_fixed_point() {
        let once = to_bullets("walk more\n- sleep earlier\n");
        assert_eq!(to_bullets(&once), once);
        assert!(!once.contains("- - "));
    }

    #[test]
    fn dashes_inside_words_survive() {
        assert_eq!(to_bullets("-5 degrees outside\nwell-known fix -"), "- -5 degrees outside\n- well-known fix -");
    }

    #[test]
    fn marker_only_lines_are_dropped() {
        assert_eq!(to_bullets("-\n*\n"), "");
    }
}
