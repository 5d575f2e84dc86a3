/// Convert a unit display name into its card filename (slug plus `.png`).
///
/// Lowercases, turns spaces and slashes into hyphens and drops apostrophes.
/// Distinct names are not checked for colliding slugs.
pub fn to_filename(name: &str) -> String {
    let mut slug = String::with_capacity(name.len() + 4);
    for c in name.to_lowercase().chars() {
        match c {
            ' ' | '/' => slug.push('-'),
            '\'' => {}
            _ => slug.push(c),
        }
    }
    slug.push_str(".png");
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_roster_names() {
        assert_eq!(to_filename("IRON GUARDS"), "iron-guards.png");
        assert_eq!(to_filename("SORCERER'S APPRENTICES"), "sorcerers-apprentices.png");
        assert_eq!(to_filename("BONE WARRIOR"), "bone-warrior.png");
        assert_eq!(to_filename("IMP"), "imp.png");
    }

    #[test]
    fn slashes_become_hyphens() {
        assert_eq!(to_filename("Mage/Healer"), "mage-healer.png");
    }

    #[test]
    fn consecutive_spaces_are_kept_as_hyphens() {
        assert_eq!(to_filename("A  B"), "a--b.png");
    }
}
