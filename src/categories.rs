use crate::BASE_URL;

/// One fixed partition of the remote directory.
pub struct Category {
    pub label: &'static str,
    pub remote_id: u32,
}

/// The directory's category registry. Compiled in, immutable for the run.
pub const CATEGORIES: &[Category] = &[
    Category { label: "Featured", remote_id: 1 },
    Category { label: "New Creators", remote_id: 2 },
    Category { label: "Fitness", remote_id: 3 },
    Category { label: "Music", remote_id: 4 },
    Category { label: "Gaming", remote_id: 5 },
];

impl Category {
    pub fn listing_url(&self) -> String {
        format!("{BASE_URL}/category/{}", self.remote_id)
    }
}

/// Storage key for a category label: lowercase, whitespace to hyphens.
/// Idempotent, so already-slugged input passes through unchanged.
pub fn slugify(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Re-titles a slug for the report: hyphens to spaces, words capitalized.
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_lowercase_hyphenated() {
        assert_eq!(slugify("New Creators"), "new-creators");
        assert_eq!(slugify("Fitness"), "fitness");
    }

    #[test]
    fn slugify_is_idempotent() {
        assert_eq!(slugify("new-creators"), "new-creators");
    }

    #[test]
    fn every_registry_label_round_trips() {
        for category in CATEGORIES {
            assert_eq!(title_from_slug(&slugify(category.label)), category.label);
        }
    }

    #[test]
    fn listing_urls_carry_the_remote_id() {
        assert!(CATEGORIES[1].listing_url().ends_with("/category/2"));
    }
}
