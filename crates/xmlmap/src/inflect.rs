//! English singular/plural forms for collection element names

const UNCOUNTABLE: &[&str] = &[
    "data",
    "equipment",
    "fish",
    "information",
    "metadata",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
];

/// (singular, plural)
const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("man", "men"),
    ("mouse", "mice"),
    ("person", "people"),
    ("woman", "women"),
];

/// Element name for one member of a list-valued attribute: `items` → `item`
pub fn singularize(word: &str) -> String {
    if is_uncountable(word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == word) {
        return (*singular).to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    if ["sses", "shes", "ches", "xes"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        if let Some(stem) = word.strip_suffix("es") {
            return stem.to_string();
        }
    }
    if word.ends_with("ss") {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}

/// Attribute name for a run of repeated elements: `item` → `items`
pub fn pluralize(word: &str) -> String {
    if is_uncountable(word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == word) {
        return (*plural).to_string();
    }

    if let Some(stem) = word.strip_suffix('y') {
        let before = stem.chars().last();
        if before.is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{stem}ies");
        }
    }
    for suffix in ["s", "sh", "ch", "x", "z"] {
        if word.ends_with(suffix) {
            return format!("{word}es");
        }
    }
    format!("{word}s")
}

fn is_uncountable(word: &str) -> bool {
    UNCOUNTABLE.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("items"), "item");
        assert_eq!(singularize("positions"), "position");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("addresses"), "address");
        assert_eq!(singularize("branches"), "branch");
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("class"), "class");
        assert_eq!(singularize("data"), "data");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("item"), "items");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("address"), "addresses");
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("sheep"), "sheep");
    }

    #[test]
    fn test_inverse_on_regular_words() {
        for word in ["item", "position", "order", "category", "box", "method"] {
            assert_eq!(singularize(&pluralize(word)), word);
        }
    }
}
