//! Category display formatting

/// Format the category set as a list
pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::from("Categories:\n");
    for category in categories {
        output.push_str(&format!("  {}\n", category));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_category_list() {
        assert_eq!(format_category_list(&[]), "No categories found.\n");
        assert_eq!(
            format_category_list(&["food".to_string(), "rent".to_string()]),
            "Categories:\n  food\n  rent\n"
        );
    }
}
