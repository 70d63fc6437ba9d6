//! Small view helpers.

/// Join class fragments into one class list, skipping empty fragments.
pub fn class_names(classes: &[&str]) -> String {
    classes
        .iter()
        .filter(|class| !class.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
