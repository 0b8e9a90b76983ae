use scraper::ElementRef;

/// Concatenated text of an element and its descendants, whitespace collapsed.
pub fn element_text(element: ElementRef) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

/// Collapses runs of whitespace (including NBSP) into single spaces and trims.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
