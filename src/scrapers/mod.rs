use crate::domain::{Locale, TopField};
use crate::error::{Result, ScraperError};
use crate::utils::element_text;
use scraper::{ElementRef, Selector};
use std::collections::HashMap;

mod profile;
mod uk;

pub use profile::ProfileExtractor;

/// A compiled CSS selector that remembers its source text for error reporting.
#[derive(Debug, Clone)]
pub struct Css {
    source: String,
    selector: Selector,
}

impl Css {
    pub fn parse(source: &str) -> Result<Self> {
        let selector = Selector::parse(source)
            .map_err(|e| ScraperError::Selector(format!("{source}: {e}")))?;

        Ok(Self {
            source: source.to_string(),
            selector,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn first<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        scope.select(&self.selector).next()
    }

    pub fn all<'a>(&self, scope: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        scope.select(&self.selector).collect()
    }

    /// First match, or a structure mismatch naming `section` and this selector.
    pub fn require<'a>(
        &self,
        scope: ElementRef<'a>,
        section: &'static str,
    ) -> Result<ElementRef<'a>> {
        self.first(scope)
            .ok_or_else(|| ScraperError::missing(section, &self.source))
    }
}

/// Container and list selectors of the person page template.
#[derive(Debug, Clone)]
pub struct Selectors {
    pub header: Css,
    pub header_time: Css,
    pub body: Css,
    pub top: Css,
    pub profile_image: Css,
    pub profile_name: Css,
    pub table: Css,
    pub row: Css,
    pub cell: Css,
    pub scoring: Css,
    pub score: Css,
    pub scoring_list: Css,
    pub scoring_item: Css,
    pub scoring_item_text: Css,
    pub names: Css,
    pub names_grid: Css,
    pub name: Css,
}

impl Selectors {
    pub fn person_page() -> Result<Self> {
        Ok(Self {
            header: Css::parse(".profile-page__header")?,
            header_time: Css::parse(".date time")?,
            body: Css::parse(".profile-page__body")?,
            top: Css::parse(".profile-page__top")?,
            profile_image: Css::parse(".profile-image img")?,
            profile_name: Css::parse(".profile-main-info h1")?,
            table: Css::parse("table")?,
            row: Css::parse("tr")?,
            cell: Css::parse("td")?,
            scoring: Css::parse(".scoring")?,
            score: Css::parse(".scoring__header .progressbar span")?,
            scoring_list: Css::parse(".scoring__list")?,
            scoring_item: Css::parse("li")?,
            scoring_item_text: Css::parse("p")?,
            names: Css::parse(".names-section")?,
            names_grid: Css::parse(".names-grid")?,
            name: Css::parse("p")?,
        })
    }
}

/// How a value is pulled out of the second cell of a labelled row.
#[derive(Debug, Clone)]
pub enum Extract {
    CellText,
    Text(Css),
    NthText(Css, usize),
    Attr(Css, &'static str),
}

impl Extract {
    pub fn apply(&self, cell: ElementRef) -> Option<String> {
        match self {
            Extract::CellText => Some(element_text(cell)),
            Extract::Text(css) => css.first(cell).map(element_text),
            Extract::NthText(css, n) => css.all(cell).get(*n).copied().map(element_text),
            Extract::Attr(css, attr) => css
                .first(cell)
                .and_then(|el| el.value().attr(attr))
                .map(|v| v.trim().to_string()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Extract::CellText => "cell text".to_string(),
            Extract::Text(css) => css.as_str().to_string(),
            Extract::NthText(css, n) => format!("{}[{}]", css.as_str(), n),
            Extract::Attr(css, attr) => format!("{}[{}]", css.as_str(), attr),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: TopField,
    pub extract: Extract,
}

impl FieldRule {
    pub fn new(field: TopField, extract: Extract) -> Self {
        Self { field, extract }
    }
}

/// Everything locale-specific the extractor needs: template selectors and
/// the table of row labels it understands.
#[derive(Debug, Clone)]
pub struct LocaleRules {
    pub locale: Locale,
    pub selectors: Selectors,
    rows: HashMap<&'static str, Vec<FieldRule>>,
}

impl LocaleRules {
    pub fn for_locale(locale: Locale) -> Result<Self> {
        match locale {
            Locale::Uk => uk::rules(),
        }
    }

    pub fn new(locale: Locale, selectors: Selectors) -> Self {
        Self {
            locale,
            selectors,
            rows: HashMap::new(),
        }
    }

    pub fn with_row(mut self, label: &'static str, fields: Vec<FieldRule>) -> Self {
        self.rows.insert(label, fields);
        self
    }

    pub fn row(&self, label: &str) -> Option<&[FieldRule]> {
        self.rows.get(label).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn cell_html() -> Html {
        Html::parse_fragment(
            r#"<div><a href=" /uk/company/1 "><span>ТОВ "Ромашка"</span></a>, <span>директор</span><meta content="1965-10-26"></div>"#,
        )
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let err = Css::parse("td[[").unwrap_err();
        assert!(matches!(err, ScraperError::Selector(_)));
    }

    #[test]
    fn test_extract_strategies() {
        let html = cell_html();
        let cell = html.root_element();

        let link = Extract::Attr(Css::parse("a").unwrap(), "href");
        let name = Extract::Text(Css::parse("a span").unwrap());
        let title = Extract::NthText(Css::parse("span").unwrap(), 1);
        let meta = Extract::Attr(Css::parse("meta").unwrap(), "content");

        assert_eq!(link.apply(cell).as_deref(), Some("/uk/company/1"));
        assert_eq!(name.apply(cell).as_deref(), Some("ТОВ \"Ромашка\""));
        assert_eq!(title.apply(cell).as_deref(), Some("директор"));
        assert_eq!(meta.apply(cell).as_deref(), Some("1965-10-26"));
        assert_eq!(
            Extract::CellText.apply(cell).as_deref(),
            Some("ТОВ \"Ромашка\", директор")
        );
    }

    #[test]
    fn test_extract_missing_target_is_none() {
        let html = cell_html();
        let cell = html.root_element();

        assert_eq!(Extract::Text(Css::parse("time").unwrap()).apply(cell), None);
        assert_eq!(
            Extract::NthText(Css::parse("span").unwrap(), 5).apply(cell),
            None
        );
        assert_eq!(
            Extract::Attr(Css::parse("a").unwrap(), "title").apply(cell),
            None
        );
    }

    #[test]
    fn test_require_names_section_and_selector() {
        let html = cell_html();
        let err = Css::parse(".missing")
            .unwrap()
            .require(html.root_element(), "top")
            .unwrap_err();

        match err {
            ScraperError::StructureMismatch { section, element } => {
                assert_eq!(section, "top");
                assert_eq!(element, ".missing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
