use super::LocaleRules;
use crate::domain::{Blocks, Body, Header, Locale, Names, ProfileRecord, Scoring, TopSection};
use crate::error::{Result, ScraperError};
use crate::utils::element_text;
use scraper::{ElementRef, Html};
use tracing::debug;

/// Turns a person page into a [`ProfileRecord`] using one locale's rule set.
#[derive(Debug, Clone)]
pub struct ProfileExtractor {
    rules: LocaleRules,
}

impl ProfileExtractor {
    pub fn new(rules: LocaleRules) -> Self {
        Self { rules }
    }

    pub fn for_locale(locale: Locale) -> Result<Self> {
        Ok(Self::new(LocaleRules::for_locale(locale)?))
    }

    pub fn locale(&self) -> Locale {
        self.rules.locale
    }

    pub fn extract(&self, html: &str) -> Result<ProfileRecord> {
        let document = Html::parse_document(html);
        let root = document.root_element();

        let record = ProfileRecord {
            header: self.extract_header(root)?,
            body: self.extract_body(root)?,
        };

        debug!(
            profile_name = %record.body.top.profile_name,
            factors = record.body.scoring.scoring_factors.len(),
            names = record.body.names.alternative_names.len(),
            "Extracted profile"
        );

        Ok(record)
    }

    fn extract_header(&self, root: ElementRef) -> Result<Header> {
        let s = &self.rules.selectors;
        let header = s.header.require(root, "header")?;
        let time = s.header_time.require(header, "header")?;

        Ok(Header {
            last_modified: element_text(time),
        })
    }

    fn extract_body(&self, root: ElementRef) -> Result<Body> {
        let body = self.rules.selectors.body.require(root, "body")?;

        Ok(Body {
            top: self.extract_top(body)?,
            scoring: self.extract_scoring(body)?,
            blocks: self.extract_blocks(body),
            names: self.extract_names(body)?,
        })
    }

    fn extract_top(&self, body: ElementRef) -> Result<TopSection> {
        let s = &self.rules.selectors;
        let top = s.top.require(body, "top")?;

        let image = s.profile_image.require(top, "top")?;
        let profile_image_src = image
            .value()
            .attr("src")
            .map(|src| src.trim().to_string())
            .ok_or_else(|| {
                ScraperError::missing("top", format!("{}[src]", s.profile_image.as_str()))
            })?;
        let profile_name = element_text(s.profile_name.require(top, "top")?);

        let mut section = TopSection {
            profile_image_src,
            profile_name,
            ..Default::default()
        };

        let table = s.table.require(top, "top")?;
        for row in s.row.all(table) {
            let cells = s.cell.all(row);
            let Some(label_cell) = cells.first() else {
                continue;
            };

            let label = element_text(*label_cell);
            let Some(fields) = self.rules.row(&label) else {
                debug!(%label, "Skipping unknown profile row");
                continue;
            };

            let value_cell = cells.get(1).copied().ok_or_else(|| {
                ScraperError::missing("top", format!("value cell of {label:?} row"))
            })?;

            for rule in fields {
                let value = rule.extract.apply(value_cell).ok_or_else(|| {
                    ScraperError::missing(
                        "top",
                        format!("{} ({})", rule.extract.describe(), rule.field.key()),
                    )
                })?;
                section.set(rule.field, value);
            }
        }

        Ok(section)
    }

    fn extract_scoring(&self, body: ElementRef) -> Result<Scoring> {
        let s = &self.rules.selectors;
        let scoring = s.scoring.require(body, "scoring")?;

        let scoring_score = element_text(s.score.require(scoring, "scoring")?);
        let list = s.scoring_list.require(scoring, "scoring")?;
        let scoring_factors = s
            .scoring_item
            .all(list)
            .into_iter()
            .map(|item| element_text(s.scoring_item_text.first(item).unwrap_or(item)))
            .collect();

        Ok(Scoring {
            scoring_score,
            scoring_factors,
        })
    }

    // TODO: extract the left and right block columns once their markup is captured in a fixture.
    fn extract_blocks(&self, _body: ElementRef) -> Blocks {
        Blocks::default()
    }

    fn extract_names(&self, body: ElementRef) -> Result<Names> {
        let s = &self.rules.selectors;
        let names = s.names.require(body, "names")?;
        let grid = s.names_grid.require(names, "names")?;

        Ok(Names {
            alternative_names: s.name.all(grid).into_iter().map(element_text).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../../tests/fixtures/person_uk.html");

    fn extractor() -> ProfileExtractor {
        ProfileExtractor::for_locale(Locale::Uk).unwrap()
    }

    fn page(top_rows: &str, factors: &str, names: &str) -> String {
        format!(
            r#"<html><body>
            <div class="profile-page__header"><div class="date">Оновлено <time>01.02.2024</time></div></div>
            <div class="profile-page__body">
              <div class="profile-page__top">
                <div class="profile-image"><img src="/static/p.jpg"></div>
                <div class="profile-main-info"><h1>Тестовий Тест</h1></div>
                <table>{top_rows}</table>
              </div>
              <div class="scoring">
                <div class="scoring__header"><div class="progressbar"><span>42</span></div></div>
                <ul class="scoring__list">{factors}</ul>
              </div>
              <div class="names-section"><div class="names-grid">{names}</div></div>
            </div>
            </body></html>"#
        )
    }

    #[test]
    fn test_extract_fixture_required_fields() {
        let record = extractor().extract(FIXTURE).unwrap();

        assert_eq!(record.header.last_modified, "15.03.2024");
        assert_eq!(record.body.top.profile_name, "Іванов Іван Іванович");
        assert_eq!(
            record.body.top.profile_image_src,
            "https://pep.org.ua/static/images/person/1.jpg"
        );
    }

    #[test]
    fn test_extract_fixture_table_rows() {
        let top = extractor().extract(FIXTURE).unwrap().body.top;

        assert_eq!(top.category.as_deref(), Some("Politician"));
        assert_eq!(
            top.last_position_job_link.as_deref(),
            Some("/uk/company/12345")
        );
        assert_eq!(
            top.last_position_job_name.as_deref(),
            Some("Верховна Рада України")
        );
        assert_eq!(
            top.last_position_job_title.as_deref(),
            Some("Народний депутат України")
        );
        assert_eq!(top.birth_date_time.as_deref(), Some("26 жовтня 1965"));
        assert_eq!(top.birth_date_meta_content.as_deref(), Some("1965-10-26"));
        assert_eq!(top.dismissal_date.as_deref(), Some("29 серпня 2019"));
    }

    #[test]
    fn test_extract_fixture_lists_keep_order() {
        let body = extractor().extract(FIXTURE).unwrap().body;

        assert_eq!(body.scoring.scoring_score, "87");
        assert_eq!(body.scoring.scoring_factors, vec!["Factor A", "Factor B"]);
        assert_eq!(body.names.alternative_names, vec!["Name One", "Name Two"]);
        assert_eq!(body.blocks, Blocks::default());
    }

    #[test]
    fn test_missing_row_leaves_field_absent() {
        let html = page(
            "<tr><td>Дата народження</td><td><time>1 січня 1970</time><meta content=\"1970-01-01\"></td></tr>",
            "<li><p>Factor A</p></li>",
            "<p>Name One</p>",
        );
        let record = extractor().extract(&html).unwrap();

        assert_eq!(record.body.top.category, None);
        assert_eq!(record.body.top.birth_date_time.as_deref(), Some("1 січня 1970"));

        let value = serde_json::to_value(&record).unwrap();
        assert!(value["body"]["top"].get("category").is_none());
        assert_eq!(value["body"]["top"]["birth_date__meta_content"], "1970-01-01");
    }

    #[test]
    fn test_unknown_and_empty_rows_are_ignored() {
        let html = page(
            "<tr><th>Заголовок</th></tr><tr><td>Громадянство</td><td>Україна</td></tr><tr><td>Категорія</td><td>Politician</td></tr>",
            "",
            "",
        );
        let top = extractor().extract(&html).unwrap().body.top;

        assert_eq!(top.category.as_deref(), Some("Politician"));
        assert_eq!(top.dismissal_date, None);
    }

    #[test]
    fn test_factor_without_paragraph_uses_item_text() {
        let html = page("", "<li><p>Factor A</p></li><li> Factor B </li>", "");
        let scoring = extractor().extract(&html).unwrap().body.scoring;

        assert_eq!(scoring.scoring_score, "42");
        assert_eq!(scoring.scoring_factors, vec!["Factor A", "Factor B"]);
    }

    #[test]
    fn test_empty_lists_are_not_errors() {
        let body = extractor().extract(&page("", "", "")).unwrap().body;

        assert!(body.scoring.scoring_factors.is_empty());
        assert!(body.names.alternative_names.is_empty());
    }

    #[test]
    fn test_missing_top_container_is_structure_mismatch() {
        let html = FIXTURE.replace("profile-page__top", "profile-page__gone");
        let err = extractor().extract(&html).unwrap_err();

        assert!(err.is_structure_mismatch());
        assert!(err.to_string().contains(".profile-page__top"));
    }

    #[test]
    fn test_missing_header_is_structure_mismatch() {
        let html = FIXTURE.replace("profile-page__header", "profile-page__masthead");
        let err = extractor().extract(&html).unwrap_err();

        match err {
            ScraperError::StructureMismatch { section, .. } => assert_eq!(section, "header"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_matched_row_without_nested_element_is_structure_mismatch() {
        let html = page(
            "<tr><td>Дата звільнення</td><td>невідомо</td></tr>",
            "",
            "",
        );
        let err = extractor().extract(&html).unwrap_err();

        assert!(err.is_structure_mismatch());
        assert!(err.to_string().contains("dismissal_date"));
    }

    #[test]
    fn test_matched_row_without_value_cell_is_structure_mismatch() {
        let html = page("<tr><td>Категорія</td></tr>", "", "");
        let err = extractor().extract(&html).unwrap_err();

        assert!(err.is_structure_mismatch());
    }

    #[test]
    fn test_missing_names_grid_is_structure_mismatch() {
        let html = FIXTURE.replace("names-grid", "names-list");
        let err = extractor().extract(&html).unwrap_err();

        match err {
            ScraperError::StructureMismatch { section, element } => {
                assert_eq!(section, "names");
                assert_eq!(element, ".names-grid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_image_without_src_is_structure_mismatch() {
        let html = FIXTURE.replace(
            r#"src="https://pep.org.ua/static/images/person/1.jpg""#,
            r#"data-src="x""#,
        );
        let err = extractor().extract(&html).unwrap_err();

        assert!(err.to_string().contains(".profile-image img[src]"));
    }

    #[test]
    fn test_extract_is_idempotent() {
        let extractor = extractor();
        let first = extractor.extract(FIXTURE).unwrap();
        let second = extractor.extract(FIXTURE).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_blank_document_fails_on_header() {
        let err = extractor().extract("").unwrap_err();
        assert!(err.is_structure_mismatch());
    }
}
