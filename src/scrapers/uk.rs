use super::{Css, Extract, FieldRule, LocaleRules, Selectors};
use crate::domain::{Locale, TopField};
use crate::error::Result;

pub const CATEGORY: &str = "Категорія";
pub const LAST_POSITION: &str = "Остання посада";
pub const BIRTH_DATE: &str = "Дата народження";
pub const DISMISSAL_DATE: &str = "Дата звільнення";

pub(super) fn rules() -> Result<LocaleRules> {
    let rules = LocaleRules::new(Locale::Uk, Selectors::person_page()?)
        .with_row(
            CATEGORY,
            vec![FieldRule::new(TopField::Category, Extract::CellText)],
        )
        .with_row(
            LAST_POSITION,
            vec![
                FieldRule::new(
                    TopField::LastPositionJobLink,
                    Extract::Attr(Css::parse("a")?, "href"),
                ),
                FieldRule::new(
                    TopField::LastPositionJobName,
                    Extract::Text(Css::parse("a span")?),
                ),
                // The first span sits inside the link, the second holds the title.
                FieldRule::new(
                    TopField::LastPositionJobTitle,
                    Extract::NthText(Css::parse("span")?, 1),
                ),
            ],
        )
        .with_row(
            BIRTH_DATE,
            vec![
                FieldRule::new(TopField::BirthDateTime, Extract::Text(Css::parse("time")?)),
                FieldRule::new(
                    TopField::BirthDateMetaContent,
                    Extract::Attr(Css::parse("meta")?, "content"),
                ),
            ],
        )
        .with_row(
            DISMISSAL_DATE,
            vec![FieldRule::new(
                TopField::DismissalDate,
                Extract::Text(Css::parse("time")?),
            )],
        );

    Ok(rules)
}
