//! strftime-style date expansion for collection templates.
//!
//! Local collection templates embed the timestamp of the file they point to,
//! e.g. `.../Y%Y/M%m/D%d/GEOS-CF.v01.rpl.met_tavg_1hr_g1440x721_x1.%Y%m%d_%H30z.nc4`.
//! Remote OPeNDAP templates usually contain no directives and pass through
//! unchanged.

use std::fmt::Write;

use chrono::NaiveDateTime;
use chrono::format::{Item, StrftimeItems};

use crate::domain::AppError;

/// Render every date directive in `template` for the given timestamp.
pub fn expand_date_directives(template: &str, at: &NaiveDateTime) -> Result<String, AppError> {
    let items = parse_items(template)?;

    let mut rendered = String::with_capacity(template.len() + 8);
    write!(rendered, "{}", at.format_with_items(items.into_iter())).map_err(|_| {
        AppError::TemplateFormat {
            template: template.to_string(),
            details: "directive requires a time zone or offset".into(),
        }
    })?;
    Ok(rendered)
}

/// Whether `template` contains at least one recognized date directive.
///
/// Stray `%` sequences (e.g. percent-encoded URLs) do not count.
pub fn has_date_directives(template: &str) -> bool {
    StrftimeItems::new(template).any(|item| {
        !matches!(
            item,
            Item::Literal(_)
                | Item::OwnedLiteral(_)
                | Item::Space(_)
                | Item::OwnedSpace(_)
                | Item::Error
        )
    })
}

fn parse_items(template: &str) -> Result<Vec<Item<'_>>, AppError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(template).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(AppError::TemplateFormat {
            template: template.to_string(),
            details: "unrecognized '%' directive (use '%%' for a literal percent sign)".into(),
        });
    }
    Ok(items)
}
