use crate::constants::SEL_YEAR;
use crate::dom;
use web_sys as web;

/// Write the current year into the footer stamp, if the page has one.
pub fn stamp_year(document: &web::Document) -> anyhow::Result<()> {
    if let Some(el) = dom::query_one(document, SEL_YEAR) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
    Ok(())
}
