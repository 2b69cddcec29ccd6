use chrono::NaiveDate;
use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
};

use crate::modules::helpers::handelbars::check_params::check_param_count;

/// # date formatting helper
/// formats a `YYYY-MM-DD` date the way race cards show it
///
/// ### usage
/// ```handlebars
/// {{formatDate race.date}}
/// ```
///
/// ### output
/// ```text
/// March 2, 2024
/// ```
#[derive(Clone, Copy)]
pub struct FormatDateHelper;

impl HelperDef for FormatDateHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper, _: &Handlebars, _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output) -> HelperResult {
        check_param_count(h, 1)?;

        let date_param = match h.param(0) {
            Some(param) => param,
            None => return Ok(()),
        };

        let date: NaiveDate = serde_json::from_value(date_param.value().clone())
            .map_err(|error| RenderError::new(format!("formatDate expects a YYYY-MM-DD date: {}", error)))?;
        out.write(&format!("{}", date.format("%B %-d, %Y")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> Handlebars<'static> {
        let mut hbs = Handlebars::new();
        hbs.register_helper("formatDate", Box::new(FormatDateHelper));
        hbs
    }

    #[test]
    fn formats_race_dates() {
        let out = registry()
            .render_template("{{formatDate date}}", &json!({ "date": "2024-03-09" }))
            .unwrap();
        assert_eq!(out, "March 9, 2024");
    }

    #[test]
    fn rejects_other_values() {
        let hbs = registry();
        assert!(hbs.render_template("{{formatDate date}}", &json!({ "date": "9 March" })).is_err());
        assert!(hbs.render_template("{{formatDate}}", &json!({})).is_err());
    }
}
