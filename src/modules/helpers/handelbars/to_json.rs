use crate::modules::helpers::handelbars::check_params::check_param_count;
use crate::ChartData;
use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
};

/// # chart data to json helper
/// a formatter to convert chart data to json for use in javascript
///
/// ### usage
/// ```handlebars
/// {{{toJson chartData}}}
/// ```
#[derive(Clone, Copy)]
pub struct ToJson;

impl HelperDef for ToJson {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;
        let json_param = match helper.param(0) {
            Some(param) => param,
            None => return Ok(()),
        };

        let obj: ChartData = serde_json::from_value(json_param.value().clone())
            .map_err(|error| RenderError::new(format!("toJson expects chart data: {}", error)))?;
        let json = serde_json::to_string(&obj)
            .map_err(|error| RenderError::new(error.to_string()))?;

        out.write(&json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChartDataDataset;
    use serde_json::json;

    #[test]
    fn writes_chart_data_as_json() {
        let mut hbs = Handlebars::new();
        hbs.register_helper("toJson", Box::new(ToJson));

        let chart = ChartData {
            labels: vec!["Bahrain".to_string()],
            datasets: vec![ChartDataDataset {
                label: "Speed".to_string(),
                data: vec![214.764],
            }],
        };

        let out = hbs
            .render_template("{{{toJson chart}}}", &json!({ "chart": chart }))
            .unwrap();
        let parsed: ChartData = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, chart);
    }
}
