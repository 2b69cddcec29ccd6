use crate::modules::helpers::handelbars::check_params::check_param_count;
use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
};

/// # finishing position badge helper
/// writes the css classes of the badge shown next to a result
///
/// ### usage
/// ```handlebars
/// <span class="badge {{positionBadge result.position}}">P{{result.position}}</span>
/// ```
///
/// ### output
/// ```text
/// victory-badge
/// ```
///
#[derive(Clone, Copy)]
pub struct PositionBadge;

impl PositionBadge {
    pub fn classes(position: u64) -> &'static str {
        match position {
            1 => "victory-badge",
            2 => "badge-silver",
            3 => "badge-bronze",
            _ => "badge-plain",
        }
    }
}

impl HelperDef for PositionBadge {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;
        let position = helper
            .param(0)
            .and_then(|param| param.value().as_u64())
            .ok_or_else(|| RenderError::new("positionBadge expects a position"))?;

        out.write(PositionBadge::classes(position))?;

        Ok(())
    }
}
