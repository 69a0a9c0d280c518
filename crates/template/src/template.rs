use crate::error::TemplateError;
use crate::values::Substitutions;
use handlebars::{
    Context, Handlebars, Helper, HelperResult, JsonRender, Output, RenderContext, html_escape,
};
use std::fmt;

/// Name of the helper that prints a fallback for an empty value.
pub const DEFAULT_HELPER: &str = "default";

/// `{{default COMPANY_ADDRESS "123 Example Street"}}` prints the value, or the
/// fallback when the value is blank.
fn default_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h.param(0).map(|p| p.value().render()).unwrap_or_default();
    let text = if value.trim().is_empty() {
        h.param(1).map(|p| p.value().render()).unwrap_or_default()
    } else {
        value
    };
    out.write(&html_escape(&text))?;
    Ok(())
}

/// A compiled page template.
///
/// Templates are Handlebars in strict mode: `{{TOKEN}}` prints an escaped
/// value, `{{{TOKEN}}}` prints markup as is, and a token with no bound value
/// is a render error. Values are never re-scanned for tokens.
pub struct Template {
    name: String,
    registry: Handlebars<'static>,
}

impl Template {
    pub fn parse(name: impl Into<String>, source: &str) -> Result<Self, TemplateError> {
        let name = name.into();
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_helper(DEFAULT_HELPER, Box::new(default_helper));
        registry
            .register_template_string(&name, source)
            .map_err(|source| TemplateError::Syntax {
                name: name.clone(),
                source: Box::new(source),
            })?;
        Ok(Self { name, registry })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self, values: &Substitutions) -> Result<String, TemplateError> {
        self.registry
            .render(&self.name, values)
            .map_err(|source| TemplateError::Render {
                name: self.name.clone(),
                source: Box::new(source),
            })
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template").field("name", &self.name).finish()
    }
}
