//! Template rendering.
//!
//! Rendering is pure: the same template and context always produce the same
//! bytes. Templates run in strict mode so a reference to a variable the
//! context does not provide fails instead of rendering as an empty string.

use handlebars::{Handlebars, RenderError, RenderErrorReason};
use sprig_blueprint::BlueprintRegistry;
use sprig_core::{Error, Result};
use tracing::debug;

use crate::ResolutionContext;

/// Compiled templates for one registry.
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    /// Compile the given `(id, source)` templates.
    pub fn new<'s>(templates: impl IntoIterator<Item = (&'s str, &'s str)>) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        for (id, source) in templates {
            handlebars
                .register_template_string(id, source)
                .map_err(|e| {
                    Box::new(Error::Template {
                        template: id.to_string(),
                        message: e.to_string(),
                    })
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Compile every template source of a registry.
    pub fn from_registry(registry: &BlueprintRegistry) -> Result<Self> {
        Self::new(registry.templates())
    }

    /// Whether a template id is known.
    pub fn has_template(&self, id: &str) -> bool {
        self.handlebars.has_template(id)
    }

    /// Render a registered template.
    pub fn render(&self, template_id: &str, ctx: &ResolutionContext) -> Result<String> {
        if !self.has_template(template_id) {
            return Err(Box::new(Error::Template {
                template: template_id.to_string(),
                message: "no template with this id is registered".to_string(),
            }));
        }
        debug!(template = template_id, "rendering");
        self.handlebars
            .render(template_id, &ctx.template_data())
            .map_err(|e| render_error(template_id, e))
    }

    /// Render an inline template, such as a blueprint's output path.
    pub fn render_inline(&self, source: &str, ctx: &ResolutionContext) -> Result<String> {
        self.handlebars
            .render_template(source, &ctx.template_data())
            .map_err(|e| render_error(source, e))
    }
}

fn render_error(template: &str, err: RenderError) -> Box<Error> {
    match err.reason() {
        RenderErrorReason::MissingVariable(variable) => Box::new(Error::TemplateVariableMissing {
            template: template.to_string(),
            variable: variable.clone().unwrap_or_else(|| "?".to_string()),
        }),
        _ => Box::new(Error::Template {
            template: template.to_string(),
            message: err.to_string(),
        }),
    }
}
