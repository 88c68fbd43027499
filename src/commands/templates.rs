use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::model::Cloud;
use crate::output::OutputMode;
use crate::profile;

#[derive(Debug, Serialize)]
pub struct TemplateView {
    pub key: &'static str,
    pub description: &'static str,
    pub cloud: Cloud,
    pub location: &'static str,
    pub default: bool,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let default_key = ctx.settings.template(None);
    let templates = views(default_key);

    if ctx.output.mode() == OutputMode::Text {
        for template in &templates {
            let marker = if template.default { " (default)" } else { "" };
            println!("{}{marker}", template.key);
            println!("   {}", template.description);
        }
        return Ok(());
    }

    let text = format!("{} templates", templates.len());
    ctx.output.emit(&text, &templates)
}

fn views(default_key: &str) -> Vec<TemplateView> {
    profile::registry()
        .iter()
        .map(|template| TemplateView {
            key: template.key,
            description: template.description,
            cloud: template.cloud,
            location: template.location,
            default: template.key == default_key,
        })
        .collect()
}
