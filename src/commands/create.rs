use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::cli::CreateArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::model::ClusterSpec;
use crate::output::json;
use crate::profile;
use crate::token::{BootstrapToken, StaticTokenSource};

#[derive(Debug, Serialize)]
pub struct WrittenProfile {
    pub name: String,
    pub template: String,
    pub path: PathBuf,
}

pub fn run(ctx: &AppContext, args: CreateArgs) -> AppResult<()> {
    let spec = build(ctx, &args)?;
    info!(
        cluster = %spec.name,
        groups = spec.machine_groups.len(),
        "built cluster profile"
    );

    let Some(path) = args.output.clone() else {
        return ctx.output.cluster(&spec);
    };

    let result = write_profile(ctx, &args, spec, path)?;
    let text = format!("{}: profile written to {}", result.name, result.path.display());
    ctx.output.emit(&text, &result)
}

fn template_key(ctx: &AppContext, args: &CreateArgs) -> AppResult<&'static str> {
    let requested = ctx.settings.template(args.template.as_deref());
    Ok(profile::find(requested)?.key)
}

fn build(ctx: &AppContext, args: &CreateArgs) -> AppResult<ClusterSpec> {
    let template = template_key(ctx, args)?;

    let mut spec = match args.token.as_deref() {
        Some(raw) => {
            let tokens = StaticTokenSource::new(BootstrapToken::parse(raw.trim())?);
            profile::build_named_profile(template, &args.name, &tokens)?
        }
        None => profile::build_named_profile(template, &args.name, ctx.tokens.as_ref())?,
    };

    ctx.settings.apply(&mut spec);
    Ok(spec)
}

fn write_profile(
    ctx: &AppContext,
    args: &CreateArgs,
    spec: ClusterSpec,
    path: PathBuf,
) -> AppResult<WrittenProfile> {
    json::write(&path, &spec)?;
    Ok(WrittenProfile {
        name: spec.name,
        template: template_key(ctx, args)?.to_string(),
        path,
    })
}
