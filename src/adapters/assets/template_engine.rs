use minijinja::{AutoEscape, Environment, Value};

use crate::domain::AppError;

use super::asset_collect::AssetSourceFile;

/// `gha_expr("github.ref")` renders `${{ github.ref }}` so workflow
/// templates can emit GitHub expressions without fighting Jinja syntax.
fn gha_expr(expr: &str) -> String {
    format!("${{{{ {} }}}}", expr)
}

pub fn build_template_environment(
    sources: &[AssetSourceFile],
) -> Result<Environment<'_>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(minijinja::UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    env.add_function("gha_expr", |expr: &str| -> String { gha_expr(expr) });

    for source in sources.iter().filter(|source| source.is_template()) {
        env.add_template(source.template_name(), source.content.as_str()).map_err(|e| {
            AppError::InternalError(format!(
                "Failed to register template '{}': {}",
                source.template_name(),
                e
            ))
        })?;
    }

    Ok(env)
}

pub fn render_template_by_name(
    env: &Environment<'_>,
    template_name: &str,
    ctx: &Value,
) -> Result<String, AppError> {
    let template = env.get_template(template_name).map_err(|e| {
        AppError::InternalError(format!("Failed to load template '{}': {}", template_name, e))
    })?;

    template.render(ctx).map_err(|e| {
        AppError::InternalError(format!("Failed to render template '{}': {}", template_name, e))
    })
}

/// Render every source: templates through the environment, the rest verbatim.
pub fn render_all(
    sources: &[AssetSourceFile],
    ctx: &Value,
) -> Result<Vec<RenderedAsset>, AppError> {
    let env = build_template_environment(sources)?;
    sources
        .iter()
        .map(|source| {
            let content = if source.is_template() {
                render_template_by_name(&env, source.template_name(), ctx)?
            } else {
                source.content.clone()
            };
            let path = source.output_path();
            Ok(RenderedAsset { executable: path.ends_with(".sh"), path, content })
        })
        .collect()
}

/// File ready to be written, with a `/`-separated path relative to its target root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAsset {
    pub path: String,
    pub content: String,
    pub executable: bool,
}
