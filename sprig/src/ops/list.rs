//! List operation - describe the available generators.

use sprig_blueprint::BlueprintRegistry;
use sprig_core::ProjectConfig;

use crate::reports::{GeneratorInfo, ListReport, OptionInfo};

/// Describe every registered blueprint as it applies to this project.
///
/// Roots are shown below the configured app directory, and option defaults
/// reflect `[generators.<keyword>]` overrides.
pub fn list(registry: &BlueprintRegistry, config: &ProjectConfig) -> ListReport {
    let generators = registry
        .blueprints()
        .map(|blueprint| {
            let configured = config.generator_defaults(blueprint.keyword);
            let options = blueprint
                .options
                .iter()
                .map(|spec| OptionInfo {
                    name: spec.name.to_string(),
                    description: spec.description.to_string(),
                    allowed: spec.kind.allowed().iter().map(|v| v.to_string()).collect(),
                    default: configured
                        .get(spec.name)
                        .cloned()
                        .unwrap_or_else(|| spec.kind.default_display().to_string()),
                })
                .collect();

            GeneratorInfo {
                keyword: blueprint.keyword.to_string(),
                description: blueprint.description.to_string(),
                roots: blueprint
                    .roots()
                    .iter()
                    .map(|root| config.project.app_dir.join(root).display().to_string())
                    .collect(),
                folder_mode: blueprint.folder_mode,
                options,
            }
        })
        .collect();

    ListReport { generators }
}
