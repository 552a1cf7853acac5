//! Generator orchestration.
//!
//! One invocation runs registry lookup, name resolution, option parsing,
//! rendering of every file in memory and only then the writes, in blueprint
//! order. Anything that fails before the first write leaves the tree
//! untouched; a failure while writing returns the partial manifest.

use std::path::{Path, PathBuf};

use sprig_blueprint::{Blueprint, BlueprintRegistry, RawFlags, options};
use sprig_core::{
    CaseVariants, Error, Manifest, Materializer, Outcome, OverwritePolicy, ProjectSection,
    RenderedFile, ResolvedName, Result, naming,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{Renderer, ResolutionContext};

/// One generator invocation.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Blueprint keyword (e.g., "component")
    pub keyword: String,
    /// Possibly nested name (e.g., "My/SubFolder/Test")
    pub identifier: String,
    /// Place output under `<name>/index`
    pub folder: bool,
    /// Blueprint-specific `--name=value` flags
    pub flags: RawFlags,
    pub policy: OverwritePolicy,
}

impl Request {
    pub fn new(keyword: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    pub fn folder(mut self, folder: bool) -> Self {
        self.folder = folder;
        self
    }

    pub fn flag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.flags.insert(name.into(), value.into());
        self
    }

    pub fn policy(mut self, policy: OverwritePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// A failed invocation, with whatever was written before the failure.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct GenerateError {
    pub error: Box<Error>,
    pub manifest: Manifest,
}

impl From<Box<Error>> for GenerateError {
    /// A failure before any file was written.
    fn from(error: Box<Error>) -> Self {
        Self {
            error,
            manifest: Manifest::new(),
        }
    }
}

/// Everything one invocation would write, rendered but not yet on disk.
#[derive(Debug, Clone)]
pub struct Plan {
    pub keyword: &'static str,
    pub context: ResolutionContext,
    pub files: Vec<RenderedFile>,
}

/// Runs generator invocations against a registry.
pub struct Generator<'r> {
    registry: &'r BlueprintRegistry,
    renderer: Renderer,
    project: ProjectSection,
}

impl<'r> Generator<'r> {
    /// Compile the registry's templates and bind the project layout.
    pub fn new(registry: &'r BlueprintRegistry, project: ProjectSection) -> Result<Self> {
        project.validate()?;
        Ok(Self {
            registry,
            renderer: Renderer::from_registry(registry)?,
            project,
        })
    }

    pub fn registry(&self) -> &BlueprintRegistry {
        self.registry
    }

    /// Resolve and render every file of a request without touching the filesystem.
    pub fn plan(&self, request: &Request) -> Result<Plan> {
        let blueprint = self.registry.get(&request.keyword)?;

        if request.folder && !blueprint.folder_mode {
            return Err(Error::unknown_option(
                "folder",
                blueprint.keyword,
                &blueprint.option_names(),
            ));
        }

        let name = resolve_name(blueprint, &request.identifier, request.folder)?;
        let options = options::parse(blueprint, &request.flags)?;
        let context = ResolutionContext::new(name, options, &self.project.extension);
        debug!(
            keyword = blueprint.keyword,
            name = %context.name().case.pascal,
            dir = %context.name().dir(),
            "resolved"
        );

        let mut files = Vec::new();
        for spec in blueprint.templates {
            if !spec.is_enabled(context.options()) {
                continue;
            }
            let template_id = spec.template_id(context.options());
            let content = self.renderer.render(template_id, &context)?;
            let relative = self.renderer.render_inline(spec.output, &context)?;
            files.push(RenderedFile::new(
                self.project.app_dir.join(spec.root),
                PathBuf::from(relative),
                content,
            ));
        }

        Ok(Plan {
            keyword: blueprint.keyword,
            context,
            files,
        })
    }

    /// Rendered files of a request, in manifest order, without writing them.
    pub fn preview(&self, request: &Request) -> Result<Vec<RenderedFile>> {
        self.plan(request).map(|plan| plan.files)
    }

    /// Run a request and write its files below `base`.
    pub fn generate(
        &self,
        base: &Path,
        request: &Request,
    ) -> std::result::Result<Manifest, GenerateError> {
        let plan = self.plan(request)?;
        let materializer = Materializer::new(base, request.policy);

        for file in &plan.files {
            materializer.preflight(file)?;
        }

        info!(
            keyword = plan.keyword,
            identifier = %request.identifier,
            files = plan.files.len(),
            "generating"
        );

        let mut manifest = Manifest::new();
        for file in &plan.files {
            match materializer.materialize(file) {
                Ok(outcome) => manifest.record(file.path(), outcome),
                Err(error) => {
                    warn!(
                        path = %file.path().display(),
                        kind = error.kind(),
                        %error,
                        "write failed"
                    );
                    manifest.record(file.path(), Outcome::Failed);
                    return Err(GenerateError { error, manifest });
                }
            }
        }

        Ok(manifest)
    }
}

/// Resolve the identifier, then apply the blueprint's suffix stripping.
fn resolve_name(blueprint: &Blueprint, identifier: &str, folder: bool) -> Result<ResolvedName> {
    let name = naming::resolve(identifier, folder)?;
    let base = blueprint.base_name(&name.base_name).to_string();
    if base == name.base_name {
        return Ok(name);
    }
    debug!(from = %name.base_name, to = %base, "stripped suffix");
    Ok(ResolvedName {
        case: CaseVariants::new(&base),
        base_name: base,
        ..name
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(registry: &BlueprintRegistry) -> Generator<'_> {
        Generator::new(registry, ProjectSection::default()).unwrap()
    }

    fn paths(plan: &Plan) -> Vec<PathBuf> {
        plan.files.iter().map(|f| f.path()).collect()
    }

    #[test]
    fn test_plan_component() {
        let registry = BlueprintRegistry::builtin();
        let plan = generator(&registry)
            .plan(&Request::new("component", "Simple"))
            .unwrap();

        assert_eq!(
            paths(&plan),
            vec![
                PathBuf::from("App/Components/Simple.js"),
                PathBuf::from("App/Components/Styles/SimpleStyle.js"),
            ]
        );
    }

    #[test]
    fn test_plan_screen_strips_suffix() {
        let registry = BlueprintRegistry::builtin();
        let plan = generator(&registry)
            .plan(&Request::new("screen", "LoginScreen"))
            .unwrap();

        assert_eq!(
            paths(&plan),
            vec![
                PathBuf::from("App/Containers/LoginScreen.js"),
                PathBuf::from("App/Containers/Styles/LoginScreenStyle.js"),
            ]
        );
        assert!(plan.files[0].content.contains("class LoginScreen extends"));
    }

    #[test]
    fn test_plan_uses_configured_layout() {
        let registry = BlueprintRegistry::builtin();
        let project = ProjectSection {
            app_dir: PathBuf::from("src"),
            extension: "tsx".to_string(),
        };
        let plan = Generator::new(&registry, project)
            .unwrap()
            .plan(&Request::new("redux", "Cart"))
            .unwrap();

        assert_eq!(paths(&plan), vec![PathBuf::from("src/Redux/CartRedux.tsx")]);
    }

    #[test]
    fn test_layout_outside_project_is_rejected() {
        let registry = BlueprintRegistry::builtin();
        let escaping = ProjectSection {
            app_dir: PathBuf::from("../escaped"),
            ..ProjectSection::default()
        };
        let nested_ext = ProjectSection {
            extension: "js/x".to_string(),
            ..ProjectSection::default()
        };

        for project in [escaping, nested_ext] {
            let err = Generator::new(&registry, project).err().unwrap();
            assert!(matches!(*err, Error::InvalidConfig { .. }));
        }
    }

    #[test]
    fn test_plan_redux_with_tests() {
        let registry = BlueprintRegistry::builtin();
        let plan = generator(&registry)
            .plan(&Request::new("redux", "Shop/Cart").flag("tests", "true"))
            .unwrap();

        assert_eq!(
            paths(&plan),
            vec![
                PathBuf::from("App/Redux/Shop/CartRedux.js"),
                PathBuf::from("App/Tests/Redux/Shop/CartReduxTest.js"),
            ]
        );
        assert!(plan.files[1].content.contains("from '../../../Redux/Shop/CartRedux'"));
    }

    #[test]
    fn test_folder_rejected_without_folder_mode() {
        let registry = BlueprintRegistry::builtin();
        let err = generator(&registry)
            .plan(&Request::new("saga", "Test").folder(true))
            .unwrap_err();

        assert!(matches!(*err, Error::UnknownOption { ref option, .. } if option == "folder"));
    }

    #[test]
    fn test_unknown_generator() {
        let registry = BlueprintRegistry::builtin();
        let err = generator(&registry)
            .plan(&Request::new("widget", "Test"))
            .unwrap_err();

        assert!(matches!(*err, Error::UnknownGenerator { .. }));
    }

    #[test]
    fn test_blueprint_template_drift_is_reported() {
        let mut registry = BlueprintRegistry::new();
        registry.register(Blueprint {
            keyword: "widget",
            description: "",
            templates: &[sprig_blueprint::TemplateSpec {
                root: "Widgets",
                output: "{{dir}}{{stem}}.{{ext}}",
                template: sprig_blueprint::TemplateSelect::Fixed("widget"),
                when: None,
            }],
            options: &[],
            constraints: &[],
            folder_mode: false,
            strip_suffix: None,
        });
        registry.register_template("widget", "export const {{name}} = {{size}}\n");

        let err = generator(&registry)
            .plan(&Request::new("widget", "Test"))
            .unwrap_err();

        assert!(matches!(*err, Error::TemplateVariableMissing { ref variable, .. } if variable == "size"));
    }
}
