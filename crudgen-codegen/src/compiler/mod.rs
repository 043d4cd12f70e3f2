//! Compilation orchestrator.
//!
//! [`Compiler`] drives one workflow through validation, resolution,
//! generation and materialization. Each call is independent: nothing is
//! shared between compilations except the read-only compiler itself, so one
//! compiler can serve concurrent callers.

mod error;
mod project;
mod state;

use std::path::{Path, PathBuf};

use crudgen_ir::ResolvedWorkflow;
use crudgen_manifest::Workflow;
pub use error::CompileError;
pub use project::{CompiledProject, Preview};
pub use state::CompilerState;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    generation::FileRegistry,
    language::{GenerateOptions, LanguageCodegen},
    pipeline::{Pipeline, ValidationReport},
};

/// Default directory that receives per-compilation containers.
pub const DEFAULT_OUTPUT_ROOT: &str = "output";

/// Settings for a [`Compiler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Each compilation writes to a fresh `<output_root>/<uuid>/` container.
    pub output_root: PathBuf,
    pub generate: GenerateOptions,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            generate: GenerateOptions::default(),
        }
    }
}

impl CompileOptions {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            ..Self::default()
        }
    }

    pub fn generate(mut self, generate: GenerateOptions) -> Self {
        self.generate = generate;
        self
    }
}

/// Orchestrates a full compilation for one generator backend.
///
/// # Example
///
/// ```ignore
/// let compiler = Compiler::new(ExpressGenerator::new(), CompileOptions::new("output"));
/// let project = compiler.compile(&workflow)?;
/// println!("wrote {} files to {}", project.files.len(), project.root.display());
/// ```
pub struct Compiler<G> {
    generator: G,
    options: CompileOptions,
    pipeline: Pipeline,
}

/// Tracks the state of one compilation and logs each transition.
struct Tracker {
    state: CompilerState,
}

impl Tracker {
    fn new() -> Self {
        Self {
            state: CompilerState::Idle,
        }
    }

    fn enter(&mut self, next: CompilerState) {
        debug!(from = %self.state, to = %next, "compiler state");
        self.state = next;
    }

    /// Mark the compilation failed and pass the error through.
    fn fail(&mut self, error: CompileError) -> CompileError {
        self.enter(CompilerState::Failed);
        error
    }
}

/// Output of the in-memory stages shared by compile and preview.
struct Generated {
    resolved: ResolvedWorkflow,
    registry: FileRegistry,
    report: ValidationReport,
}

impl<G: LanguageCodegen> Compiler<G> {
    pub fn new(generator: G, options: CompileOptions) -> Self {
        Self {
            generator,
            options,
            pipeline: Pipeline::new(),
        }
    }

    /// Replace the validation/resolution pipeline.
    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Compile a workflow and write the artifacts to disk.
    ///
    /// # Errors
    ///
    /// - [`CompileError::Rejected`] with every validation error when the
    ///   workflow is invalid; nothing is written.
    /// - [`CompileError::Materialize`] when a write fails; the container is
    ///   removed before returning.
    /// - [`CompileError::Internal`] on generator defects.
    pub fn compile(&self, workflow: &Workflow) -> Result<CompiledProject, CompileError> {
        let mut tracker = Tracker::new();
        let Generated {
            resolved,
            registry,
            report,
        } = self.generate(workflow, &mut tracker)?;

        tracker.enter(CompilerState::Materializing);
        let container = self.options.output_root.join(Uuid::new_v4().to_string());
        let root = container.join(resolved.project_dir());

        let files = match materialize(&registry, &root) {
            Ok(files) => files,
            Err(error) => {
                cleanup(&container);
                return Err(tracker.fail(error));
            }
        };

        tracker.enter(CompilerState::Done);
        info!(
            project = %resolved.name,
            files = files.len(),
            root = %root.display(),
            "compiled workflow"
        );

        Ok(CompiledProject {
            resolved,
            root,
            container,
            files,
            report,
        })
    }

    /// Run every stage except materialization.
    ///
    /// # Errors
    ///
    /// Same as [`Compiler::compile`], minus [`CompileError::Materialize`].
    pub fn preview(&self, workflow: &Workflow) -> Result<Preview, CompileError> {
        let mut tracker = Tracker::new();
        let Generated {
            resolved,
            registry,
            report,
        } = self.generate(workflow, &mut tracker)?;
        tracker.enter(CompilerState::Done);

        Ok(Preview {
            resolved,
            files: registry.into_entries(),
            report,
        })
    }

    fn generate(&self, workflow: &Workflow, tracker: &mut Tracker) -> Result<Generated, CompileError> {
        let mut ctx = self
            .pipeline
            .run_observed(workflow, |phase| match phase.name {
                "validate" => tracker.enter(CompilerState::Validating),
                "resolve" => tracker.enter(CompilerState::Resolving),
                other => debug!(phase = other, "running extra phase"),
            })
            .map_err(|e| tracker.fail(CompileError::internal(e)))?;

        let report = ctx.report();
        if !report.is_ok() {
            debug!(errors = report.error_count(), "workflow rejected");
            return Err(tracker.fail(CompileError::Rejected(report)));
        }

        let resolved = ctx
            .take_resolved()
            .map_err(|e| tracker.fail(CompileError::internal(e)))?;

        tracker.enter(CompilerState::Generating);
        let mut registry = FileRegistry::new();
        self.generator
            .generate(&resolved, &self.options.generate, &mut registry)
            .map_err(|e| tracker.fail(CompileError::internal(e)))?;
        debug!(
            generator = self.generator.name(),
            files = registry.len(),
            "generated artifacts"
        );

        Ok(Generated {
            resolved,
            registry,
            report,
        })
    }
}

/// Write every registered file below `root`, returning relative paths.
fn materialize(registry: &FileRegistry, root: &Path) -> Result<Vec<PathBuf>, CompileError> {
    std::fs::create_dir_all(root).map_err(|source| CompileError::Materialize {
        path: root.to_path_buf(),
        source,
    })?;

    registry
        .write_all(root)
        .map(|stats| stats.written)
        .map_err(|failure| CompileError::Materialize {
            path: failure.path,
            source: failure.source,
        })
}

/// Best-effort removal of a partially written container.
fn cleanup(container: &Path) {
    if !container.exists() {
        return;
    }
    if let Err(e) = std::fs::remove_dir_all(container) {
        warn!(
            container = %container.display(),
            error = %e,
            "failed to remove partial output"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crudgen_core::Cardinality;
    use crudgen_manifest::{Entity, Property, Relation};
    use tempfile::TempDir;

    use super::*;
    use crate::generation::FileEntry;

    /// Writes one file per entity plus an index.
    struct StubGenerator;

    impl LanguageCodegen for StubGenerator {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn generate(
            &self,
            workflow: &ResolvedWorkflow,
            options: &GenerateOptions,
            registry: &mut FileRegistry,
        ) -> eyre::Result<()> {
            for entity in &workflow.entities {
                registry.register(FileEntry::types(
                    format!("src/{}.txt", entity.file_stem()),
                    entity.model_name.clone(),
                ))?;
            }
            registry.register(FileEntry::route(
                "src/index.txt",
                format!("page size {}", options.page_size),
            ))
        }
    }

    /// Registers a file below a path that is itself a file.
    struct BrokenGenerator;

    impl LanguageCodegen for BrokenGenerator {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn generate(
            &self,
            _workflow: &ResolvedWorkflow,
            _options: &GenerateOptions,
            registry: &mut FileRegistry,
        ) -> eyre::Result<()> {
            registry.register(FileEntry::schema("src", "a file"))?;
            registry.register(FileEntry::types("src/user.txt", "User"))
        }
    }

    /// Registers the same path twice.
    struct DuplicateGenerator;

    impl LanguageCodegen for DuplicateGenerator {
        fn name(&self) -> &'static str {
            "duplicate"
        }

        fn generate(
            &self,
            _workflow: &ResolvedWorkflow,
            _options: &GenerateOptions,
            registry: &mut FileRegistry,
        ) -> eyre::Result<()> {
            registry.register(FileEntry::types("a.txt", "1"))?;
            registry.register(FileEntry::types("a.txt", "2"))
        }
    }

    fn shop() -> Workflow {
        Workflow::new("myShop")
            .entity(Entity::new("user").property(Property::new("age", "number")))
            .entity(Entity::new("order").relation(Relation::new("user", Cardinality::OneToMany)))
    }

    fn entries(dir: &Path) -> usize {
        std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
    }

    #[test]
    fn test_compile_writes_under_container() {
        let temp = TempDir::new().unwrap();
        let compiler = Compiler::new(StubGenerator, CompileOptions::new(temp.path()));

        let project = compiler.compile(&shop()).unwrap();

        assert_eq!(project.container.parent(), Some(temp.path()));
        assert_eq!(project.root, project.container.join("my-shop"));
        assert_eq!(project.files.len(), 3);
        assert!(project.contains("src/order.txt"));
        let content = std::fs::read_to_string(project.root.join("src/index.txt")).unwrap();
        assert_eq!(content, "page size 20");
        assert!(project.report.diagnostics.is_empty());
    }

    #[test]
    fn test_rejected_workflow_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let compiler = Compiler::new(StubGenerator, CompileOptions::new(temp.path()));
        let workflow = shop().entity(Entity::new("User"));

        let err = compiler.compile(&workflow).unwrap_err();

        let report = err.report().unwrap();
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.diagnostics[0].code, "duplicate-name");
        assert_eq!(entries(temp.path()), 0);
    }

    #[test]
    fn test_write_failure_removes_container() {
        let temp = TempDir::new().unwrap();
        let compiler = Compiler::new(BrokenGenerator, CompileOptions::new(temp.path()));

        let err = compiler.compile(&shop()).unwrap_err();

        match err {
            CompileError::Materialize { path, .. } => {
                assert!(path.ends_with("src/user.txt"));
            }
            other => panic!("expected materialize error, got {other:?}"),
        }
        assert_eq!(entries(temp.path()), 0);
    }

    #[test]
    fn test_generator_defect_is_internal() {
        let temp = TempDir::new().unwrap();
        let compiler = Compiler::new(DuplicateGenerator, CompileOptions::new(temp.path()));

        let err = compiler.compile(&shop()).unwrap_err();

        assert!(matches!(err, CompileError::Internal(_)));
        assert!(err.to_string().contains("registered twice"));
        assert_eq!(entries(temp.path()), 0);
    }

    #[test]
    fn test_preview_does_not_touch_disk() {
        let temp = TempDir::new().unwrap();
        let compiler = Compiler::new(StubGenerator, CompileOptions::new(temp.path().join("out")));

        let preview = compiler.preview(&shop()).unwrap();

        assert_eq!(preview.files.len(), 3);
        assert_eq!(preview.file("src/user.txt").unwrap().content, "User");
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn test_warnings_carried_to_project() {
        let temp = TempDir::new().unwrap();
        let compiler = Compiler::new(StubGenerator, CompileOptions::new(temp.path()));
        let workflow = shop().entity(
            Entity::new("tag").relation(Relation::new("order", Cardinality::ManyToMany).parent()),
        );

        let project = compiler.compile(&workflow).unwrap();

        assert_eq!(project.report.warnings().count(), 1);
    }

    #[test]
    fn test_discard_removes_container() {
        let temp = TempDir::new().unwrap();
        let compiler = Compiler::new(StubGenerator, CompileOptions::new(temp.path()));

        let project = compiler.compile(&shop()).unwrap();
        let container = project.container.clone();
        project.discard().unwrap();

        assert!(!container.exists());
    }

    #[test]
    fn test_concurrent_compilations_are_isolated() {
        let temp = TempDir::new().unwrap();
        let compiler = Compiler::new(StubGenerator, CompileOptions::new(temp.path()));
        let workflow = shop();

        let containers: Vec<PathBuf> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| compiler.compile(&workflow).unwrap().container))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let unique: HashSet<_> = containers.iter().collect();
        assert_eq!(unique.len(), 8);
        for container in &containers {
            assert_eq!(entries(&container.join("my-shop").join("src")), 3);
        }
    }

    #[test]
    fn test_state_display() {
        assert_eq!(CompilerState::Materializing.to_string(), "materializing");
        assert!(CompilerState::Failed.is_terminal());
        assert!(!CompilerState::Idle.is_terminal());
    }
}
