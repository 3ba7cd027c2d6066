//! Operation registry: configuration names to constructors.

use std::collections::BTreeMap;

use crate::operation::{DocumentScope, Operation, RunContext};
use crate::operations::{
    CitationConvert, LinkConvert, MathConvert, RemoveAfterString, RemoveSingleCharLines,
    UpdateFrontmatter, WriteFile,
};
use wikipress_core::{Document, Error, OperationConfig, Result};

/// Builds an operation from the run context and its options mapping
pub type Constructor = fn(&mut RunContext, &serde_yaml::Mapping) -> Result<Box<dyn Operation>>;

fn boxed<T: Operation + 'static>(op: Result<T>) -> Result<Box<dyn Operation>> {
    op.map(|op| Box::new(op) as Box<dyn Operation>)
}

/// Name -> constructor mapping
#[derive(Clone)]
pub struct Registry {
    constructors: BTreeMap<String, Constructor>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl Registry {
    /// Registry without any operation
    pub fn empty() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// Registry with every built-in operation
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register(LinkConvert::NAME, |ctx, opts| {
            boxed(LinkConvert::from_options(ctx, opts))
        });
        registry.register(MathConvert::NAME, |ctx, opts| {
            boxed(MathConvert::from_options(ctx, opts))
        });
        registry.register(RemoveAfterString::NAME, |ctx, opts| {
            boxed(RemoveAfterString::from_options(ctx, opts))
        });
        registry.register(UpdateFrontmatter::NAME, |ctx, opts| {
            boxed(UpdateFrontmatter::from_options(ctx, opts))
        });
        registry.register(RemoveSingleCharLines::NAME, |ctx, opts| {
            boxed(RemoveSingleCharLines::from_options(ctx, opts))
        });
        registry.register(CitationConvert::NAME, |ctx, opts| {
            boxed(CitationConvert::from_options(ctx, opts))
        });
        registry.register(WriteFile::NAME, |ctx, opts| {
            boxed(WriteFile::from_options(ctx, opts))
        });
        registry
    }

    /// Add or replace an operation
    pub fn register(&mut self, name: impl Into<String>, constructor: Constructor) {
        self.constructors.insert(name.into(), constructor);
    }

    /// Registered names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Construct the operation `name` with `options`.
    pub fn dispatch(
        &self,
        name: &str,
        ctx: &mut RunContext,
        options: &serde_yaml::Mapping,
    ) -> Result<Box<dyn Operation>> {
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| Error::unknown_operation(name))?;
        constructor(ctx, options)
    }
}

/// Ordered operations applied to every note
pub struct Pipeline {
    steps: Vec<Box<dyn Operation>>,
}

impl Pipeline {
    /// Construct every configured step; fails on the first unknown name or bad options.
    pub fn build(
        steps: &[OperationConfig],
        registry: &Registry,
        ctx: &mut RunContext,
    ) -> Result<Self> {
        let steps = steps
            .iter()
            .map(|step| registry.dispatch(&step.name, ctx, &step.options))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { steps })
    }

    /// Step names in order
    pub fn names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Thread a document through every step in order.
    pub fn apply(&self, doc: Document, scope: &DocumentScope) -> Result<Document> {
        self.steps.iter().try_fold(doc, |doc, step| {
            log::debug!("{} <- {}", doc.source().display(), step.name());
            step.apply(doc, scope)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use wikipress_core::{Frontmatter, OutputConfig};

    fn ctx() -> RunContext {
        RunContext::new(OutputConfig {
            base: "notes".into(),
            path: "notes".into(),
            images: "images".into(),
            filesystem: PathBuf::from("site"),
        })
    }

    struct Shout;

    impl Operation for Shout {
        fn name(&self) -> &'static str {
            "shout"
        }

        fn apply(&self, doc: Document, _scope: &DocumentScope) -> Result<Document> {
            let body = doc.body.to_uppercase();
            Ok(doc.with_body(body))
        }
    }

    #[test]
    fn test_builtin_names() {
        let names: Vec<_> = Registry::default().names().map(str::to_string).collect();
        assert_eq!(
            names,
            vec![
                "citation_convert",
                "link_convert",
                "math_convert",
                "remove_after_string",
                "remove_single_char_lines",
                "update_frontmatter",
                "write_file",
            ]
        );
    }

    #[test]
    fn test_unknown_operation() {
        let err = Registry::default()
            .dispatch("frobnicate", &mut ctx(), &serde_yaml::Mapping::new())
            .err()
            .unwrap();
        assert!(err.is_config());
        assert!(err.to_string().contains("frobnicate"));
    }

    #[test]
    fn test_pipeline_fails_before_running() {
        let steps = vec![
            OperationConfig::new("math_convert"),
            OperationConfig::new("nope"),
        ];
        let err = Pipeline::build(&steps, &Registry::default(), &mut ctx()).err().unwrap();
        assert!(matches!(err, Error::UnknownOperation { ref name } if name == "nope"));
    }

    #[test]
    fn test_custom_operation_runs_in_order() {
        let mut registry = Registry::default();
        registry.register("shout", |_, _| Ok(Box::new(Shout) as Box<dyn Operation>));

        let steps = vec![
            OperationConfig::new("shout"),
            OperationConfig::new("remove_after_string").with_option("string", "STOP"),
            OperationConfig::new("math_convert"),
        ];
        let pipeline = Pipeline::build(&steps, &registry, &mut ctx()).unwrap();
        assert_eq!(
            pipeline.names(),
            vec!["shout", "remove_after_string", "math_convert"]
        );

        let doc = Document::new("a.md", Frontmatter::default(), "$x$ stop here", Vec::new());
        let out = pipeline.apply(doc, &DocumentScope::default()).unwrap();
        assert_eq!(out.body, "$$X$$ ");
    }

    #[test]
    fn test_invalid_options_name_operation() {
        let steps = vec![OperationConfig::new("remove_single_char_lines")];
        let err = Pipeline::build(&steps, &Registry::default(), &mut ctx()).err().unwrap();
        assert!(err.to_string().contains("remove_single_char_lines"));
    }
}
