// =============================================================================
// Demo registry: named routines, run one at a time or all in order
// =============================================================================

use crate::report::{Outcome, RunReport};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use thiserror::Error;
use tracing::{debug, info, warn};

pub type DemoFn = Box<dyn Fn() -> anyhow::Result<()>>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a demo named '{0}' is already registered")]
    DuplicateName(String),

    #[error("no demo named '{0}'")]
    NotFound(String),

    #[error("demo '{name}' failed: {cause}")]
    DemoFailure { name: String, cause: String },
}

pub struct Demo {
    name: String,
    summary: String,
    routine: DemoFn,
}

impl Demo {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    // Err returns and panics both become a cause string.
    fn invoke(&self) -> Result<(), String> {
        match catch_unwind(AssertUnwindSafe(|| (self.routine)())) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => Err(format!("{err:#}")),
            Err(payload) => Err(format!("panicked: {}", panic_message(payload.as_ref()))),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Ordered collection of demos. Names are unique; routines run sequentially
/// on the calling thread.
#[derive(Default)]
pub struct DemoRegistry {
    demos: Vec<Demo>,
}

impl DemoRegistry {
    pub fn new() -> Self {
        Self { demos: Vec::new() }
    }

    pub fn register<F>(&mut self, name: impl Into<String>, routine: F) -> Result<(), RegistryError>
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        self.register_with_summary(name, "", routine)
    }

    pub fn register_with_summary<F>(
        &mut self,
        name: impl Into<String>,
        summary: impl Into<String>,
        routine: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        let name = name.into();
        if self.contains(&name) {
            warn!(demo = %name, "rejected duplicate registration");
            return Err(RegistryError::DuplicateName(name));
        }
        debug!(demo = %name, position = self.demos.len(), "registered demo");
        self.demos.push(Demo {
            name,
            summary: summary.into(),
            routine: Box::new(routine),
        });
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.demos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.demos.iter().map(Demo::name)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Demo> {
        self.demos.iter()
    }

    fn get(&self, name: &str) -> Option<&Demo> {
        self.demos.iter().find(|d| d.name == name)
    }

    /// Runs one demo exactly once.
    pub fn run(&self, name: &str) -> Result<(), RegistryError> {
        let demo = self
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        Self::run_demo(demo).map_err(|cause| RegistryError::DemoFailure {
            name: name.to_string(),
            cause,
        })
    }

    /// Runs every demo in registration order, continuing past failures.
    pub fn run_all(&self) -> RunReport {
        info!(count = self.demos.len(), "running all demos");
        Self::run_batch(self.demos.iter())
    }

    /// Runs the named demos in the given order. Every name is resolved
    /// before anything runs.
    pub fn run_selected<S: AsRef<str>>(&self, names: &[S]) -> Result<RunReport, RegistryError> {
        let demos = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .ok_or_else(|| RegistryError::NotFound(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        info!(count = demos.len(), "running selected demos");
        Ok(Self::run_batch(demos.into_iter()))
    }

    fn run_batch<'a>(demos: impl Iterator<Item = &'a Demo>) -> RunReport {
        let mut report = RunReport::new();
        for demo in demos {
            let outcome = match Self::run_demo(demo) {
                Ok(()) => Outcome::Success,
                Err(cause) => Outcome::Failure(cause),
            };
            report.record(demo.name(), outcome);
        }
        report
    }

    fn run_demo(demo: &Demo) -> Result<(), String> {
        debug!(demo = %demo.name, "starting demo");
        let result = demo.invoke();
        match &result {
            Ok(()) => info!(demo = %demo.name, "demo finished"),
            Err(cause) => warn!(demo = %demo.name, %cause, "demo failed"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() -> anyhow::Result<()>) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, move || {
            handle.set(handle.get() + 1);
            Ok(())
        })
    }

    #[test]
    fn test_run_invokes_once() {
        let mut registry = DemoRegistry::new();
        let (count, routine) = counter();
        registry.register("hello", routine).unwrap();

        registry.run("hello").unwrap();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_duplicate_keeps_original() {
        let mut registry = DemoRegistry::new();
        let (first, routine) = counter();
        let (second, duplicate) = counter();
        registry.register("hello", routine).unwrap();

        let err = registry.register("hello", duplicate).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("hello".into()));
        assert_eq!(registry.len(), 1);

        registry.run("hello").unwrap();
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }

    #[test]
    fn test_not_found() {
        let mut registry = DemoRegistry::new();
        let (count, routine) = counter();
        registry.register("hello", routine).unwrap();

        let err = registry.run("missing").unwrap_err();
        assert_eq!(err, RegistryError::NotFound("missing".into()));
        assert_eq!(count.get(), 0);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["hello"]);
    }

    #[test]
    fn test_error_becomes_demo_failure() {
        let mut registry = DemoRegistry::new();
        registry.register("broken", || bail!("bad input")).unwrap();

        match registry.run("broken") {
            Err(RegistryError::DemoFailure { name, cause }) => {
                assert_eq!(name, "broken");
                assert!(cause.contains("bad input"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_panic_becomes_demo_failure() {
        let mut registry = DemoRegistry::new();
        registry
            .register("explodes", || panic!("index out of range"))
            .unwrap();

        match registry.run("explodes") {
            Err(RegistryError::DemoFailure { cause, .. }) => {
                assert!(cause.contains("index out of range"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_run_all_continues_past_failure() {
        let mut registry = DemoRegistry::new();
        let (a, first) = counter();
        let (c, third) = counter();
        registry.register("a", first).unwrap();
        registry.register("b", || bail!("nope")).unwrap();
        registry.register("c", third).unwrap();

        let report = registry.run_all();
        assert_eq!(a.get(), 1);
        assert_eq!(c.get(), 1);
        let failed: Vec<_> = report.failed().map(|e| e.name.as_str()).collect();
        assert_eq!(failed, vec!["b"]);
        let order: Vec<_> = report.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_run_all_continues_past_panic() {
        let mut registry = DemoRegistry::new();
        let (a, first) = counter();
        let (c, third) = counter();
        registry.register("a", first).unwrap();
        registry.register("b", || panic!("boom")).unwrap();
        registry.register("c", third).unwrap();

        let report = registry.run_all();
        assert_eq!(a.get(), 1);
        assert_eq!(c.get(), 1);
        assert_eq!(report.outcome_of("a"), Some(&Outcome::Success));
        assert_eq!(
            report.outcome_of("b"),
            Some(&Outcome::Failure("panicked: boom".into()))
        );
        assert_eq!(report.outcome_of("c"), Some(&Outcome::Success));
    }

    #[test]
    fn test_run_selected_resolves_first() {
        let mut registry = DemoRegistry::new();
        let (count, routine) = counter();
        registry.register("a", routine).unwrap();

        let err = registry.run_selected(&["a", "zzz"]).unwrap_err();
        assert_eq!(err, RegistryError::NotFound("zzz".into()));
        assert_eq!(count.get(), 0);

        let report = registry.run_selected(&["a", "a"]).unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_summary_kept() {
        let mut registry = DemoRegistry::new();
        registry
            .register_with_summary("variant", "tagged unions", || Ok(()))
            .unwrap();
        let demo = registry.entries().next().unwrap();
        assert_eq!(demo.name(), "variant");
        assert_eq!(demo.summary(), "tagged unions");
    }
}
