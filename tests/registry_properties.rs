// Property tests for the demo registry: ordering, exactly-once invocation and
// isolation of failing and panicking routines, over registries of any size.

use anyhow::bail;
use feature_showcase::{DemoRegistry, Outcome, RegistryError};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Behavior {
    Succeed,
    Fail,
    Panic,
}

fn behavior() -> impl Strategy<Value = Behavior> {
    prop_oneof![
        2 => Just(Behavior::Succeed),
        1 => Just(Behavior::Fail),
        1 => Just(Behavior::Panic),
    ]
}

fn build(count: usize, behaviors: &[Behavior], log: &Rc<RefCell<Vec<usize>>>) -> DemoRegistry {
    let mut registry = DemoRegistry::new();
    for i in 0..count {
        let log = Rc::clone(log);
        let behavior = behaviors.get(i).copied().unwrap_or(Behavior::Succeed);
        registry
            .register(format!("demo-{i}"), move || {
                log.borrow_mut().push(i);
                match behavior {
                    Behavior::Succeed => Ok(()),
                    Behavior::Fail => bail!("demo {i} broke"),
                    Behavior::Panic => panic!("demo {i} blew up"),
                }
            })
            .unwrap();
    }
    registry
}

// ============================================================================
// run_all
// ============================================================================

proptest! {
    #[test]
    fn run_all_visits_every_demo_once_in_order(behaviors in prop::collection::vec(behavior(), 0..24)) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = build(behaviors.len(), &behaviors, &log);

        let report = registry.run_all();

        prop_assert_eq!(log.borrow().clone(), (0..behaviors.len()).collect::<Vec<_>>());
        prop_assert_eq!(report.len(), behaviors.len());
        for (i, entry) in report.entries().iter().enumerate() {
            prop_assert_eq!(&entry.name, &format!("demo-{i}"));
            let expected = match behaviors[i] {
                Behavior::Succeed => Outcome::Success,
                Behavior::Fail => Outcome::Failure(format!("demo {i} broke")),
                Behavior::Panic => Outcome::Failure(format!("panicked: demo {i} blew up")),
            };
            prop_assert_eq!(&entry.outcome, &expected);
        }
        prop_assert_eq!(
            report.failed().count(),
            behaviors.iter().filter(|b| **b != Behavior::Succeed).count()
        );
    }

    #[test]
    fn failure_cause_names_the_demo(count in 1usize..16, bad in 0usize..16) {
        let bad = bad % count;
        let mut failing = vec![Behavior::Succeed; count];
        failing[bad] = Behavior::Fail;
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = build(count, &failing, &log);

        let report = registry.run_all();
        let name = format!("demo-{bad}");
        prop_assert_eq!(
            report.outcome_of(&name),
            Some(&Outcome::Failure(format!("demo {bad} broke")))
        );
    }
}

// ============================================================================
// register / run
// ============================================================================

proptest! {
    #[test]
    fn duplicate_registration_is_rejected(count in 1usize..12, pick in 0usize..12) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = build(count, &[], &log);
        let name = format!("demo-{}", pick % count);

        let err = registry.register(name.clone(), || Ok(())).unwrap_err();
        prop_assert_eq!(err, RegistryError::DuplicateName(name));
        prop_assert_eq!(registry.len(), count);
    }

    #[test]
    fn run_invokes_only_the_named_demo(count in 1usize..12, pick in 0usize..12) {
        let pick = pick % count;
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = build(count, &[], &log);

        registry.run(&format!("demo-{pick}")).unwrap();
        prop_assert_eq!(log.borrow().clone(), vec![pick]);
    }

    #[test]
    fn unknown_names_are_not_found(name in "[a-z]{1,12}") {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = build(3, &[], &log);

        prop_assert_eq!(registry.run(&name), Err(RegistryError::NotFound(name.clone())));
        prop_assert!(registry.run_selected(&["demo-0".to_string(), name.clone()]).is_err());
        prop_assert!(log.borrow().is_empty());
    }
}
