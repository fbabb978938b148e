use felt::modal::{ModalSlot, ModalStack, StackVisuals};
use proptest::prelude::*;

const IDS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

/// A register (`true`) or unregister (`false`) of one of [`IDS`].
fn arb_steps() -> impl Strategy<Value = Vec<(bool, usize)>> {
    prop::collection::vec((any::<bool>(), 0..IDS.len()), 0..48)
}

// ============================================================================
// Stack Indices
// ============================================================================

#[test]
fn test_register_then_unregister_middle() {
    let stack = ModalStack::new();
    stack.register("A");
    stack.register("B");
    stack.register("C");

    assert_eq!(stack.stack_index("A"), Some(2));
    assert_eq!(stack.stack_index("B"), Some(1));
    assert_eq!(stack.stack_index("C"), Some(0));

    stack.unregister("B");

    assert_eq!(stack.stack_index("A"), Some(1));
    assert_eq!(stack.stack_index("C"), Some(0));
    assert_eq!(stack.stack_index("B"), None);
}

#[test]
fn test_unregister_unknown_leaves_others() {
    let stack = ModalStack::new();
    stack.register("A");
    stack.register("B");

    assert!(!stack.unregister("missing"));

    assert_eq!(stack.stack_index("A"), Some(1));
    assert_eq!(stack.stack_index("B"), Some(0));
}

// ============================================================================
// Slots
// ============================================================================

#[test]
fn test_nested_modal_slots_shrink_parent() {
    let stack = ModalStack::new();
    let mut parent = ModalSlot::with_id(stack.clone(), "confirm");
    let mut child = ModalSlot::with_id(stack.clone(), "error");

    parent.set_open(true);
    assert_eq!(parent.visuals(), StackVisuals::for_index(0));

    child.set_open(true);
    assert_eq!(parent.stack_index(), Some(1));
    assert!(parent.visuals().scale < child.visuals().scale);

    drop(child);
    assert_eq!(parent.stack_index(), Some(0));
}

#[test]
fn test_unregister_is_visible_before_next_read() {
    let stack = ModalStack::new();
    let mut sub = stack.subscribe();
    let mut slot = stack.slot();

    slot.set_open(true);
    slot.set_open(false);

    assert!(stack.is_empty());
    assert_eq!(sub.drain(), 2);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Open modals always carry the indices 0..n, the newest on top, and the
    /// stack matches an ordered deduplicated list of open ids.
    #[test]
    fn stack_matches_ordered_model(steps in arb_steps()) {
        let stack = ModalStack::new();
        let mut model: Vec<&str> = Vec::new();

        for (register, i) in steps {
            let id = IDS[i];
            let was_open = model.contains(&id);
            if register {
                prop_assert_eq!(stack.register(id), !was_open);
                if !was_open {
                    model.push(id);
                }
            } else {
                prop_assert_eq!(stack.unregister(id), was_open);
                model.retain(|m| *m != id);
            }

            let top_first: Vec<String> = model.iter().rev().map(|m| m.to_string()).collect();
            prop_assert_eq!(stack.ids(), top_first);

            let mut indices = Vec::new();
            for id in IDS {
                match model.iter().position(|m| *m == id) {
                    Some(pos) => {
                        let index = stack.stack_index(id);
                        prop_assert_eq!(index, Some(model.len() - pos - 1));
                        indices.extend(index);
                    }
                    None => prop_assert_eq!(stack.stack_index(id), None),
                }
            }
            indices.sort_unstable();
            prop_assert_eq!(indices, (0..model.len()).collect::<Vec<_>>());
        }
    }
}
