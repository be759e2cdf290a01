//! ViewStack behaviour over arbitrary operation sequences.

use edux::error::NavError;
use edux::navigation::{ViewDescriptor, ViewStack};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum Screen {
    Home,
    List { page: u32 },
    Detail { id: u32, label: String },
}

impl ViewDescriptor for Screen {
    fn kind(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::List { .. } => "list",
            Screen::Detail { .. } => "detail",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Push(u32),
    Replace(u32),
    Pop,
    Reset,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u32>().prop_map(Op::Push),
        1 => any::<u32>().prop_map(Op::Replace),
        2 => Just(Op::Pop),
        1 => Just(Op::Reset),
    ]
}

fn arb_detail() -> impl Strategy<Value = Screen> {
    (any::<u32>(), "[a-z]{0,12}").prop_map(|(id, label)| Screen::Detail { id, label })
}

proptest! {
    #[test]
    fn prop_stack_is_never_empty(ops in prop::collection::vec(arb_op(), 0..200)) {
        let mut stack = ViewStack::new(Screen::Home);
        for op in ops {
            match op {
                Op::Push(n) => stack.push(Screen::List { page: n }),
                Op::Replace(n) => {
                    stack.replace(Screen::List { page: n });
                }
                Op::Pop => {
                    let could_pop = stack.can_pop();
                    prop_assert_eq!(stack.pop().is_ok(), could_pop);
                }
                Op::Reset => stack.reset(Screen::Home),
            }
            prop_assert!(stack.depth() >= 1);
            prop_assert_eq!(stack.iter().count(), stack.depth());
            prop_assert_eq!(stack.can_pop(), stack.depth() > 1);
        }
    }

    #[test]
    fn prop_push_then_pop_restores_previous_top(
        prefix in prop::collection::vec(arb_detail(), 0..16),
        pushed in arb_detail(),
    ) {
        let mut stack = ViewStack::new(Screen::Home);
        for screen in prefix {
            stack.push(screen);
        }
        let before = stack.top().clone();
        let depth = stack.depth();

        stack.push(pushed.clone());
        let popped = stack.pop();
        prop_assert_eq!(popped, Ok(pushed));
        prop_assert_eq!(stack.top(), &before);
        prop_assert_eq!(stack.depth(), depth);
    }
}

#[test]
fn test_pop_restores_previous_payload() {
    let mut stack = ViewStack::new(Screen::Home);
    stack.push(Screen::List { page: 3 });
    stack.push(Screen::Detail {
        id: 42,
        label: "answer".to_string(),
    });

    let popped = stack.pop().unwrap();
    assert_eq!(
        popped,
        Screen::Detail {
            id: 42,
            label: "answer".to_string()
        }
    );
    assert_eq!(stack.top(), &Screen::List { page: 3 });
}

#[test]
fn test_pop_at_root_is_error() {
    let mut stack = ViewStack::new(Screen::Home);
    let err = stack.pop().unwrap_err();
    assert_eq!(err, NavError::EmptyStack { root: "home" });
    assert_eq!(stack.top(), &Screen::Home);
}

#[test]
fn test_replace_hides_previous_from_history() {
    let mut stack = ViewStack::new(Screen::Home);
    stack.push(Screen::List { page: 1 });
    let old = stack.replace(Screen::List { page: 2 });

    assert_eq!(old, Screen::List { page: 1 });
    assert_eq!(stack.kinds(), vec!["home", "list"]);
    stack.pop().unwrap();
    assert_eq!(stack.top(), &Screen::Home);
}

#[test]
fn test_reset_keeps_only_new_root() {
    let mut stack = ViewStack::new(Screen::Home);
    stack.push(Screen::List { page: 1 });
    stack.push(Screen::List { page: 2 });
    stack.reset(Screen::List { page: 0 });

    assert_eq!(stack.depth(), 1);
    assert!(!stack.can_pop());
    assert_eq!(stack.root(), &Screen::List { page: 0 });
}
