mod ctx;
mod state;

pub use ctx::StateCtx;
pub use state::State;

#[cfg(test)]
mod state_ctx_test {
    use std::any::Any;

    use super::*;

    #[derive(Default)]
    struct Counter {
        value: i32,
    }

    impl State for Counter {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[derive(Default)]
    struct Label {
        text: String,
    }

    impl State for Label {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn add_and_read_state() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter { value: 42 });

        assert!(ctx.has_state::<Counter>());
        assert_eq!(ctx.state::<Counter>().value, 42);
    }

    #[test]
    fn state_mut_mutates_in_place() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter { value: 1 });

        ctx.state_mut::<Counter>().value += 9;

        assert_eq!(ctx.state::<Counter>().value, 10);
    }

    #[test]
    fn update_applies_closure() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Label::default());

        ctx.update::<Label>(|label| label.text.push_str("hello"));

        assert_eq!(ctx.state::<Label>().text, "hello");
    }

    #[test]
    fn states_are_keyed_by_type() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter { value: 7 });
        ctx.add_state(Label {
            text: "seven".into(),
        });

        assert_eq!(ctx.state::<Counter>().value, 7);
        assert_eq!(ctx.state::<Label>().text, "seven");
    }

    #[test]
    fn add_state_replaces_previous_value() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter { value: 1 });
        ctx.add_state(Counter { value: 2 });

        assert_eq!(ctx.state::<Counter>().value, 2);
    }

    #[test]
    #[should_panic(expected = "state not registered")]
    fn missing_state_panics() {
        let ctx = StateCtx::new();
        let _ = ctx.state::<Counter>();
    }
}
