#![cfg(test)]
crate::reexport!(context);
pub use rstest::*;

pub(in crate::testing) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer()
            .init();
    });
}

mod session_context_tests {
    use super::{super::*, *};

    #[test_context(SessionTest)]
    #[test]
    fn opens_on_sales(ctx: &mut SessionTest) {
        assert_eq!(ctx.session.text(), "select * from sales");
        assert!(!ctx.session.is_enabled());
        assert!(ctx.dispatched().is_empty());
    }

    #[test_context(SessionTest)]
    #[test]
    fn records_dispatches(ctx: &mut SessionTest) -> Result {
        ctx.session.enable();
        for _ in 0..4 {
            ctx.session.submit(true)?;
        }
        assert_eq!(ctx.dispatched().len(), 4);
        assert_eq!(ctx.messages.cleared(), 4);
        assert!(ctx.dispatched().is_empty());
        Ok(())
    }
}
