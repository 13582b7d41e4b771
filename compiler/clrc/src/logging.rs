use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `CLR_LOG` is set; it takes `EnvFilter` directives,
/// e.g. `CLR_LOG=clr_symbols=debug`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var_os("CLR_LOG").is_none() {
            return;
        }
        let filter = EnvFilter::from_env("CLR_LOG");
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_bracketed_fields(true),
            )
            .try_init();
    });
}
