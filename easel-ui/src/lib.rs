//! easel-ui: egui views for the EASEL settings form.
//!
//! Everything here is a thin view: panels read live values from shared
//! history handles and write edits back through them. All coalescing,
//! undo/redo and shortcut logic lives in `easel-history`.

pub mod app;
pub mod panels;

pub use app::EaselApp;

/// Initialize tracing for a host binary. `RUST_LOG` controls the filter.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
