use std::sync::Once;

use text_rope::Rope;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Routes library logs through the test harness. Set `RUST_LOG=text_rope=trace`
/// to see them.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Builds a left-skewed chain, the worst shape repeated appends produce.
#[allow(dead_code)]
pub fn left_chain<S: AsRef<[u8]>>(fragments: &[S]) -> Rope {
    let mut leaves = fragments.iter().map(|fragment| Rope::from(fragment.as_ref()));
    let first = leaves.next().unwrap_or_default();
    leaves.fold(first, |rope, leaf| rope.concat(&leaf))
}
