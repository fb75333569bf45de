use async_trait::async_trait;

use crate::flowfile::Relationship;
use crate::session::{ProcessContext, ProcessSession};

/// A unit-of-work transformation step.
///
/// A processor is triggered once per available unit. It polls the session for
/// a unit (returning immediately on an idle tick), reads its evaluated
/// configuration from the context, and emits routed results back through the
/// session. Processors are stateless; all per-invocation state lives in the
/// session, so concurrent invocations over different units need no locking.
#[async_trait]
pub trait Processor: Send + Sync {
    async fn on_trigger(&self, context: &ProcessContext, session: &mut ProcessSession);

    fn name(&self) -> &'static str;

    /// The routing labels this processor may emit on, used by the host for
    /// downstream wiring.
    fn relationships(&self) -> &'static [Relationship];

    /// Property names that must be present and non-empty before this
    /// processor may be scheduled.
    fn required_properties(&self) -> &'static [&'static str] {
        &[]
    }
}
