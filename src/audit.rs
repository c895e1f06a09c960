use serde_json::Value;

/// Emits an audit event for a change made through the panel.
///
/// Events go to the `audit` tracing target so they can be routed separately,
/// e.g. `RUST_LOG=audit=info`.
pub fn log_audit(action: &str, resource: &str, metadata: Value) {
    tracing::info!(target: "audit", action, resource, metadata = %metadata, "audit");
}
