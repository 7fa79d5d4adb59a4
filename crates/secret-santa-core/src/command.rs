//! Requests handled by the application layer.

use uuid::Uuid;

/// A draw or reveal request.
///
/// Nothing is stored between requests, so every command carries the whole
/// roster it applies to.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Short name used in log fields, e.g. `draw.draw_assignments`.
    fn command_type(&self) -> &'static str;

    /// Id shared by every log line emitted while handling the command.
    fn correlation_id(&self) -> Uuid;

    /// Participant names in their significant order.
    fn participants(&self) -> &[String];

    /// Groups whose members must not give to each other.
    fn exclusion_groups(&self) -> &[Vec<String>];
}
