/// Router Module Index
///
/// Routing split by access level. The split makes the auth boundary explicit:
/// the bearer-token layer is attached to the protected module as a whole, so a
/// new route added there is gated by construction rather than by remembering to
/// wrap it.

/// Routes accessible without a token. Monitoring only.
pub mod public;

/// The API surface. Every route here sits behind the `require_bearer` layer.
pub mod protected;
