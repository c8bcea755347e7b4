/// Marker trait for intents: keystrokes routed to a page, submit/reset
/// actions, and completed API requests.
pub trait Intent: Send + 'static {}
