mod intent;
mod reducer;
mod state;

pub use intent::CreateIntent;
pub use reducer::CreateFormReducer;
pub use state::CreateFormState;
