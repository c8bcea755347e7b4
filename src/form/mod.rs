//! Nested contact record, its parallel error tree and the validation rules.

mod errors;
mod path;
mod record;
mod validate;

pub use errors::{AddressErrors, CompanyErrors, ErrorBranch, ErrorTree, GeoErrors};
pub use path::{FieldPath, Section};
pub use record::{Address, Company, ContactRecord, Geo};
pub use validate::{has_http_scheme, is_number, looks_like_email, validate};
