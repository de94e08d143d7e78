//! Records served by the Luma REST API, implementing [`ApiEntity`](luma_api::ApiEntity).
//!
//! Each typed record comes with its create/update payload. Record fields are all
//! optional because the API does not guarantee any of them, and a `null` or
//! mistyped field decodes to its default rather than failing the record.

pub mod article;
pub mod display;
pub mod doctor;
pub mod feedback;
pub mod kid;
mod lenient;
pub mod opaque;
pub mod user;

pub use article::*;
pub use display::or_na;
pub use doctor::*;
pub use feedback::*;
pub use kid::*;
pub use opaque::*;
pub use user::*;
