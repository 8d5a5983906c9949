pub use auth::*;
pub use comment::*;
pub use post::*;

mod auth;
mod comment;
mod post;
