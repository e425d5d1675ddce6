//! Property resolution and token expansion for button panels.
//!
//! The lookup core pairs two cooperating pieces over one read-only
//! context (template map + fallback map):
//!
//! - the [`Resolver`] walks a button's `is` inheritance chain for the
//!   first definition of a property or `set`/`setList` variable, and
//! - the expander rewrites `${...}` tokens in string results by looking
//!   the keys up through the resolver again.
//!
//! The recursion between the two is bounded by a per-call visited set
//! (token cycles) and a chain depth limit (`is` cycles). Neither side
//! fails: missing values come back as `None`, and bad tokens stay
//! visible in the output text.

pub use request::ResolvedRequest;
pub use resolver::{MAX_INHERIT_DEPTH, Resolver};

mod expander;
mod request;
mod resolver;
