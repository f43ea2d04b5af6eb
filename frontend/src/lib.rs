//! # Circuit Input Front End
//!
//! Declares circuit inputs as plain Rust structs and turns them into named,
//! classified input wires.
//!
//! ## Overview
//!
//! A circuit's input schema is an ordinary data structure: structs holding
//! [`Variable`]s, fixed-size arrays and vectors of them, and nested structs.
//! This crate walks such a structure and reports every [`Variable`] it finds
//! together with:
//!
//! - its **full name**, built from field names and element indices joined
//!   with `_` (`"balances_3"`, `"sig_r_x"`);
//! - its **visibility**, [`Visibility::Public`] or [`Visibility::Secret`],
//!   taken from field annotations and inherited down the tree.
//!
//! The walk feeds a registrar: [`ConstraintSystem::allocate`] creates one
//! input wire per leaf, and [`Witness::from_assignment`] collects the values
//! of an assigned instance in the same order.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use frontend::{impl_visitable, ConstraintSystem, Variable, Witness};
//!
//! #[derive(Default)]
//! struct Membership {
//!     root: Variable,
//!     leaf: Variable,
//!     path: [Variable; 8],
//! }
//!
//! impl_visitable!(Membership {
//!     root => "root,public",
//!     leaf,
//!     path,
//! });
//!
//! let mut circuit = Membership::default();
//! let mut cs = ConstraintSystem::new();
//! cs.allocate(&mut circuit)?;
//! assert_eq!(cs.public_inputs(), ["ONE_WIRE", "root"]);
//! assert_eq!(cs.secret_inputs()[1], "path_0");
//! ```
//!
//! ## Annotations
//!
//! An annotation is `name,option,option...`:
//!
//! | Annotation       | Effect                                                     |
//! |------------------|------------------------------------------------------------|
//! | *(none)*         | declared name, secret                                      |
//! | `"x"`            | renamed to `x`, secret                                     |
//! | `"x,public"`     | renamed to `x`, public                                     |
//! | `",secret"`      | declared name, secret (wins over `public`)                 |
//! | `",embed"`       | name dropped from the path, children decide visibility     |
//! | `"-"`            | field not walked                                           |
//!
//! Names must be non-empty and use letters, digits, space or
//! `!#$%&()*+-./:<=>?@[]^_{|}~`. An invalid name is ignored and the declared
//! name is used instead.
//!
//! A visibility decided by a parent always wins: every leaf below a
//! `public` field is public, whatever the nested annotations say.
//!
//! ## Walkable Shapes
//!
//! - [`Variable`]: a leaf, reported to the handler.
//! - Structs: through [`impl_visitable!`] or a hand-written [`Visitable`]
//!   impl built on [`StructWalker`].
//! - `[T; N]`, `[T]`, `Vec<T>`: elements named by index. Empty sequences log
//!   a warning and contribute nothing.
//! - `Box<T>`, `&mut T`, `Option<T>`: the pointee; `None` contributes nothing.
//! - `HashMap`, `BTreeMap`: unsupported, logs a warning.
//! - [`ConstraintSystem`], integers, strings, raw field elements: ignored.
//!
//! ## Custom Handlers
//!
//! [`walk`] accepts any closure `FnMut(Visibility, &str, &mut Variable) -> Result<(), E>`.
//! The first error returned stops the walk and is handed back unchanged.
//!
//! ```rust,ignore
//! let mut names = Vec::new();
//! frontend::walk(&mut circuit, |visibility, name, _leaf| {
//!     names.push(format!("{visibility}:{name}"));
//!     Ok::<_, std::convert::Infallible>(())
//! })?;
//! ```

#[macro_use]
mod macros;

#[deny(missing_docs)]
pub mod constants;
mod cs;
mod errors;
pub mod tag;
mod variable;
mod walker;
mod witness;


pub use cs::ConstraintSystem;
pub use errors::FrontendError;
pub use tag::{is_valid_tag, lookup_tag, parse_tag, FieldTag, TagOptions};
pub use variable::Variable;
pub use walker::{append_name, walk, walk_with, LeafHandler, StructWalker, Visitable};
pub use witness::Witness;

// Re-export commonly used types
pub use backend::{Visibility, ONE_WIRE};
pub use p3_koala_bear::KoalaBear;
