//! Schema walking.
//!
//! A circuit's inputs are declared as ordinary Rust data: structs holding
//! [`Variable`]s, arrays and vectors of them, nested structs. The walker
//! descends such a value depth-first and reports every leaf together with
//! its full name and the visibility it resolved to.
//!
//! ## Naming
//!
//! Path segments are joined with `_`. Struct fields contribute their declared
//! name, or the name from their annotation when it is valid; sequence
//! elements contribute their zero-based index. An `embed`ded field contributes
//! nothing, so its children appear directly under the parent's path.
//!
//! ```text
//! Circuit { x (tag "x,public"), vals: [Variable; 2], inner (tag ",embed") { y } }
//!   -> (Public, "x"), (Secret, "vals_0"), (Secret, "vals_1"), (Secret, "y")
//! ```
//!
//! ## Visibility
//!
//! A field is `Secret` unless its annotation says otherwise. Once a parent
//! resolved to `Public` or `Secret`, that decision is handed down and wins
//! over anything declared further down the tree.
//!
//! ## Dispatch
//!
//! Each walkable shape implements [`Visitable`]. Structs implement it through
//! [`StructWalker`], usually via [`impl_visitable!`](crate::impl_visitable).
//! Maps are not supported and only produce a warning.

use std::collections::{BTreeMap, HashMap};

use backend::Visibility;
use p3_koala_bear::KoalaBear;
use tracing::warn;

use crate::constants::NAME_SEPARATOR;
use crate::tag::FieldTag;
use crate::variable::Variable;

/// Receives every leaf found by the walker.
///
/// Implemented for any `FnMut(Visibility, &str, &mut Variable) -> Result<(), E>`.
/// Returning an error stops the walk; the error reaches the caller unchanged.
pub trait LeafHandler {
    type Error;

    fn on_leaf(
        &mut self,
        visibility: Visibility,
        name: &str,
        leaf: &mut Variable,
    ) -> Result<(), Self::Error>;
}

impl<F, E> LeafHandler for F
where
    F: FnMut(Visibility, &str, &mut Variable) -> Result<(), E>,
{
    type Error = E;

    #[inline]
    fn on_leaf(
        &mut self,
        visibility: Visibility,
        name: &str,
        leaf: &mut Variable,
    ) -> Result<(), E> {
        self(visibility, name, leaf)
    }
}

/// A shape the walker knows how to descend.
pub trait Visitable {
    /// Reports the leaves below `self`.
    ///
    /// `base` is the path accumulated so far and `inherited` the visibility
    /// decided by the enclosing containers (`Unset` if none decided yet).
    fn visit<H: LeafHandler>(
        &mut self,
        base: &str,
        inherited: Visibility,
        handler: &mut H,
    ) -> Result<(), H::Error>;
}

/// Walks `root` from an empty path with no inherited visibility.
pub fn walk<T, F, E>(root: &mut T, mut handler: F) -> Result<(), E>
where
    T: Visitable + ?Sized,
    F: FnMut(Visibility, &str, &mut Variable) -> Result<(), E>,
{
    root.visit("", Visibility::Unset, &mut handler)
}

/// Walks `root` as if it sat at `base` below a parent that resolved to
/// `inherited`.
pub fn walk_with<T, H>(
    root: &mut T,
    base: &str,
    inherited: Visibility,
    handler: &mut H,
) -> Result<(), H::Error>
where
    T: Visitable + ?Sized,
    H: LeafHandler,
{
    root.visit(base, inherited, handler)
}

/// Joins a path segment onto an accumulated path.
///
/// Empty on either side yields the other side unchanged.
pub fn append_name(base: &str, name: &str) -> String {
    if base.is_empty() {
        return name.to_owned();
    }
    if name.is_empty() {
        return base.to_owned();
    }
    let mut full = String::with_capacity(base.len() + NAME_SEPARATOR.len() + name.len());
    full.push_str(base);
    full.push_str(NAME_SEPARATOR);
    full.push_str(name);
    full
}

/// Visits the fields of one struct value.
///
/// Call [`field`](Self::field) or [`field_tagged`](Self::field_tagged) once
/// per field, in declaration order, propagating errors with `?`.
///
/// ```rust,ignore
/// impl Visitable for Transfer {
///     fn visit<H: LeafHandler>(&mut self, base: &str, inherited: Visibility, handler: &mut H)
///         -> Result<(), H::Error>
///     {
///         let mut fields = StructWalker::new(base, inherited, handler);
///         fields.field("amount", Some("amount,public"), &mut self.amount)?;
///         fields.field("salt", None, &mut self.salt)
///     }
/// }
/// ```
pub struct StructWalker<'a, H> {
    base: &'a str,
    inherited: Visibility,
    handler: &'a mut H,
}

impl<'a, H: LeafHandler> StructWalker<'a, H> {
    pub fn new(base: &'a str, inherited: Visibility, handler: &'a mut H) -> Self {
        Self {
            base,
            inherited,
            handler,
        }
    }

    /// Visits a field carrying an optional string annotation.
    ///
    /// `declared` is the field's own name, used when the annotation gives no
    /// valid name.
    pub fn field<T: Visitable + ?Sized>(
        &mut self,
        declared: &str,
        tag: Option<&str>,
        value: &mut T,
    ) -> Result<(), H::Error> {
        match tag {
            Some(tag) => self.field_tagged(declared, &FieldTag::parse(tag), value),
            None => self.field_tagged(declared, &FieldTag::default(), value),
        }
    }

    /// Visits a field described by an already parsed annotation.
    pub fn field_tagged<T: Visitable + ?Sized>(
        &mut self,
        declared: &str,
        tag: &FieldTag,
        value: &mut T,
    ) -> Result<(), H::Error> {
        if tag.omit {
            return Ok(());
        }

        // a parent's decision overrides the field's own
        let visibility = if self.inherited.is_set() {
            self.inherited
        } else {
            tag.visibility
        };
        let full_name = append_name(self.base, tag.resolve_name(declared));

        value.visit(&full_name, visibility, &mut *self.handler)
    }
}

impl Visitable for Variable {
    fn visit<H: LeafHandler>(
        &mut self,
        base: &str,
        inherited: Visibility,
        handler: &mut H,
    ) -> Result<(), H::Error> {
        handler.on_leaf(inherited, base, self)
    }
}

impl<T: Visitable> Visitable for [T] {
    fn visit<H: LeafHandler>(
        &mut self,
        base: &str,
        inherited: Visibility,
        handler: &mut H,
    ) -> Result<(), H::Error> {
        if self.is_empty() {
            warn!(path = base, "got uninitialized slice (or empty array), ignoring");
            return Ok(());
        }
        for (index, element) in self.iter_mut().enumerate() {
            element.visit(&append_name(base, &index.to_string()), inherited, handler)?;
        }
        Ok(())
    }
}

impl<T: Visitable, const N: usize> Visitable for [T; N] {
    fn visit<H: LeafHandler>(
        &mut self,
        base: &str,
        inherited: Visibility,
        handler: &mut H,
    ) -> Result<(), H::Error> {
        <[T] as Visitable>::visit(self, base, inherited, handler)
    }
}

impl<T: Visitable> Visitable for Vec<T> {
    fn visit<H: LeafHandler>(
        &mut self,
        base: &str,
        inherited: Visibility,
        handler: &mut H,
    ) -> Result<(), H::Error> {
        <[T] as Visitable>::visit(self, base, inherited, handler)
    }
}

impl<T: Visitable + ?Sized> Visitable for Box<T> {
    fn visit<H: LeafHandler>(
        &mut self,
        base: &str,
        inherited: Visibility,
        handler: &mut H,
    ) -> Result<(), H::Error> {
        (**self).visit(base, inherited, handler)
    }
}

impl<T: Visitable + ?Sized> Visitable for &mut T {
    fn visit<H: LeafHandler>(
        &mut self,
        base: &str,
        inherited: Visibility,
        handler: &mut H,
    ) -> Result<(), H::Error> {
        (**self).visit(base, inherited, handler)
    }
}

/// `None` has nothing to reference and is skipped without a warning.
impl<T: Visitable> Visitable for Option<T> {
    fn visit<H: LeafHandler>(
        &mut self,
        base: &str,
        inherited: Visibility,
        handler: &mut H,
    ) -> Result<(), H::Error> {
        match self {
            Some(value) => value.visit(base, inherited, handler),
            None => Ok(()),
        }
    }
}

impl<K, V, S> Visitable for HashMap<K, V, S> {
    fn visit<H: LeafHandler>(
        &mut self,
        base: &str,
        _inherited: Visibility,
        _handler: &mut H,
    ) -> Result<(), H::Error> {
        warn!(path = base, "map values are not addressable, ignoring");
        Ok(())
    }
}

impl<K, V> Visitable for BTreeMap<K, V> {
    fn visit<H: LeafHandler>(
        &mut self,
        base: &str,
        _inherited: Visibility,
        _handler: &mut H,
    ) -> Result<(), H::Error> {
        warn!(path = base, "map values are not addressable, ignoring");
        Ok(())
    }
}

/// Shapes that never contain inputs.
macro_rules! impl_ignored {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Visitable for $ty {
                #[inline]
                fn visit<H: LeafHandler>(
                    &mut self,
                    _base: &str,
                    _inherited: Visibility,
                    _handler: &mut H,
                ) -> Result<(), H::Error> {
                    Ok(())
                }
            }
        )*
    };
}

impl_ignored!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    str,
    String,
    KoalaBear,
);
