/// Implements [`Visitable`](crate::Visitable) for a struct from a list of
/// its fields.
///
/// Fields are walked in the order they are listed, under their Rust name.
/// An annotation literal after `=>` renames the field and sets its
/// visibility with the usual `name,option,...` syntax. Fields that are left
/// out of the list are not walked at all.
///
/// ```rust,ignore
/// struct Transfer {
///     amount: Variable,
///     salts: [Variable; 4],
///     meta: Metadata,
///     cache: Vec<u8>,
/// }
///
/// impl_visitable!(Transfer {
///     amount => "value,public",
///     salts,
///     meta => ",embed",
///     cache => "-",
/// });
/// ```
#[macro_export]
macro_rules! impl_visitable {
    (@tag $tag:literal) => {
        ::core::option::Option::Some($tag)
    };
    (@tag) => {
        ::core::option::Option::None
    };
    ($ty:ty { $( $field:ident $( => $tag:literal )? ),* $(,)? }) => {
        impl $crate::Visitable for $ty {
            fn visit<H: $crate::LeafHandler>(
                &mut self,
                base: &str,
                inherited: $crate::Visibility,
                handler: &mut H,
            ) -> ::core::result::Result<(), H::Error> {
                #[allow(unused_mut, unused_variables)]
                let mut fields = $crate::StructWalker::new(base, inherited, handler);
                $(
                    fields.field(
                        stringify!($field),
                        $crate::impl_visitable!(@tag $( $tag )?),
                        &mut self.$field,
                    )?;
                )*
                ::core::result::Result::Ok(())
            }
        }
    };
}
