//! Annotation vocabulary understood by the schema walker.

/// Key under which field annotations are stored by front ends that read
/// them from attribute metadata.
pub const TAG_KEY: &str = "gnark";

/// Option marking a field (and everything below it) as a public input.
pub const OPT_PUBLIC: &str = "public";

/// Option marking a field (and everything below it) as a secret input.
///
/// Takes precedence over [`OPT_PUBLIC`] when both are present.
pub const OPT_SECRET: &str = "secret";

/// Option eliding the field's own name from the accumulated path.
///
/// The field's visibility is left unset so the child decides.
pub const OPT_EMBED: &str = "embed";

/// Whole-annotation sentinel that removes a field from the walk.
pub const OPT_OMIT: &str = "-";

/// Separator between path segments of a leaf's full name.
pub const NAME_SEPARATOR: &str = "_";

/// Punctuation allowed in an annotation name besides letters and digits.
///
/// Backslash and quote characters are reserved.
pub(crate) const TAG_NAME_PUNCTUATION: &str = "!#$%&()*+-./:<=>?@[]^_{|}~ ";
