//! Field annotation parsing.
//!
//! An annotation has the shape `name,opt1,opt2`. The name may be empty and
//! options are matched after trimming whitespace. There is no escaping, so a
//! comma can never be part of a name or an option.

use backend::Visibility;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::constants::{
    OPT_EMBED, OPT_OMIT, OPT_PUBLIC, OPT_SECRET, TAG_KEY, TAG_NAME_PUNCTUATION,
};

/// The comma-separated options following the name in an annotation.
///
/// Holds the raw text after the first comma, without the comma itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TagOptions<'a>(&'a str);

impl<'a> TagOptions<'a> {
    /// Returns the raw option text.
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Reports whether `option` appears as one of the comma-separated pieces.
    ///
    /// Pieces are trimmed before comparison; the comparison is exact and
    /// case-sensitive.
    pub fn contains(&self, option: &str) -> bool {
        if self.0.is_empty() {
            return false;
        }
        self.iter().any(|piece| piece == option)
    }

    /// Iterates over the trimmed option pieces in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + 'a {
        let raw = self.0;
        raw.split(',')
            .map(str::trim)
            .filter(move |_| !raw.is_empty())
    }
}

/// Splits an annotation into its name and its options.
pub fn parse_tag(tag: &str) -> (&str, TagOptions<'_>) {
    match tag.split_once(',') {
        Some((name, options)) => (name, TagOptions(options)),
        None => (tag, TagOptions("")),
    }
}

/// Reports whether `name` may be used as an annotation-supplied field name.
///
/// A valid name is non-empty and made of letters (general category `L*`),
/// decimal digits (`Nd`), space and the punctuation in
/// `!#$%&()*+-./:<=>?@[]^_{|}~`. Other numerals such as `²` or `Ⅻ` and
/// combining marks are rejected.
pub fn is_valid_tag(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    name.chars()
        .all(|c| TAG_NAME_PUNCTUATION.contains(c) || is_letter_or_digit(c))
}

fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// Returns the annotation stored under [`TAG_KEY`] in a field's key/value
/// metadata, if any.
pub fn lookup_tag<'a>(metadata: &[(&str, &'a str)]) -> Option<&'a str> {
    metadata
        .iter()
        .find(|(key, _)| *key == TAG_KEY)
        .map(|(_, value)| *value)
}

/// Typed form of a field annotation.
///
/// Front ends that know a field's treatment up front build one of these
/// directly; string annotations go through [`FieldTag::parse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldTag {
    /// Name override. `None` keeps the field's declared name.
    pub name: Option<String>,
    /// Visibility the field asks for. May still be overridden by a parent.
    pub visibility: Visibility,
    /// Drop this field's name from the path and let the child decide visibility.
    pub embed: bool,
    /// Skip the field entirely.
    pub omit: bool,
}

impl Default for FieldTag {
    fn default() -> Self {
        Self {
            name: None,
            visibility: Visibility::Secret,
            embed: false,
            omit: false,
        }
    }
}

impl FieldTag {
    /// A field kept under its declared name as a secret input.
    pub fn secret() -> Self {
        Self::default()
    }

    /// A field kept under its declared name as a public input.
    pub fn public() -> Self {
        Self {
            visibility: Visibility::Public,
            ..Self::default()
        }
    }

    /// A field whose name is elided and whose visibility is deferred.
    pub fn embed() -> Self {
        Self {
            visibility: Visibility::Unset,
            embed: true,
            ..Self::default()
        }
    }

    /// A field that is not walked.
    pub fn omit() -> Self {
        Self {
            omit: true,
            ..Self::default()
        }
    }

    /// Replaces the declared name with `name`.
    ///
    /// Names rejected by [`is_valid_tag`] are ignored, as they are for string
    /// annotations.
    pub fn renamed(mut self, name: &str) -> Self {
        self.name = is_valid_tag(name).then(|| name.to_owned());
        self
    }

    /// Interprets a raw annotation string.
    ///
    /// `secret` wins over `public`, which wins over `embed`. Without any of
    /// them the field is secret.
    pub fn parse(tag: &str) -> Self {
        if tag == OPT_OMIT {
            return Self::omit();
        }

        let (name, options) = parse_tag(tag);
        let mut field_tag = if options.contains(OPT_SECRET) {
            Self::secret()
        } else if options.contains(OPT_PUBLIC) {
            Self::public()
        } else if options.contains(OPT_EMBED) {
            return Self::embed();
        } else {
            Self::default()
        };
        field_tag.name = is_valid_tag(name).then(|| name.to_owned());
        field_tag
    }

    /// Interprets the annotation found in a field's key/value metadata.
    ///
    /// Metadata without a [`TAG_KEY`] entry yields the default: declared
    /// name, secret.
    pub fn from_metadata(metadata: &[(&str, &str)]) -> Self {
        lookup_tag(metadata).map(Self::parse).unwrap_or_default()
    }

    /// The name this field contributes to the path, given its declared name.
    pub(crate) fn resolve_name<'a>(&'a self, declared: &'a str) -> &'a str {
        if self.embed {
            return "";
        }
        self.name.as_deref().unwrap_or(declared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_tag_splits_on_first_comma() {
        let (name, opts) = parse_tag("a,b");
        assert_eq!(name, "a");
        assert_eq!(opts.as_str(), "b");
        assert_eq!(opts.iter().collect::<Vec<_>>(), vec!["b"]);

        let (name, opts) = parse_tag("a,b,c");
        assert_eq!(name, "a");
        assert_eq!(opts.iter().collect::<Vec<_>>(), vec!["b", "c"]);

        let (name, opts) = parse_tag("plain");
        assert_eq!(name, "plain");
        assert_eq!(opts.as_str(), "");
        assert_eq!(opts.iter().count(), 0);

        let (name, opts) = parse_tag(",public");
        assert_eq!(name, "");
        assert!(opts.contains("public"));
    }

    #[test]
    fn test_contains_trims_pieces() {
        let (_, opts) = parse_tag("  secret , public ");
        // the name absorbs everything before the first comma
        assert!(!opts.contains("secret"));

        let opts = TagOptions("  secret , public ");
        assert!(opts.contains("secret"));
        assert!(opts.contains("public"));
        assert!(!opts.contains("embed"));
    }

    #[test]
    fn test_contains_is_exact() {
        let opts = TagOptions("publicity,Secret,embedded");
        assert!(!opts.contains("public"));
        assert!(!opts.contains("secret"));
        assert!(!opts.contains("embed"));
        assert!(!TagOptions("").contains(""));
    }

    #[test]
    fn test_is_valid_tag() {
        assert!(is_valid_tag("x"));
        assert!(is_valid_tag("Vals"));
        assert!(is_valid_tag("a-b.c/d:e"));
        assert!(is_valid_tag("with space"));
        assert!(is_valid_tag("émoji_ü"));
        assert!(is_valid_tag("[0]{1}"));

        assert!(!is_valid_tag(""));
        assert!(!is_valid_tag("back\\slash"));
        assert!(!is_valid_tag("quo\"te"));
        assert!(!is_valid_tag("apo'strophe"));
        assert!(!is_valid_tag("com,ma"));
        assert!(!is_valid_tag("tab\t"));

        // letters and decimal digits only; other numerals and marks are out
        assert!(is_valid_tag("क"));
        assert!(is_valid_tag("٣"));
        assert!(!is_valid_tag("x²"));
        assert!(!is_valid_tag("½"));
        assert!(!is_valid_tag("Ⅻ"));
        assert!(!is_valid_tag("a\u{345}"));
        assert!(!is_valid_tag("का"));
    }

    #[test]
    fn test_field_tag_parse() {
        assert_eq!(FieldTag::parse("-"), FieldTag::omit());
        assert_eq!(FieldTag::parse(""), FieldTag::secret());

        let tag = FieldTag::parse("x,public");
        assert_eq!(tag.name.as_deref(), Some("x"));
        assert_eq!(tag.visibility, Visibility::Public);
        assert!(!tag.embed);

        let tag = FieldTag::parse("y,secret,public");
        assert_eq!(tag.name.as_deref(), Some("y"));
        assert_eq!(tag.visibility, Visibility::Secret);

        let tag = FieldTag::parse("ignored,embed");
        assert!(tag.embed);
        assert_eq!(tag.visibility, Visibility::Unset);
        assert_eq!(tag.resolve_name("Inner"), "");

        let tag = FieldTag::parse("z,embed,public");
        assert!(!tag.embed);
        assert_eq!(tag.visibility, Visibility::Public);
        assert_eq!(tag.resolve_name("Inner"), "z");
    }

    #[test]
    fn test_field_tag_invalid_name_falls_back() {
        let tag = FieldTag::parse("bad\\name,public");
        assert_eq!(tag.name, None);
        assert_eq!(tag.visibility, Visibility::Public);
        assert_eq!(tag.resolve_name("Declared"), "Declared");

        let tag = FieldTag::public().renamed("no\"pe");
        assert_eq!(tag.resolve_name("Declared"), "Declared");
        let tag = FieldTag::public().renamed("ok");
        assert_eq!(tag.resolve_name("Declared"), "ok");
    }

    #[test]
    fn test_from_metadata() {
        let tag = FieldTag::from_metadata(&[("json", "amount"), ("gnark", "amt,public")]);
        assert_eq!(tag.name.as_deref(), Some("amt"));
        assert_eq!(tag.visibility, Visibility::Public);

        assert_eq!(FieldTag::from_metadata(&[("gnark", "-")]), FieldTag::omit());
        assert_eq!(FieldTag::from_metadata(&[("json", "x,public")]), FieldTag::default());
        assert_eq!(lookup_tag(&[("json", "a"), (TAG_KEY, "b")]), Some("b"));
        assert_eq!(lookup_tag(&[]), None);
    }

    #[test]
    fn test_superscript_name_falls_back() {
        let tag = FieldTag::parse("x²,public");
        assert_eq!(tag.name, None);
        assert_eq!(tag.visibility, Visibility::Public);
        assert_eq!(tag.resolve_name("X"), "X");
    }

    proptest! {
        #[test]
        fn prop_option_found_regardless_of_padding(
            left in "[ \t]{0,3}",
            right in "[ \t]{0,3}",
            other in "[a-z]{1,8}",
        ) {
            let raw = format!("{other},{left}public{right}");
            let opts = TagOptions(&raw);
            prop_assert!(opts.contains("public"));
        }

        #[test]
        fn prop_name_is_prefix_before_comma(name in "[a-zA-Z0-9_]{0,12}", rest in "[a-z, ]{0,16}") {
            let tag = format!("{name},{rest}");
            let (parsed, opts) = parse_tag(&tag);
            prop_assert_eq!(parsed, name.as_str());
            prop_assert_eq!(opts.as_str(), rest.as_str());
        }

        #[test]
        fn prop_names_with_reserved_chars_are_invalid(
            prefix in "[a-z]{0,6}",
            reserved in prop::sample::select(vec![
                '\\', '"', '\'', ',', '`', ';', '²', '½', 'Ⅻ', '\u{345}', '\u{93e}',
            ]),
        ) {
            let name = format!("{prefix}{reserved}");
            prop_assert!(!is_valid_tag(&name));
        }
    }
}
