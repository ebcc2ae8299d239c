//! Display-name tags.
//!
//! A layer name is either a bare identifier (`title`) or a tag keyword and a
//! base name separated by one colon (`button:submit`). The tag selects a
//! semantic role that overrides dispatch on the structural type.

use scenegraft_core::{ConvertError, Result};

/// A parsed display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTag {
    /// Lower-cased keyword before the colon, if any.
    pub tag: Option<String>,
    /// Name after the colon, or the whole name when untagged.
    pub base: String,
}

impl NameTag {
    /// Recognized role of the tag keyword.
    ///
    /// `Ok(None)` for an untagged name.
    pub fn role(&self, node: &str) -> Result<Option<Role>> {
        match self.tag.as_deref() {
            None => Ok(None),
            Some(tag) => Role::from_keyword(tag)
                .map(Some)
                .ok_or_else(|| ConvertError::format(node, format!("unrecognized tag '{tag}'"))),
        }
    }
}

/// Semantic roles selectable through a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Editable text field; only valid on text nodes.
    Edit,
    /// Button synthesized from a container.
    Button,
    /// Released-state child of a button.
    Up,
    /// Pressed-state child of a button.
    Down,
    /// Image drawn as a nine-patch.
    NinePatch,
}

impl Role {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "edit" => Some(Self::Edit),
            "button" => Some(Self::Button),
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "ninepatch" => Some(Self::NinePatch),
            _ => None,
        }
    }
}

/// Whether `name` matches `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Split a display name into tag and base name.
///
/// The base must be an identifier whether or not a tag is present.
pub fn parse_name(name: &str) -> Result<NameTag> {
    let mut parts = name.split(':');
    let (tag, base) = match (parts.next(), parts.next(), parts.next()) {
        (Some(tag), Some(base), None) => (Some(tag.to_ascii_lowercase()), base),
        (Some(base), None, _) => (None, base),
        _ => return Err(ConvertError::format(name, "more than one ':' in name")),
    };
    if !is_identifier(base) {
        return Err(ConvertError::format(
            name,
            format!("'{base}' is not a valid identifier"),
        ));
    }
    Ok(NameTag {
        tag,
        base: base.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_identifiers() {
        assert_eq!(parse_name("foo").unwrap().base, "foo");
        assert_eq!(parse_name("_x2").unwrap().tag, None);
        assert!(parse_name("2foo").is_err());
        assert!(parse_name("foo bar").is_err());
        assert!(parse_name("").is_err());
    }

    #[test]
    fn test_tagged_name() {
        let parsed = parse_name("button:submit").unwrap();
        assert_eq!(parsed.tag.as_deref(), Some("button"));
        assert_eq!(parsed.base, "submit");
        assert_eq!(parsed.role("button:submit").unwrap(), Some(Role::Button));
    }

    #[test]
    fn test_extra_colons_fail() {
        let err = parse_name("a:b:c").unwrap_err();
        assert!(matches!(err, ConvertError::Format { .. }));
        assert_eq!(err.node(), Some("a:b:c"));
    }

    #[test]
    fn test_unknown_tag_is_format_error() {
        let parsed = parse_name("slider:volume").unwrap();
        let err = parsed.role("slider:volume").unwrap_err();
        assert!(err.to_string().contains("slider"));
        assert!(matches!(err, ConvertError::Format { .. }));
    }

    #[test]
    fn test_tag_is_lower_cased() {
        let parsed = parse_name("Button:ok").unwrap();
        assert_eq!(parsed.tag.as_deref(), Some("button"));
        assert_eq!(parsed.base, "ok");
        assert_eq!(parsed.role("Button:ok").unwrap(), Some(Role::Button));
        let edit = parse_name("EDIT:name").unwrap();
        assert_eq!(edit.role("EDIT:name").unwrap(), Some(Role::Edit));
        assert_eq!(parse_name("NinePatch:bg").unwrap().tag.as_deref(), Some("ninepatch"));
    }

    #[test]
    fn test_tagged_base_must_be_identifier() {
        for name in ["up:", "up:2 bad key", "down:a-b", "button:9lives"] {
            let err = parse_name(name).unwrap_err();
            assert!(matches!(err, ConvertError::Format { .. }), "{name}");
            assert_eq!(err.node(), Some(name));
        }
        assert_eq!(parse_name("up:_idle2").unwrap().base, "_idle2");
    }

    #[test]
    fn test_role_keywords() {
        assert_eq!(Role::from_keyword("ninepatch"), Some(Role::NinePatch));
        assert_eq!(Role::from_keyword("up"), Some(Role::Up));
        assert_eq!(Role::from_keyword("Button"), None);
    }

    proptest! {
        #[test]
        fn prop_valid_identifiers_parse(name in "[A-Za-z_][A-Za-z0-9_]{0,16}") {
            let parsed = parse_name(&name).unwrap();
            prop_assert_eq!(parsed.base, name);
            prop_assert!(parsed.tag.is_none());
        }

        #[test]
        fn prop_leading_digit_fails(name in "[0-9][A-Za-z0-9_]{0,16}") {
            prop_assert!(parse_name(&name).is_err());
        }

        #[test]
        fn prop_tagged_names_keep_base(
            tag in "[A-Za-z]{1,8}",
            base in "[A-Za-z_][A-Za-z0-9_]{0,12}",
        ) {
            let parsed = parse_name(&format!("{tag}:{base}")).unwrap();
            prop_assert_eq!(parsed.tag, Some(tag.to_ascii_lowercase()));
            prop_assert_eq!(parsed.base, base);
        }

        #[test]
        fn prop_colon_free_names_parse_iff_identifier(name in "[^:]{0,12}") {
            prop_assert_eq!(parse_name(&name).is_ok(), is_identifier(&name));
        }
    }
}
