//! Recognised Open Graph property names.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The Open Graph properties folded into an `OpenGraph` record.
///
/// Names are matched exactly, so `OG:Title` or `og:site_name` do not parse
/// and their declarations are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
pub enum OgProperty {
    /// `og:title`
    #[strum(serialize = "og:title")]
    Title,
    /// `og:type`
    #[strum(serialize = "og:type")]
    Type,
    /// `og:url`
    #[strum(serialize = "og:url")]
    Url,
    /// `og:image`
    #[strum(serialize = "og:image")]
    Image,
    /// `og:description`
    #[strum(serialize = "og:description")]
    Description,
}

impl OgProperty {
    /// Whether the content must be an absolute URL to be kept.
    pub fn is_url_valued(&self) -> bool {
        matches!(self, OgProperty::Url | OgProperty::Image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_property_from_str() {
        assert_eq!("og:title".parse::<OgProperty>(), Ok(OgProperty::Title));
        assert_eq!("og:type".parse::<OgProperty>(), Ok(OgProperty::Type));
        assert_eq!("og:url".parse::<OgProperty>(), Ok(OgProperty::Url));
        assert_eq!("og:image".parse::<OgProperty>(), Ok(OgProperty::Image));
        assert_eq!(
            "og:description".parse::<OgProperty>(),
            Ok(OgProperty::Description)
        );
    }

    #[test]
    fn test_property_unknown_names_rejected() {
        assert!("og:site_name".parse::<OgProperty>().is_err());
        assert!("og:image:width".parse::<OgProperty>().is_err());
        assert!("OG:TITLE".parse::<OgProperty>().is_err());
        assert!("title".parse::<OgProperty>().is_err());
    }

    #[test]
    fn test_property_display_matches_name() {
        for property in OgProperty::iter() {
            assert_eq!(property.to_string(), property.as_ref());
            assert_eq!(property.to_string().parse::<OgProperty>(), Ok(property));
        }
    }

    #[test]
    fn test_url_valued_properties() {
        let url_valued: Vec<_> = OgProperty::iter().filter(|p| p.is_url_valued()).collect();
        assert_eq!(url_valued, vec![OgProperty::Url, OgProperty::Image]);
    }
}
