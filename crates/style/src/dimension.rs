//! Defines primitives for size and spacing.
use crate::parsers::{parse_dimension, parse_edges, run_parser};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A width/height-like value.
///
/// `Percent` holds the number as written (`50.0` for `50%`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    #[default]
    Auto,
    Px(f32),
    Percent(f32),
}

impl Dimension {
    pub fn is_auto(self) -> bool {
        matches!(self, Dimension::Auto)
    }

    /// Resolves against a known reference length. `Auto` stays unresolved.
    pub fn resolve(self, reference: f32) -> Option<f32> {
        match self {
            Dimension::Auto => None,
            Dimension::Px(v) => Some(v),
            Dimension::Percent(p) => Some(reference * p / 100.0),
        }
    }
}

impl Serialize for Dimension {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Dimension::Auto => serializer.serialize_str("auto"),
            Dimension::Px(v) => serializer.serialize_f32(*v),
            Dimension::Percent(v) => serializer.serialize_str(&format!("{}%", v)),
        }
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum DimensionDef {
            Num(f32),
            Str(String),
        }

        match DimensionDef::deserialize(deserializer)? {
            DimensionDef::Num(v) => Ok(Dimension::Px(v)),
            DimensionDef::Str(s) => run_parser(parse_dimension, &s).map_err(de::Error::custom),
        }
    }
}

/// Per-edge widths for padding, margin and border.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of the left and right edges.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom edges.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl<'de> Deserialize<'de> for Edges {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EdgesVisitor;
        impl<'de> de::Visitor<'de> for EdgesVisitor {
            type Value = Edges;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a number, a string like '4 8' or a map of edges")
            }

            fn visit_f64<E>(self, value: f64) -> Result<Edges, E>
            where
                E: de::Error,
            {
                Ok(Edges::all(value as f32))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Edges, E>
            where
                E: de::Error,
            {
                Ok(Edges::all(value as f32))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Edges, E>
            where
                E: de::Error,
            {
                Ok(Edges::all(value as f32))
            }

            fn visit_str<E>(self, value: &str) -> Result<Edges, E>
            where
                E: de::Error,
            {
                parse_edges(value).map_err(E::custom)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Edges, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut edges = Edges::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "top" => edges.top = map.next_value()?,
                        "right" => edges.right = map.next_value()?,
                        "bottom" => edges.bottom = map.next_value()?,
                        "left" => edges.left = map.next_value()?,
                        other => {
                            return Err(de::Error::unknown_field(
                                other,
                                &["top", "right", "bottom", "left"],
                            ));
                        }
                    }
                }
                Ok(edges)
            }
        }
        deserializer.deserialize_any(EdgesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_resolve() {
        assert_eq!(Dimension::Px(12.0).resolve(400.0), Some(12.0));
        assert_eq!(Dimension::Percent(25.0).resolve(400.0), Some(100.0));
        assert_eq!(Dimension::Auto.resolve(400.0), None);
    }

    #[test]
    fn test_dimension_deserialize_forms() {
        let d: Dimension = serde_json::from_str("120").unwrap();
        assert_eq!(d, Dimension::Px(120.0));
        let d: Dimension = serde_json::from_str("\"50%\"").unwrap();
        assert_eq!(d, Dimension::Percent(50.0));
        let d: Dimension = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(d, Dimension::Auto);
        let d: Dimension = serde_json::from_str("\"32px\"").unwrap();
        assert_eq!(d, Dimension::Px(32.0));
        assert!(serde_json::from_str::<Dimension>("\"wide\"").is_err());
    }

    #[test]
    fn test_dimension_serialize_forms() {
        assert_eq!(serde_json::to_string(&Dimension::Percent(50.0)).unwrap(), "\"50%\"");
        assert_eq!(serde_json::to_string(&Dimension::Auto).unwrap(), "\"auto\"");
        assert_eq!(serde_json::to_string(&Dimension::Px(8.0)).unwrap(), "8.0");
    }

    #[test]
    fn test_edges_deserialize_forms() {
        let e: Edges = serde_json::from_str("4").unwrap();
        assert_eq!(e, Edges::all(4.0));
        let e: Edges = serde_json::from_str("\"4 8\"").unwrap();
        assert_eq!(e, Edges::new(4.0, 8.0, 4.0, 8.0));
        let e: Edges = serde_json::from_str(r#"{"top": 1, "left": 2}"#).unwrap();
        assert_eq!(e, Edges::new(1.0, 0.0, 0.0, 2.0));
        assert!(serde_json::from_str::<Edges>(r#"{"middle": 1}"#).is_err());
    }

    #[test]
    fn test_edges_sums() {
        let e = Edges::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(e.horizontal(), 6.0);
        assert_eq!(e.vertical(), 4.0);
    }
}
