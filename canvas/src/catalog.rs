//! Object categories and the default tables that seed new objects.
//!
//! Size, color and display name are looked up by subtype first, then by
//! category, then fall back to global defaults.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse object category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Building,
    Transport,
    Nature,
    Furniture,
    Zone,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Building => "building",
            Self::Transport => "transport",
            Self::Nature => "nature",
            Self::Furniture => "furniture",
            Self::Zone => "zone",
        }
    }

    fn default_color(self) -> &'static str {
        match self {
            Self::Building => "#8B4513",
            Self::Transport => "#696969",
            Self::Nature => "#228B22",
            Self::Furniture => "#4682B4",
            Self::Zone => "#FFD700",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "building" => Ok(Self::Building),
            "transport" => Ok(Self::Transport),
            "nature" => Ok(Self::Nature),
            "furniture" => Ok(Self::Furniture),
            "zone" => Ok(Self::Zone),
            other => Err(UnknownCategory(other.to_owned())),
        }
    }
}

/// Default `(width, height)` in scene units for a subtype, or `None` when the
/// subtype has no dedicated entry.
#[must_use]
pub fn default_size(subtype: &str) -> Option<(f64, f64)> {
    let size = match subtype {
        "road" => (200.0, 40.0),
        "parking" => (150.0, 100.0),
        "car" => (30.0, 20.0),
        "bus" => (40.0, 25.0),
        "bench" => (20.0, 15.0),
        "lamp" | "trash" | "sign" => (10.0, 10.0),
        "tree" => (30.0, 30.0),
        _ => return None,
    };
    Some(size)
}

/// Default fill color: a few subtypes have their own, the rest use the
/// category color.
#[must_use]
pub fn default_color(category: Category, subtype: &str) -> &'static str {
    match subtype {
        "road" => "#404040",
        "parking" => "#606060",
        "sidewalk" => "#D3D3D3",
        _ => category.default_color(),
    }
}

/// Default display name for a subtype.
#[must_use]
pub fn default_name(subtype: &str) -> &'static str {
    match subtype {
        "shop" => "Shop",
        "office" => "Office",
        "warehouse" => "Warehouse",
        "restaurant" => "Restaurant",
        "parking" => "Parking",
        "road" => "Road",
        "car" => "Car",
        "bus" => "Bus",
        "tree" => "Tree",
        "park" => "Park",
        "garden" => "Garden",
        "water" => "Water",
        "bench" => "Bench",
        "lamp" => "Street lamp",
        "trash" => "Trash bin",
        "sign" => "Sign",
        "pedestrian" => "Pedestrian zone",
        "sidewalk" => "Sidewalk",
        "plaza" => "Plaza",
        "loading" => "Loading zone",
        _ => "Object",
    }
}

/// Summary bucket an object's area counts towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaBucket {
    Building,
    Parking,
    Green,
}

/// Which summary bucket (if any) a `(category, subtype)` pair falls into.
/// The buckets are mutually exclusive.
#[must_use]
pub fn area_bucket(category: Category, subtype: &str) -> Option<AreaBucket> {
    match category {
        Category::Building => Some(AreaBucket::Building),
        Category::Transport if subtype == "parking" => Some(AreaBucket::Parking),
        Category::Nature => Some(AreaBucket::Green),
        _ => None,
    }
}

/// Whether the selection overlay shows a surface label for this object.
#[must_use]
pub fn shows_surface(category: Category, subtype: &str) -> bool {
    matches!(category, Category::Building | Category::Zone) || (category == Category::Transport && subtype == "parking")
}
