//! Location reference data
//!
//! The supported sites form a closed set, so the directory is a plain enum
//! with pure lookup functions instead of runtime tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// A supported advisory site
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LocationCode {
    /// 合歡山
    Hhs,
    /// 太平山
    Tps,
    /// 玉山
    Ys,
    /// 雪霸國家公園
    Sp,
    /// 陽明山、七星山
    Yms,
    /// 武陵農場
    Wl,
    /// 台14甲線
    T14j,
    /// 台8線
    T8,
    /// 台7線
    T7,
    /// 台7甲線
    T7j,
}

/// Which risk ruleset and color scheme apply to a site
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LocationCategory {
    Mountain,
    Road,
}

/// Error for unrecognized location codes
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("unknown location code: {0}")]
pub struct UnknownLocationCode(pub String);

impl LocationCode {
    /// All supported codes, in directory order
    pub const ALL: [LocationCode; 10] = [
        LocationCode::Hhs,
        LocationCode::Tps,
        LocationCode::Ys,
        LocationCode::Sp,
        LocationCode::Yms,
        LocationCode::Wl,
        LocationCode::T14j,
        LocationCode::T8,
        LocationCode::T7,
        LocationCode::T7j,
    ];

    /// Short identifier as used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationCode::Hhs => "hhs",
            LocationCode::Tps => "tps",
            LocationCode::Ys => "ys",
            LocationCode::Sp => "sp",
            LocationCode::Yms => "yms",
            LocationCode::Wl => "wl",
            LocationCode::T14j => "t14j",
            LocationCode::T8 => "t8",
            LocationCode::T7 => "t7",
            LocationCode::T7j => "t7j",
        }
    }

    /// Coordinate queried against the forecast provider
    pub fn coordinates(&self) -> GpsCoordinates {
        match self {
            LocationCode::Hhs => GpsCoordinates::new(24.15, 121.27),
            LocationCode::Tps => GpsCoordinates::new(24.48, 121.53),
            LocationCode::Ys => GpsCoordinates::new(23.47, 120.96),
            LocationCode::Sp => GpsCoordinates::new(24.38, 121.03),
            LocationCode::Yms => GpsCoordinates::new(25.15, 121.55),
            LocationCode::Wl => GpsCoordinates::new(24.37, 121.32),
            LocationCode::T14j => GpsCoordinates::new(24.12, 121.27),
            LocationCode::T8 => GpsCoordinates::new(24.18, 121.33),
            LocationCode::T7 => GpsCoordinates::new(24.42, 121.21),
            LocationCode::T7j => GpsCoordinates::new(24.42, 121.36),
        }
    }

    /// Human-readable site name (Traditional Chinese, as displayed)
    pub fn display_name(&self) -> &'static str {
        match self {
            LocationCode::Hhs => "合歡山",
            LocationCode::Tps => "太平山",
            LocationCode::Ys => "玉山",
            LocationCode::Sp => "雪霸國家公園",
            LocationCode::Yms => "陽明山、七星山",
            LocationCode::Wl => "武陵農場",
            LocationCode::T14j => "台14甲線",
            LocationCode::T8 => "台8線",
            LocationCode::T7 => "台7線",
            LocationCode::T7j => "台7甲線",
        }
    }

    /// Ruleset selector. Road membership is a fixed set; note that t7j is
    /// NOT in it even though the site is a highway segment.
    pub fn category(&self) -> LocationCategory {
        match self {
            LocationCode::T14j | LocationCode::T8 | LocationCode::T7 => LocationCategory::Road,
            _ => LocationCategory::Mountain,
        }
    }

    /// Interactive hazard-map link, passed through to clients unmodified
    pub fn map_url(&self) -> &'static str {
        match self {
            LocationCode::Hhs => "https://archive.maps.arcgis.com/apps/instant/interactivelegend/index.html?appid=fea672521dfe414597bb73819fdee87f",
            LocationCode::Tps => "https://archive.maps.arcgis.com/apps/instant/interactivelegend/index.html?appid=e9e10c2abc134b5b96e89e98bbf9b24f",
            LocationCode::Ys => "https://archive.maps.arcgis.com/apps/instant/interactivelegend/index.html?appid=b035df9646804489989e754ca8a2494a",
            LocationCode::Sp => "https://archive.maps.arcgis.com/apps/configure-template/index.html?appid=2fc2d80fe8144ac7a13118341f242bae",
            LocationCode::Yms => "https://archive.maps.arcgis.com/apps/instant/interactivelegend/index.html?appid=38ade048ccb5409c8604d6d1d887e68d",
            LocationCode::Wl => "https://archive.maps.arcgis.com/apps/instant/interactivelegend/index.html?appid=f583791e3f514a659005eacb6a20c5a0",
            LocationCode::T14j => "https://archive.maps.arcgis.com/apps/instant/interactivelegend/index.html?appid=f17b53fbf44d4294af12330a7349f0d5",
            LocationCode::T8 => "https://archive.maps.arcgis.com/apps/instant/interactivelegend/index.html?appid=0ee94777e4d24406824e3588824e00e8",
            LocationCode::T7 => "https://archive.maps.arcgis.com/apps/instant/interactivelegend/index.html?appid=7d2c06ef3c2844948c2ff104d66d2296",
            LocationCode::T7j => "https://archive.maps.arcgis.com/apps/instant/interactivelegend/index.html?appid=be188814208b4c3785e090de2e066a53",
        }
    }
}

impl FromStr for LocationCode {
    type Err = UnknownLocationCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hhs" => Ok(LocationCode::Hhs),
            "tps" => Ok(LocationCode::Tps),
            "ys" => Ok(LocationCode::Ys),
            "sp" => Ok(LocationCode::Sp),
            "yms" => Ok(LocationCode::Yms),
            "wl" => Ok(LocationCode::Wl),
            "t14j" => Ok(LocationCode::T14j),
            "t8" => Ok(LocationCode::T8),
            "t7" => Ok(LocationCode::T7),
            "t7j" => Ok(LocationCode::T7j),
            other => Err(UnknownLocationCode(other.to_string())),
        }
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
