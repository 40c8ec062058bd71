//! Colours and stroke widths of the built-in shapes.

use crate::GeoFeatureKind;
use image::Rgba;
use mapster_core::{HighwayType, UrbanType};

pub const WATER: Rgba<u8> = Rgba([170, 211, 223, 255]);
pub const WATERWAY_WIDTH: f64 = 2.0;

pub const BORDER: Rgba<u8> = Rgba([150, 110, 160, 255]);
pub const BORDER_WIDTH: f64 = 2.0;

pub const RAILWAY: Rgba<u8> = Rgba([110, 110, 110, 255]);
pub const RAILWAY_WIDTH: f64 = 2.0;

pub const PLACE: Rgba<u8> = Rgba([40, 40, 40, 255]);

pub fn road_color(highway: HighwayType) -> Rgba<u8> {
	match highway {
		HighwayType::Motorway => Rgba([232, 146, 162, 255]),
		HighwayType::Trunk => Rgba([249, 178, 156, 255]),
		HighwayType::Primary => Rgba([252, 214, 164, 255]),
		HighwayType::Secondary => Rgba([247, 250, 191, 255]),
		_ => Rgba([200, 200, 200, 255]),
	}
}

pub fn road_width(highway: HighwayType) -> f64 {
	match highway {
		HighwayType::Motorway => 5.0,
		HighwayType::Trunk => 4.5,
		HighwayType::Primary => 4.0,
		HighwayType::Secondary => 3.5,
		HighwayType::Tertiary => 3.0,
		HighwayType::Residential | HighwayType::Road | HighwayType::Unclassified | HighwayType::Unrecognized => 2.0,
	}
}

pub fn place_radius(urban: UrbanType) -> f64 {
	match urban {
		UrbanType::City => 5.0,
		UrbanType::Town => 4.0,
		UrbanType::Locality | UrbanType::Hamlet | UrbanType::Unrecognized => 3.0,
	}
}

pub fn geo_feature_color(kind: GeoFeatureKind) -> Rgba<u8> {
	match kind {
		GeoFeatureKind::Plain => Rgba([205, 235, 176, 255]),
		GeoFeatureKind::Hills => Rgba([212, 206, 170, 255]),
		GeoFeatureKind::Mountains => Rgba([200, 192, 184, 255]),
		GeoFeatureKind::Forest => Rgba([173, 209, 158, 255]),
		GeoFeatureKind::Desert => Rgba([245, 233, 198, 255]),
		GeoFeatureKind::Unknown => Rgba([235, 235, 225, 255]),
		GeoFeatureKind::Water => WATER,
		GeoFeatureKind::Residential => Rgba([224, 223, 223, 255]),
	}
}
