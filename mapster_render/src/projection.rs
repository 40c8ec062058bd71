//! Spherical Web Mercator projection into screen space.
//!
//! Screen coordinates are metres on the projection plane with `y` growing northwards. The renderer
//! flips `y` when it fits the scene onto a canvas.

use geo::Coord;
use mapster_core::{Coordinate, CoordinateView};
use std::f64::consts::FRAC_PI_4;

/// Radius of the sphere used by Web Mercator, in metres.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitudes beyond this limit are clamped, the projection diverges at the poles.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

pub fn project(coordinate: Coordinate) -> Coord<f64> {
	let latitude = coordinate.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
	let longitude = coordinate.longitude.to_radians();
	Coord {
		x: EARTH_RADIUS * longitude,
		y: EARTH_RADIUS * (FRAC_PI_4 + latitude / 2.0).tan().ln(),
	}
}

pub fn project_all(coordinates: CoordinateView<'_>) -> Vec<Coord<f64>> {
	coordinates.iter().map(project).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;

	#[test]
	fn origin() {
		let c = project(Coordinate::new(0.0, 0.0));
		assert_abs_diff_eq!(c.x, 0.0);
		assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-9);
	}

	#[test]
	fn known_values() {
		let c = project(Coordinate::new(52.52, 13.405));
		assert_abs_diff_eq!(c.x, 1_492_237.8, epsilon = 1.0);
		assert_abs_diff_eq!(c.y, 6_894_699.8, epsilon = 1.0);
	}

	#[test]
	fn clamps_poles() {
		let pole = project(Coordinate::new(90.0, 180.0));
		assert!(pole.y.is_finite());
		assert_abs_diff_eq!(pole.x, 20_037_508.342_789_244, epsilon = 1e-6);
		assert_abs_diff_eq!(pole.y, 20_037_508.342_789_244, epsilon = 1e-3);
	}

	#[test]
	fn northwards_is_up() {
		let south = project(Coordinate::new(10.0, 0.0));
		let north = project(Coordinate::new(20.0, 0.0));
		assert!(north.y > south.y);
	}
}
