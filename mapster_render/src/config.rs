use crate::RenderError;
use anyhow::Result;
use serde::Deserialize;
use std::io::Read;

/// Canvas and worker settings of a render pass.
///
/// ```yaml
/// width: 1024
/// height: 768
/// background: [255, 255, 255, 255]
/// workers: 4
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct RenderConfig {
	/// Canvas width in pixels.
	pub width: u32,

	/// Canvas height in pixels.
	pub height: u32,

	/// RGBA colour the canvas is cleared with.
	pub background: [u8; 4],

	/// Number of tessellation threads. Defaults to the number of CPUs.
	pub workers: Option<usize>,
}

impl Default for RenderConfig {
	fn default() -> Self {
		RenderConfig {
			width: 800,
			height: 600,
			background: [255, 255, 255, 255],
			workers: None,
		}
	}
}

impl RenderConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	/// Fails with [`RenderError::InvalidCanvas`] if either canvas dimension is zero.
	pub fn validate(&self) -> Result<()> {
		if self.width == 0 || self.height == 0 {
			return Err(RenderError::InvalidCanvas {
				width: self.width,
				height: self.height,
			}
			.into());
		}
		Ok(())
	}

	/// The configured worker count, or the number of CPUs. Never zero.
	pub fn worker_count(&self) -> usize {
		self.workers.unwrap_or_else(num_cpus::get).max(1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn parse_empty_config() {
		assert_eq!(RenderConfig::from_string("").unwrap(), RenderConfig::default());
	}

	#[test]
	fn parse_full_config() {
		let config = RenderConfig::from_string("width: 1024\nheight: 768\nbackground: [0, 0, 0, 255]\nworkers: 3\n").unwrap();
		assert_eq!(
			config,
			RenderConfig {
				width: 1024,
				height: 768,
				background: [0, 0, 0, 255],
				workers: Some(3),
			}
		);
		assert_eq!(config.worker_count(), 3);
	}

	#[test]
	fn parse_partial_config_from_reader() {
		let config = RenderConfig::from_reader("height: 100".as_bytes()).unwrap();
		assert_eq!(config.width, 800);
		assert_eq!(config.height, 100);
	}

	#[test]
	fn parse_invalid_config() {
		assert!(RenderConfig::from_string("widht: 10").is_err());
		assert!(RenderConfig::from_string("width: -1").is_err());
	}

	#[test]
	fn validate_canvas() {
		assert!(RenderConfig::default().validate().is_ok());
		let error = RenderConfig {
			width: 0,
			..RenderConfig::default()
		}
		.validate()
		.unwrap_err();
		assert_eq!(
			error.downcast_ref::<RenderError>(),
			Some(&RenderError::InvalidCanvas { width: 0, height: 600 })
		);
	}

	#[test]
	fn worker_count_is_never_zero() {
		let config = RenderConfig {
			workers: Some(0),
			..RenderConfig::default()
		};
		assert_eq!(config.worker_count(), 1);
		assert!(RenderConfig::default().worker_count() >= 1);
	}
}
