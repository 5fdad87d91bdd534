use crate::core::design::bbd;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// How many center-point replicates to append to the design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CenterPoints {
    /// An explicit count. Negative values are rejected by the design generator.
    Count(i64),
    /// The conventional count for the number of factors actually in the design.
    Recommended,
}

impl CenterPoints {
    pub fn resolve(self, factors: usize) -> i64 {
        match self {
            CenterPoints::Count(n) => n,
            CenterPoints::Recommended => bbd::recommended_center_points(factors) as i64,
        }
    }
}

impl Default for CenterPoints {
    fn default() -> Self {
        CenterPoints::Count(1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignConfig {
    pub center_points: CenterPoints,
    /// When false, salt addition is held at the lower edge of its range instead of varied.
    pub salt_in_design: bool,
}

#[derive(Default)]
pub struct DesignConfigBuilder {
    center_points: Option<CenterPoints>,
    salt_in_design: Option<bool>,
}

impl DesignConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center_points(mut self, center_points: CenterPoints) -> Self {
        self.center_points = Some(center_points);
        self
    }
    pub fn salt_in_design(mut self, include: bool) -> Self {
        self.salt_in_design = Some(include);
        self
    }

    pub fn build(self) -> Result<DesignConfig, ConfigError> {
        Ok(DesignConfig {
            center_points: self
                .center_points
                .ok_or(ConfigError::MissingParameter("center_points"))?,
            salt_in_design: self
                .salt_in_design
                .ok_or(ConfigError::MissingParameter("salt_in_design"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_every_parameter() {
        let result = DesignConfigBuilder::new()
            .center_points(CenterPoints::Count(3))
            .build();
        assert_eq!(
            result,
            Err(ConfigError::MissingParameter("salt_in_design"))
        );

        let result = DesignConfigBuilder::new().salt_in_design(true).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("center_points")));
    }

    #[test]
    fn builder_produces_the_configured_values() {
        let config = DesignConfigBuilder::new()
            .center_points(CenterPoints::Recommended)
            .salt_in_design(false)
            .build()
            .unwrap();
        assert_eq!(config.center_points, CenterPoints::Recommended);
        assert!(!config.salt_in_design);
    }

    #[test]
    fn center_points_resolve_against_the_factor_count() {
        assert_eq!(CenterPoints::Count(5).resolve(4), 5);
        assert_eq!(CenterPoints::Count(-1).resolve(4), -1);
        assert_eq!(CenterPoints::Recommended.resolve(3), 3);
        assert_eq!(CenterPoints::Recommended.resolve(4), 3);
        assert_eq!(CenterPoints::default(), CenterPoints::Count(1));
    }
}
