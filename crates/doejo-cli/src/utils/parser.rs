use spme_doejo::engine::config::CenterPoints;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "Invalid center-point count '{0}'. Expected a non-negative integer or 'recommended'."
    )]
    InvalidCenterPoints(String),

    #[error("Invalid boolean '{0}'. Expected 'true' or 'false'.")]
    InvalidBool(String),
}

pub fn parse_center_points(value: &str) -> Result<CenterPoints, ParseError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("recommended") {
        return Ok(CenterPoints::Recommended);
    }
    match value.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(CenterPoints::Count(n)),
        _ => Err(ParseError::InvalidCenterPoints(value.to_string())),
    }
}

pub fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ParseError::InvalidBool(value.to_string())),
    }
}
