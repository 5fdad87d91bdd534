use spme_doejo::engine::config::CenterPoints;

pub struct DefaultsConfig {
    pub center_points: CenterPoints,
    pub salt_in_design: bool,
    pub high_viscosity: bool,
    pub ionic: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            center_points: CenterPoints::Count(1),
            salt_in_design: true,
            high_viscosity: false,
            ionic: false,
        }
    }
}
