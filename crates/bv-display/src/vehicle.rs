use bv_core::geo::wrap_angle;
use bv_core::{Vec2, VehicleId};
use bv_vehicle::Vehicle;

/// Pose of one vehicle as the renderer sees it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleDisplay {
    pub id:       VehicleId,
    pub position: Vec2,
    /// Raw physics heading in radians.
    pub heading:  f64,
}

impl VehicleDisplay {
    pub fn new(id: VehicleId, vehicle: &Vehicle) -> Self {
        Self { id, position: vehicle.position(), heading: vehicle.heading() }
    }

    pub fn sync(&mut self, vehicle: &Vehicle) {
        self.position = vehicle.position();
        self.heading = vehicle.heading();
    }

    /// Heading wrapped into `[0, 2π)`.
    pub fn display_heading(&self) -> f64 {
        wrap_angle(self.heading)
    }

    /// Heading in degrees, `[0, 360)`.
    pub fn display_heading_degrees(&self) -> f64 {
        self.display_heading().to_degrees()
    }
}
