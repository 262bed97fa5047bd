//! Circular orbits in the XZ plane, advanced by elapsed time.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::data::BodyRecord;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    pub radius: f32,
    /// Current angle in radians, kept in `[0, TAU)`.
    pub angle: f32,
    /// Radians per second. Zero for stationary bodies.
    pub angular_velocity: f32,
}

impl Orbit {
    pub fn from_record(record: &BodyRecord, earth_year_seconds: f32) -> Self {
        Self {
            radius: record.orbit_radius,
            angle: record.initial_angle.rem_euclid(TAU),
            angular_velocity: angular_velocity(record, earth_year_seconds),
        }
    }

    pub fn advance(&mut self, elapsed_secs: f32) {
        self.angle = (self.angle + self.angular_velocity * elapsed_secs).rem_euclid(TAU);
    }

    pub fn position(&self) -> Vec3 {
        polar_to_cartesian(self.radius, self.angle)
    }

    /// Where the body will be after `secs` more seconds.
    pub fn position_after(&self, secs: f32) -> Vec3 {
        polar_to_cartesian(self.radius, self.angle + self.angular_velocity * secs)
    }
}

/// `2π / (period × earth_year_seconds)`, or zero when the body does not orbit.
pub fn angular_velocity(record: &BodyRecord, earth_year_seconds: f32) -> f32 {
    match record.orbit_period_years {
        Some(years) if record.orbits() && earth_year_seconds > 0.0 => {
            TAU / (years * earth_year_seconds)
        }
        _ => 0.0,
    }
}

// Azimuth measured from +Z toward +X.
fn polar_to_cartesian(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(radius * angle.sin(), 0.0, radius * angle.cos())
}

pub(crate) fn advance_orbits(time: Res<Time>, mut bodies: Query<(&mut Orbit, &mut Transform)>) {
    let elapsed = time.delta_secs();
    for (mut orbit, mut transform) in &mut bodies {
        orbit.advance(elapsed);
        transform.translation = orbit.position();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn record(years: Option<f32>) -> BodyRecord {
        BodyRecord {
            name: "Probe".to_string(),
            orbit_period_years: years,
            fake_radius: 1.0,
            visual_asset: String::new(),
            orbit_radius: 50.0,
            initial_angle: 0.5,
            color: [1.0; 3],
            rings: None,
        }
    }

    #[test]
    fn angle_advances_by_period_fraction() {
        let mut orbit = Orbit::from_record(&record(Some(0.25)), 120.0);
        let start = orbit.angle;

        orbit.advance(7.5);

        let expected = (start + TAU * 7.5 / (0.25 * 120.0)).rem_euclid(TAU);
        assert!((orbit.angle - expected).abs() < 1e-5);
        assert!((orbit.position().length() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn full_period_returns_to_start() {
        let mut orbit = Orbit::from_record(&record(Some(1.0)), 120.0);
        let start = orbit.position();

        for _ in 0..120 {
            orbit.advance(1.0);
        }

        assert!(orbit.position().distance(start) < 1e-2);
        assert!((0.0..TAU).contains(&orbit.angle));
    }

    #[test]
    fn stationary_bodies_do_not_move() {
        let mut orbit = Orbit::from_record(&record(None), 120.0);
        let start = orbit.position();

        orbit.advance(1000.0);

        assert_eq!(orbit.angular_velocity, 0.0);
        assert_eq!(orbit.position(), start);
        assert_eq!(orbit.position_after(30.0), start);
    }

    #[test]
    fn projection_matches_advancing() {
        let mut orbit = Orbit::from_record(&record(Some(0.62)), 120.0);
        let projected = orbit.position_after(5.0);

        orbit.advance(5.0);

        assert!(orbit.position().distance(projected) < 1e-3);
    }

    #[test]
    fn system_moves_every_body_independently() {
        let mut app = App::new();
        app.insert_resource(Time::<()>::default())
            .add_systems(Update, advance_orbits);

        let fast = Orbit::from_record(&record(Some(0.24)), 120.0);
        let slow = Orbit::from_record(&record(Some(11.86)), 120.0);
        let fixed = Orbit::from_record(&record(None), 120.0);
        let ids = [fast, slow, fixed].map(|orbit| {
            app.world_mut()
                .spawn((orbit, Transform::from_translation(orbit.position())))
                .id()
        });

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(3));
        app.update();

        for (id, before) in ids.iter().zip([fast, slow, fixed]) {
            let orbit = app.world().get::<Orbit>(*id).unwrap();
            let expected = (before.angle + before.angular_velocity * 3.0).rem_euclid(TAU);
            assert!((orbit.angle - expected).abs() < 1e-5);
            let transform = app.world().get::<Transform>(*id).unwrap();
            assert_eq!(transform.translation, orbit.position());
        }
    }
}
