//! Pointer ray picking against the globe sphere.
//!
//! Two raycasts share the pointer and camera each frame but run at
//! different cadences: the glow cast runs every frame to track the
//! cursor's world position, while the identification cast is throttled
//! and produces the UV sample consumed by the identifier maps.

use std::f32::consts::PI;

use glam::{Mat4, Vec2, Vec3};

/// A world-space ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Builds the ray through a pointer position given in normalized
    /// device coordinates, using the camera's inverse view-projection
    /// matrix. Depth follows the wgpu convention (`0` near, `1` far).
    #[must_use]
    pub fn from_ndc(ndc: Vec2, inv_view_proj: Mat4) -> Self {
        let near = inv_view_proj.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv_view_proj.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Self {
            origin: near,
            dir: (far - near).normalize(),
        }
    }

    /// Nearest intersection with a sphere centered at the origin, if any.
    #[must_use]
    pub fn hit_sphere(&self, radius: f32) -> Option<Vec3> {
        let b = self.origin.dot(self.dir);
        let c = self.origin.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let mut t = -b - sqrt_disc;
        if t < 0.0 {
            t = -b + sqrt_disc;
        }
        (t >= 0.0).then(|| self.origin + self.dir * t)
    }
}

/// Result of one frame of pointer picking.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PickOutput {
    /// Fresh identification UV, present only when `uv_updated`.
    pub uv: Option<Vec2>,
    /// Unit-sphere cursor position for the glow highlight, when the ray
    /// hit the globe this frame.
    pub glow_position: Option<Vec3>,
    /// Whether the cursor is currently over the globe.
    pub on_globe: bool,
    /// Whether a new identification sample was produced this frame. When
    /// false, downstream consumers reuse the previous hover id.
    pub uv_updated: bool,
}

/// Per-frame pointer picking with a throttled identification lane.
#[derive(Debug)]
pub struct PointerPicker {
    interval_ms: f64,
    last_raycast_ms: f64,
    globe_radius: f32,
}

impl PointerPicker {
    /// Creates a picker. `interval_ms` is the minimum delay between
    /// identification raycasts.
    #[must_use]
    pub fn new(interval_ms: f64, globe_radius: f32) -> Self {
        Self {
            interval_ms,
            last_raycast_ms: 0.0,
            globe_radius,
        }
    }

    /// Timestamp of the last identification raycast, in milliseconds.
    #[must_use]
    pub fn last_raycast_ms(&self) -> f64 {
        self.last_raycast_ms
    }

    /// Runs both raycasts for one frame.
    ///
    /// `pointer_moved` is false until the user moves the pointer for the
    /// first time; both casts are skipped then so a default `(0, 0)`
    /// pointer cannot produce a spurious hit. `pointer_active` gates the
    /// identification lane to pointers that moved within the recency
    /// window. `globe_rotation` is the globe's current spin in radians,
    /// applied to the hit longitude before the UV mapping.
    ///
    /// On an identification miss the previous UV is deliberately left in
    /// the caller's hands (no sample is emitted), which avoids hover
    /// flicker between throttled samples.
    pub fn update(
        &mut self,
        pointer_ndc: Vec2,
        inv_view_proj: Mat4,
        globe_rotation: f32,
        pointer_moved: bool,
        pointer_active: bool,
        now_ms: f64,
    ) -> PickOutput {
        if !pointer_moved {
            return PickOutput::default();
        }

        let ray = Ray::from_ndc(pointer_ndc, inv_view_proj);
        let hit = ray.hit_sphere(self.globe_radius);

        // Glow lane: every frame. A miss clears the flag but keeps the
        // last known position to avoid flicker.
        let glow_position = hit.map(Vec3::normalize);
        let mut on_globe = hit.is_some();

        // Identification lane: throttled.
        let mut uv = None;
        let mut uv_updated = false;
        if pointer_active && now_ms - self.last_raycast_ms > self.interval_ms {
            self.last_raycast_ms = now_ms;
            match hit {
                Some(point) => {
                    let p = point.normalize();
                    let longitude = p.z.atan2(p.x);
                    let latitude = p.y.asin();

                    let corrected = longitude + globe_rotation;
                    let u = (0.5 - corrected / (2.0 * PI)).rem_euclid(1.0);
                    let v = (0.5 + latitude / PI).clamp(0.0, 1.0);

                    uv = Some(Vec2::new(u, v));
                    on_globe = true;
                    uv_updated = true;
                }
                None => {
                    on_globe = false;
                }
            }
        }

        PickOutput {
            uv,
            glow_position,
            on_globe,
            uv_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PointerPicker, Ray};
    use glam::{Mat4, Vec2, Vec3};

    /// Camera looking at the globe center from +Z.
    fn inv_view_proj() -> Mat4 {
        let proj = Mat4::perspective_rh(45f32.to_radians(), 1.0, 0.1, 100.0);
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        (proj * view).inverse()
    }

    #[test]
    fn center_ray_hits_sphere_front() {
        let ray = Ray::from_ndc(Vec2::ZERO, inv_view_proj());
        let hit = ray.hit_sphere(1.0).expect("hit");
        // Nearest intersection faces the camera.
        assert!(hit.z > 0.99);
        assert!(hit.x.abs() < 1e-3 && hit.y.abs() < 1e-3);
    }

    #[test]
    fn edge_ray_misses_sphere() {
        let ray = Ray::from_ndc(Vec2::new(0.95, 0.95), inv_view_proj());
        assert!(ray.hit_sphere(1.0).is_none());
    }

    #[test]
    fn untouched_pointer_skips_both_casts() {
        let mut picker = PointerPicker::new(100.0, 1.0);
        for frame in 0..100 {
            let out = picker.update(
                Vec2::ZERO,
                inv_view_proj(),
                0.0,
                false,
                false,
                f64::from(frame) * 16.0,
            );
            assert!(!out.on_globe);
            assert!(out.uv.is_none());
            assert!(out.glow_position.is_none());
            assert!(!out.uv_updated);
        }
    }

    #[test]
    fn identification_is_throttled() {
        let mut picker = PointerPicker::new(100.0, 1.0);
        let m = inv_view_proj();

        let first = picker.update(Vec2::ZERO, m, 0.0, true, true, 1_000.0);
        assert!(first.uv_updated);
        let uv = first.uv.expect("uv");

        // Second call inside the interval: glow still runs, no new sample.
        let second = picker.update(Vec2::ZERO, m, 0.0, true, true, 1_050.0);
        assert!(!second.uv_updated);
        assert!(second.uv.is_none());
        assert!(second.on_globe);
        assert!(second.glow_position.is_some());

        // Past the interval the sample refreshes and matches (same ray).
        let third = picker.update(Vec2::ZERO, m, 0.0, true, true, 1_150.0);
        assert!(third.uv_updated);
        assert_eq!(third.uv, Some(uv));
    }

    #[test]
    fn center_hit_maps_to_equator() {
        let mut picker = PointerPicker::new(100.0, 1.0);
        let out = picker.update(Vec2::ZERO, inv_view_proj(), 0.0, true, true, 1_000.0);
        let uv = out.uv.expect("uv");
        // The hit is on the equator facing +Z: lat 0 -> v = 0.5, and
        // lon pi/2 -> u = 0.25.
        assert!((uv.y - 0.5).abs() < 1e-3);
        assert!((uv.x - 0.25).abs() < 1e-3);
    }

    #[test]
    fn rotation_offsets_longitude() {
        let mut picker = PointerPicker::new(100.0, 1.0);
        let rotation = std::f32::consts::FRAC_PI_2;
        let out = picker.update(Vec2::ZERO, inv_view_proj(), rotation, true, true, 1_000.0);
        let uv = out.uv.expect("uv");
        // A quarter turn shifts u by -0.25, wrapped into [0, 1).
        assert!(uv.x.abs() < 1e-3 || (uv.x - 1.0).abs() < 1e-3);
    }
}
