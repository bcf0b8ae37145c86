/// Frustum: eight corners and six inward-facing planes for visibility culling.
///
/// Each plane is a (point, normal) pair. A point P is inside the frustum if
/// `dot(normal, P - point) >= 0` for all six planes.
///
/// Derived from a pose (position, front, up) and perspective parameters in
/// the left-handed convention, where `right = up × front`. Ephemeral: a
/// fresh value is computed on every call.

use glam::Vec3;

/// Result of a 3-way frustum/AABB classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// AABB is entirely outside the frustum
    Outside,
    /// AABB is entirely inside the frustum
    Inside,
    /// AABB partially overlaps the frustum
    Partial,
}

/// Frustum plane indices into `Frustum::planes()`
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Slack for points lying exactly on a plane (corners, edges).
pub const PLANE_TOLERANCE: f32 = 1e-4;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

/// Plane through `point` with unit `normal` pointing into the frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    /// Positive on the inner side.
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p - self.point)
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveParams {
    /// Vertical field of view in radians
    pub fov_y_radians: f32,
    /// Viewport width / height
    pub aspect_ratio: f32,
    /// Near plane distance
    pub near: f32,
    /// Far plane (draw) distance
    pub far: f32,
}

/// Corners and bounding planes of a view frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Near top left
    pub ntl: Vec3,
    /// Near top right
    pub ntr: Vec3,
    /// Near bottom left
    pub nbl: Vec3,
    /// Near bottom right
    pub nbr: Vec3,
    /// Far top left
    pub ftl: Vec3,
    /// Far top right
    pub ftr: Vec3,
    /// Far bottom left
    pub fbl: Vec3,
    /// Far bottom right
    pub fbr: Vec3,

    pub near: Plane,
    pub far: Plane,
    pub left: Plane,
    pub right: Plane,
    pub top: Plane,
    pub bottom: Plane,
}

impl Frustum {
    /// Derive the frustum of a camera at `position` looking along `front`.
    ///
    /// `front` and `up` must be unit length and orthogonal. Both the near and
    /// far centres are measured from `position`.
    pub fn from_pose(position: Vec3, front: Vec3, up: Vec3, params: &PerspectiveParams) -> Self {
        let tan_half_fov = (params.fov_y_radians / 2.0).tan();

        let near_half_height = tan_half_fov * params.near;
        let near_half_width = near_half_height * params.aspect_ratio;
        let far_half_height = tan_half_fov * params.far;
        let far_half_width = far_half_height * params.aspect_ratio;

        let right = up.cross(front).normalize();

        let nc = position + front * params.near;
        let fc = position + front * params.far;

        let up_near = up * near_half_height;
        let right_near = right * near_half_width;
        let up_far = up * far_half_height;
        let right_far = right * far_half_width;

        // Side planes pass through the eye; each normal is the cross product
        // of the eye-to-edge direction with the edge's axis, ordered so the
        // interior is on the positive side.
        let to_right_edge = (nc + right_near - position).normalize();
        let to_left_edge = (nc - right_near - position).normalize();
        let to_top_edge = (nc + up_near - position).normalize();
        let to_bottom_edge = (nc - up_near - position).normalize();

        Self {
            ftl: fc + up_far - right_far,
            ftr: fc + up_far + right_far,
            fbl: fc - up_far - right_far,
            fbr: fc - up_far + right_far,
            ntl: nc + up_near - right_near,
            ntr: nc + up_near + right_near,
            nbl: nc - up_near - right_near,
            nbr: nc - up_near + right_near,

            near: Plane { point: nc, normal: front },
            far: Plane { point: fc, normal: -front },
            right: Plane { point: position, normal: to_right_edge.cross(up) },
            left: Plane { point: position, normal: up.cross(to_left_edge) },
            top: Plane { point: position, normal: right.cross(to_top_edge) },
            bottom: Plane { point: position, normal: to_bottom_edge.cross(right) },
        }
    }

    /// Corners in near-then-far order: tl, tr, bl, br.
    pub fn corners(&self) -> [Vec3; 8] {
        [
            self.ntl, self.ntr, self.nbl, self.nbr,
            self.ftl, self.ftr, self.fbl, self.fbr,
        ]
    }

    /// Planes indexed by `PLANE_LEFT..=PLANE_FAR`.
    pub fn planes(&self) -> [Plane; 6] {
        [self.left, self.right, self.bottom, self.top, self.near, self.far]
    }

    /// Whether `p` is inside or on the frustum (within `PLANE_TOLERANCE`).
    pub fn contains_point(&self, p: Vec3) -> bool {
        self.planes()
            .iter()
            .all(|plane| plane.signed_distance(p) >= -PLANE_TOLERANCE)
    }

    /// Test if an AABB intersects this frustum.
    ///
    /// Conservative: may return false positives, never false negatives.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.classify_aabb(aabb) != FrustumTest::Outside
    }

    /// Classify an AABB against the frustum (3-way test).
    ///
    /// For each plane, the corner furthest along the normal (p-vertex) and
    /// the corner furthest against it (n-vertex) are tested:
    /// - p-vertex outside any plane → `Outside` (early out)
    /// - n-vertex outside any plane → at least `Partial`
    /// - otherwise → `Inside`
    pub fn classify_aabb(&self, aabb: &AABB) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes() {
            let normal = plane.normal;

            let p_vertex = Vec3::new(
                if normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
                if normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
                if normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
            );

            if plane.signed_distance(p_vertex) < 0.0 {
                return FrustumTest::Outside;
            }

            let n_vertex = Vec3::new(
                if normal.x >= 0.0 { aabb.min.x } else { aabb.max.x },
                if normal.y >= 0.0 { aabb.min.y } else { aabb.max.y },
                if normal.z >= 0.0 { aabb.min.z } else { aabb.max.z },
            );

            if plane.signed_distance(n_vertex) < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
