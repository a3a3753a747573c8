use crate::math::Matrix4;

/// Positions of the unit skybox cube, 12 triangles wound to face inwards.
#[rustfmt::skip]
pub const SKYBOX_VERTICES: [[f32; 3]; 36] = [
    // -Z
    [-1.0,  1.0, -1.0], [-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0],
    [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0], [-1.0,  1.0, -1.0],
    // -X
    [-1.0, -1.0,  1.0], [-1.0, -1.0, -1.0], [-1.0,  1.0, -1.0],
    [-1.0,  1.0, -1.0], [-1.0,  1.0,  1.0], [-1.0, -1.0,  1.0],
    // +X
    [ 1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0],
    [ 1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0], [ 1.0, -1.0, -1.0],
    // +Z
    [-1.0, -1.0,  1.0], [-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0],
    [ 1.0,  1.0,  1.0], [ 1.0, -1.0,  1.0], [-1.0, -1.0,  1.0],
    // +Y
    [-1.0,  1.0, -1.0], [ 1.0,  1.0, -1.0], [ 1.0,  1.0,  1.0],
    [ 1.0,  1.0,  1.0], [-1.0,  1.0,  1.0], [-1.0,  1.0, -1.0],
    // -Y
    [-1.0, -1.0, -1.0], [-1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0],
    [ 1.0, -1.0, -1.0], [-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0],
];

pub fn skybox_vertices() -> &'static [[f32; 3]] {
    &SKYBOX_VERTICES
}

/// View matrix for the skybox pass: the camera's rotation with its
/// translation removed, so the cube stays centred on the eye.
pub fn skybox_view(view: &Matrix4) -> Matrix4 {
    let [r0, r1, r2, _] = [view.row(0), view.row(1), view.row(2), view.row(3)];
    Matrix4::from_rows([
        [r0[0], r0[1], r0[2], 0.0],
        [r1[0], r1[1], r1[2], 0.0],
        [r2[0], r2[1], r2[2], 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    #[test]
    fn test_cube_has_36_unit_corners() {
        let vertices = skybox_vertices();
        assert_eq!(vertices.len(), 36);
        assert!(vertices
            .iter()
            .flatten()
            .all(|c| *c == 1.0 || *c == -1.0));
    }

    #[test]
    fn test_every_face_is_two_triangles() {
        for face in SKYBOX_VERTICES.chunks(6) {
            // All six vertices of a face share one fixed coordinate.
            let shared = (0..3).filter(|&axis| face.iter().all(|v| v[axis] == face[0][axis]));
            assert_eq!(shared.count(), 1);
        }
    }

    #[test]
    fn test_view_translation_is_stripped() {
        let view = Matrix4::look_at_rh(
            Vector3::new(3.0, 4.0, 5.0),
            Vector3::new(3.0, 4.0, 4.0),
            Vector3::UNIT_Y,
        )
        .unwrap();
        let sky = skybox_view(&view);

        assert_eq!(sky.column(3), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(sky.row(0)[..3], view.row(0)[..3]);
        // Rotation is kept: the eye's forward still maps to -Z.
        let forward = sky.transform_vector(Vector3::new(0.0, 0.0, -1.0));
        assert!((forward - Vector3::new(0.0, 0.0, -1.0)).magnitude() < 1e-6);
        assert_eq!(sky.transform_point(Vector3::ZERO), Vector3::ZERO);
    }
}
