use glam::{Mat4, Vec3};

/// Model matrix: translation * rotation * scale, applied right to left.
/// The pyramid sits at the origin, turned a quarter revolution about Y.
pub fn model_matrix() -> Mat4 {
    let translation = Mat4::from_translation(Vec3::ZERO);
    let rotation = Mat4::from_rotation_y(90_f32.to_radians());
    let scale = Mat4::from_scale(Vec3::ONE);
    translation * rotation * scale
}

/// View matrix: the world pushed five units down -Z, i.e. a camera backed
/// away from the origin.
pub fn view_matrix() -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0))
}

pub fn projection_matrix(width: u32, height: u32) -> Mat4 {
    let aspect = width as f32 / height as f32;
    Mat4::perspective_rh(45_f32.to_radians(), aspect, 0.1, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // For a perspective matrix, m11 = cot(fov/2) and m00 = m11 / aspect.
    fn aspect_of(projection: Mat4) -> f32 {
        projection.y_axis.y / projection.x_axis.x
    }

    #[test]
    fn projection_aspect_matches_window_size() {
        assert!((aspect_of(projection_matrix(800, 600)) - 800.0 / 600.0).abs() < 1e-6);
        assert!((aspect_of(projection_matrix(1920, 1080)) - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn square_window_gives_unit_aspect() {
        let projection = projection_matrix(600, 600);
        assert!((projection.x_axis.x - projection.y_axis.y).abs() < 1e-6);
    }

    #[test]
    fn model_is_a_pure_quarter_turn() {
        let model = model_matrix();
        // No translation component, unit scale.
        assert_eq!(model.w_axis, glam::Vec4::W);
        // +X rotates onto -Z under a 90 degree yaw.
        let turned = model.transform_point3(Vec3::X);
        assert!(turned.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-6));
    }

    #[test]
    fn view_backs_the_camera_off_five_units() {
        assert_eq!(view_matrix().w_axis, glam::Vec4::new(0.0, 0.0, -5.0, 1.0));
    }
}
