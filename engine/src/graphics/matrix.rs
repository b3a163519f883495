use cgmath::{Matrix3, Matrix4, Point2, Rad, SquareMatrix, Transform, Vector2, Vector4};

/// 2D affine transform (translate/rotate composition).
///
/// Each operation composes on the left, so it applies after whatever the
/// matrix already does. Matches the classic rotate-about-a-point pattern:
/// translate to the origin, rotate, translate back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryMatrix(Matrix3<f64>);

impl GeometryMatrix {
    pub fn identity() -> Self {
        GeometryMatrix(Matrix3::identity())
    }

    pub fn translate(&mut self, tx: f64, ty: f64) {
        self.0 = Matrix3::from_translation(Vector2::new(tx, ty)) * self.0;
    }

    pub fn rotate(&mut self, theta: f64) {
        self.0 = Matrix3::from_angle_z(Rad(theta)) * self.0;
    }

    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        let p = self.0.transform_point(Point2::new(x, y));
        (p.x, p.y)
    }
}

impl Default for GeometryMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

/// Color transform: a per-channel multiply plus an additive offset, applied
/// to sampled texels. Independent of the geometry transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    mul: Matrix4<f64>,
    add: Vector4<f64>,
}

impl ColorMatrix {
    pub fn identity() -> Self {
        ColorMatrix {
            mul: Matrix4::identity(),
            add: Vector4::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Scale each channel independently.
    pub fn scale(r: f64, g: f64, b: f64, a: f64) -> Self {
        ColorMatrix {
            mul: Matrix4::from_diagonal(Vector4::new(r, g, b, a)),
            add: Vector4::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    pub(crate) fn mul_array(&self) -> [[f32; 4]; 4] {
        let m: [[f64; 4]; 4] = self.mul.into();
        m.map(|col| col.map(|v| v as f32))
    }

    pub(crate) fn add_array(&self) -> [f32; 4] {
        let v: [f64; 4] = self.add.into();
        v.map(|x| x as f32)
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn identity_leaves_points_alone() {
        let m = GeometryMatrix::identity();
        assert_close(m.transform(3.0, -4.0), (3.0, -4.0));
    }

    #[test]
    fn translate_offsets_points() {
        let mut m = GeometryMatrix::identity();
        m.translate(10.0, -2.0);
        assert_close(m.transform(1.0, 1.0), (11.0, -1.0));
    }

    #[test]
    fn rotate_quarter_turn_about_origin() {
        let mut m = GeometryMatrix::identity();
        m.rotate(FRAC_PI_2);
        assert_close(m.transform(1.0, 0.0), (0.0, 1.0));
    }

    #[test]
    fn operations_apply_after_existing_transform() {
        // Translate first, then rotate: the rotation must see the
        // translated point.
        let mut m = GeometryMatrix::identity();
        m.translate(1.0, 0.0);
        m.rotate(PI);
        assert_close(m.transform(0.0, 0.0), (-1.0, 0.0));
    }

    #[test]
    fn rotate_about_center() {
        // The rotate-a-texture-about-its-center composition used by the
        // demos: a quarter turn maps the top-left corner to the top-right.
        let (w, h) = (32.0, 32.0);
        let mut m = GeometryMatrix::identity();
        m.translate(-w / 2.0, -h / 2.0);
        m.rotate(FRAC_PI_2);
        m.translate(w / 2.0, h / 2.0);
        assert_close(m.transform(0.0, 0.0), (w, 0.0));
        assert_close(m.transform(w / 2.0, h / 2.0), (w / 2.0, h / 2.0));
    }

    #[test]
    fn color_identity_is_identity() {
        assert!(ColorMatrix::identity().is_identity());
        assert!(!ColorMatrix::scale(0.5, 1.0, 1.0, 1.0).is_identity());
    }

    #[test]
    fn color_scale_lands_on_diagonal() {
        let m = ColorMatrix::scale(0.5, 0.25, 1.0, 1.0);
        let mul = m.mul_array();
        assert_eq!(mul[0][0], 0.5);
        assert_eq!(mul[1][1], 0.25);
        assert_eq!(mul[2][2], 1.0);
        assert_eq!(m.add_array(), [0.0; 4]);
    }
}
