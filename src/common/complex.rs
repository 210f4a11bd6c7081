use core::ops::{AddAssign, Mul, MulAssign};
pub type Scaler = f32;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex {
    pub r: Scaler,
    pub i: Scaler,
}

impl Complex {
    pub const fn new(r: Scaler, i: Scaler) -> Self {
        Self { r, i }
    }

    /// Squared magnitude |z|^2
    pub fn norm_sqr(&self) -> Scaler {
        self.r * self.r + self.i * self.i
    }
}

impl Mul for Complex {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Self::Output {
        Complex {
            r: self.r * rhs.r - self.i * rhs.i,
            i: self.r * rhs.i + self.i * rhs.r,
        }
    }
}

impl MulAssign<Scaler> for Complex {
    fn mul_assign(&mut self, rhs: Scaler) {
        self.r *= rhs;
        self.i *= rhs;
    }
}

impl AddAssign<Complex> for Complex {
    fn add_assign(&mut self, rhs: Complex) {
        self.r += rhs.r;
        self.i += rhs.i;
    }
}
