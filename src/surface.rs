// Drawing target for the particle field. The browser implementation lives in
// `renderer`; tests record calls instead of painting.

use crate::color::Color;

extern crate nalgebra_glm as glm;
use glm::DVec2;

pub trait Surface {
    type Error;

    /// Current pixel dimensions as (width, height).
    fn size(&self) -> (f64, f64);

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    fn line(
        &mut self,
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), Self::Error>;

    fn disc(&mut self, center: DVec2, radius: f64, color: Color, alpha: f64) -> Result<(), Self::Error>;
}
