pub mod io;
pub mod plane;

pub use self::plane::{Plane, PlaneBuf, PlaneMut, Sample};
