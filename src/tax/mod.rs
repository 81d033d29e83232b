pub mod fy2026;
pub mod regime;

pub use fy2026::Regime;
pub use regime::{compute_new_regime, compute_old_regime, recommend, Recommendation, RegimeResult};
