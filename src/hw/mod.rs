pub mod coils;

pub use coils::{Coils, Pattern, DE_ENERGIZED};
