// Game layer
//
// - `settings`: tuning constants and their validation
// - `obstacle`: obstacles that pick a random size and launch impulse on spawn
// - `ship`: the pointer-steered ship that dies on contact
// - `arena`: field layout, culling and refill

pub mod arena;
pub mod obstacle;
pub mod settings;
pub mod ship;

pub use arena::Arena;
pub use settings::ArenaSettings;
