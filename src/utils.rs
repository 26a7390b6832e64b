/// Sentinel for "no back-pointer" in the flat search arrays
pub const NO_PARENT: u32 = u32::MAX;

/// Sentinel for an undiscovered cell's path cost
pub const UNREACHED: u32 = u32::MAX;

/// Pixel size of one grid cell on a drawing surface
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// Margin kept free on each side of a drawing surface
pub const SURFACE_PADDING: u32 = 20;
