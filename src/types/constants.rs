pub const FREE: i8 = 0;
pub const OCCUPIED: i8 = 100;

pub const DEFAULT_SOLID_MARKER: char = '#';
