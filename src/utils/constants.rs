/// Number of coordinate pairs a grid encodes (row i pairs with column i)
pub const PAIR_COUNT: usize = 12;

/// Filler character in the raw grid marking a missing/unknown digit
pub const PLACEHOLDER: char = '_';

/// Axis bounds in decimal degrees
pub const LATITUDE_BOUND: f64 = 90.0;
pub const LONGITUDE_BOUND: f64 = 180.0;

/// Degree-field width conventions (DDMMSS rows, DDDMMSS columns)
pub const LATITUDE_DEGREE_WIDTH: usize = 2;
pub const LONGITUDE_DEGREE_WIDTH: usize = 3;

/// Default input file names
pub const DEFAULT_GRID_FILE: &str = "data.txt";
pub const DEFAULT_SIGNS_FILE: &str = "offsets.txt";

/// Solar timezone estimate: one hour per this many degrees of longitude
pub const DEGREES_PER_HOUR: f64 = 15.0;
