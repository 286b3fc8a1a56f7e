pub mod fib_square;
pub mod legend;
pub mod readout;

pub use fib_square::FibSquare;
pub use legend::Legend;
pub use readout::Readout;
